//! Registry dispatch tests.

use std::sync::Arc;

use tagline::foundation::{ChannelId, ErrorKind, Message, MessageId, UserId, Value};
use tagline::grammar::{Possible, Usage};
use tagline::resolver::{Invocation, MemoryDirectory, ResolverRegistry};

fn registry() -> ResolverRegistry {
    ResolverRegistry::new(Arc::new(MemoryDirectory::new()))
}

fn possible(usage: &str) -> Possible {
    Usage::compile(usage, None).unwrap().tags()[0].possibles[0].clone()
}

#[test]
fn every_builtin_name_is_known() {
    let registry = registry();
    for name in [
        "string", "str", "integer", "int", "float", "num", "number", "boolean", "bool", "url",
        "member", "role",
    ] {
        assert!(registry.known(name), "{name}");
    }
    assert!(!registry.known("frobnicator"));
}

#[test]
fn custom_resolver_receives_the_invocation() {
    let mut registry = registry();
    registry.register(
        "echo-author",
        |_: &str, _: &Possible, invocation: &Invocation<'_>| {
            Ok(Value::Str(invocation.message.author.to_string()))
        },
    );

    let message = Message::direct(MessageId(1), UserId(42), ChannelId(3), "");
    let invocation = Invocation {
        message: &message,
        command: Some("whoami"),
    };
    let p = possible("<who:echo-author>");
    let value = registry
        .resolve("echo-author", "anything", &p, &invocation)
        .unwrap();
    assert_eq!(value, Value::Str("42".to_string()));
}

#[test]
fn reregistering_replaces_the_resolver() {
    let mut registry = registry();
    registry.register("version", |_: &str, _: &Possible, _: &Invocation<'_>| {
        Ok(Value::Int(1))
    });
    registry.register("version", |_: &str, _: &Possible, _: &Invocation<'_>| {
        Ok(Value::Int(2))
    });

    let message = Message::direct(MessageId(1), UserId(2), ChannelId(3), "");
    let invocation = Invocation {
        message: &message,
        command: None,
    };
    let p = possible("<v:version>");
    assert_eq!(
        registry.resolve("version", "x", &p, &invocation).unwrap(),
        Value::Int(2)
    );
}

#[test]
fn unknown_name_surfaces_at_resolution_time() {
    let registry = registry();
    let message = Message::direct(MessageId(1), UserId(2), ChannelId(3), "");
    let invocation = Invocation {
        message: &message,
        command: None,
    };
    let p = possible("<thing:mystery>");
    match registry.resolve("mystery", "x", &p, &invocation) {
        Err(e) => assert!(matches!(e.kind, ErrorKind::UnknownResolver { .. })),
        Ok(v) => panic!("expected an unknown-resolver error, got {v:?}"),
    }
}
