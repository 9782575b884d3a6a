//! Prompt session tests.

use std::time::Duration;

use tagline::foundation::{UserId, Value};
use tagline::grammar::{FlagValue, Usage};
use tagline::prompt::{PromptOptions, PromptSession, ResolvedArgs, SessionOutcome};

use crate::harness::{MODS, SOMEONE, Script, origin, registry, reply};

fn completed(outcome: SessionOutcome) -> ResolvedArgs {
    match outcome {
        SessionOutcome::Completed(args) => args,
        other => panic!("expected completion, got {other:?}"),
    }
}

#[test]
fn member_then_free_text_reason() {
    let usage = Usage::compile("<member:member> [reason:string]", None).unwrap();
    let registry = registry();
    let script = Script::new(vec![]);
    let content = format!("<@{SOMEONE}> being rude in chat");
    let message = origin(&content);

    let outcome = PromptSession::new(
        &usage,
        &registry,
        &script,
        &message,
        PromptOptions::default(),
    )
    .run(&content);

    let args = completed(outcome);
    assert_eq!(args.params.len(), 2);
    assert_eq!(
        args.params[0].as_member().unwrap().user,
        UserId(SOMEONE)
    );
    assert_eq!(args.params[1], Value::Str("being rude in chat".into()));
    assert!(!args.reprompted);
}

#[test]
fn flags_are_extracted_before_resolution() {
    let usage = Usage::compile("<count:integer{1,100}>", None).unwrap();
    let registry = registry();
    let script = Script::new(vec![]);
    let message = origin("!prune --force 50");

    let outcome = PromptSession::new(
        &usage,
        &registry,
        &script,
        &message,
        PromptOptions::default(),
    )
    .run("--force 50");

    let args = completed(outcome);
    assert_eq!(args.flags.get("force"), Some(&FlagValue::Present));
    assert_eq!(args.params, vec![Value::Int(50)]);
}

#[test]
fn quoted_token_satisfies_one_tag() {
    let usage = Usage::compile("<name:string{1,32}> <kind:string>", None).unwrap();
    let registry = registry();
    let script = Script::new(vec![]);
    let message = origin(r#"create "a new channel" text"#);

    let outcome = PromptSession::new(
        &usage,
        &registry,
        &script,
        &message,
        PromptOptions::default().quoted_strings(true),
    )
    .run(r#""a new channel" text"#);

    let args = completed(outcome);
    assert_eq!(
        args.params,
        vec![
            Value::Str("a new channel".into()),
            Value::Str("text".into())
        ]
    );
}

#[test]
fn within_bounds_passes_and_out_of_bounds_reprompts() {
    let usage = Usage::compile("<count:integer{1,10}>", None).unwrap();
    let registry = registry();

    let script = Script::new(vec![]);
    let message = origin("!prune 5");
    let outcome = PromptSession::new(
        &usage,
        &registry,
        &script,
        &message,
        PromptOptions::default(),
    )
    .run("5");
    assert_eq!(completed(outcome).params, vec![Value::Int(5)]);
    assert!(script.sent().is_empty());

    let script = Script::new(vec![reply("7")]);
    let message = origin("!prune 50");
    let outcome = PromptSession::new(
        &usage,
        &registry,
        &script,
        &message,
        PromptOptions::default().limit(1),
    )
    .run("50");
    let args = completed(outcome);
    assert_eq!(args.params, vec![Value::Int(7)]);
    assert!(args.reprompted);
    assert_eq!(script.sent().len(), 1);
}

#[test]
fn default_limit_aborts_before_sending() {
    let usage = Usage::compile("<count:integer>", None).unwrap();
    let registry = registry();
    let script = Script::new(vec![reply("unreachable")]);
    let message = origin("!prune");

    let outcome = PromptSession::new(
        &usage,
        &registry,
        &script,
        &message,
        PromptOptions::default(),
    )
    .run("");

    assert!(matches!(outcome, SessionOutcome::AbortedLimit { .. }));
    assert!(script.sent().is_empty());
}

#[test]
fn alternatives_try_role_before_string() {
    let usage = Usage::compile("<target:role|name:string{1,32}>", None).unwrap();
    let registry = registry();
    let message = origin("");

    let script = Script::new(vec![]);
    let outcome = PromptSession::new(
        &usage,
        &registry,
        &script,
        &message,
        PromptOptions::default(),
    )
    .run(&format!("<@&{MODS}>"));
    match &completed(outcome).params[0] {
        Value::Role(role) => assert_eq!(role.name, "mods"),
        other => panic!("expected the role alternative, got {other:?}"),
    }

    let script = Script::new(vec![]);
    let outcome = PromptSession::new(
        &usage,
        &registry,
        &script,
        &message,
        PromptOptions::default(),
    )
    .run("moderators");
    assert_eq!(
        completed(outcome).params,
        vec![Value::Str("moderators".into())]
    );
}

#[test]
fn reply_satisfies_outstanding_tag_and_marks_reprompted() {
    let usage = Usage::compile("<who:member>", None).unwrap();
    let registry = registry();
    let script = Script::new(vec![reply(&format!("<@{SOMEONE}>"))]);
    let message = origin("!kick");

    let outcome = PromptSession::new(
        &usage,
        &registry,
        &script,
        &message,
        PromptOptions::default().limit(2),
    )
    .run("");

    let args = completed(outcome);
    assert!(args.reprompted);
    assert_eq!(args.params[0].as_member().unwrap().user, UserId(SOMEONE));
}

#[test]
fn generated_reprompt_names_the_expected_argument() {
    let usage = Usage::compile("<who:member>", None).unwrap();
    let registry = registry();
    let script = Script::new(vec![reply(&format!("<@{SOMEONE}>"))]);
    let message = origin("!kick");

    let outcome = PromptSession::new(
        &usage,
        &registry,
        &script,
        &message,
        PromptOptions::default().limit(1),
    )
    .run("");

    completed(outcome);
    let sent = script.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].contains("who:member"), "prompt was: {}", sent[0]);
    assert!(sent[0].contains("abort"), "prompt was: {}", sent[0]);
}

#[test]
fn abort_cancelled_and_timeout_are_distinct_terminals() {
    let usage = Usage::compile("<count:integer>", None).unwrap();
    let registry = registry();
    let message = origin("!prune");
    let options = PromptOptions::default().limit(1);

    let script = Script::new(vec![reply("abort")]);
    let outcome =
        PromptSession::new(&usage, &registry, &script, &message, options).run("");
    assert!(matches!(outcome, SessionOutcome::AbortedExternal { .. }));

    let script = Script::new(vec![tagline::prompt::AwaitOutcome::Cancelled]);
    let outcome =
        PromptSession::new(&usage, &registry, &script, &message, options).run("");
    assert!(matches!(outcome, SessionOutcome::AbortedExternal { .. }));

    let script = Script::new(vec![tagline::prompt::AwaitOutcome::TimedOut]);
    let outcome =
        PromptSession::new(&usage, &registry, &script, &message, options).run("");
    assert!(matches!(outcome, SessionOutcome::AbortedLimit { .. }));
}

#[test]
fn elapsed_deadline_aborts_without_sending() {
    let usage = Usage::compile("<count:integer>", None).unwrap();
    let registry = registry();
    let script = Script::new(vec![reply("5")]);
    let message = origin("!prune");

    let outcome = PromptSession::new(
        &usage,
        &registry,
        &script,
        &message,
        PromptOptions::default().limit(5).time(Duration::ZERO),
    )
    .run("");

    assert!(matches!(outcome, SessionOutcome::AbortedLimit { .. }));
    assert!(script.sent().is_empty());
}

#[test]
fn repeating_tag_collects_until_a_token_fails() {
    let usage = Usage::compile("<n:integer> [...]", None).unwrap();
    let registry = registry();
    let script = Script::new(vec![]);
    let message = origin("!add 1 2 3 x");

    let outcome = PromptSession::new(
        &usage,
        &registry,
        &script,
        &message,
        PromptOptions::default(),
    )
    .run("1 2 3 x");

    let args = completed(outcome);
    assert_eq!(
        args.params,
        vec![Value::Int(1), Value::Int(2), Value::Int(3)]
    );
}

#[test]
fn optional_tags_may_all_be_skipped() {
    let usage = Usage::compile("[days:integer] [silent:boolean]", None).unwrap();
    let registry = registry();
    let script = Script::new(vec![]);
    let message = origin("!sweep");

    let outcome = PromptSession::new(
        &usage,
        &registry,
        &script,
        &message,
        PromptOptions::default(),
    )
    .run("");

    let args = completed(outcome);
    assert!(args.params.is_empty());
    assert!(!args.reprompted);
}
