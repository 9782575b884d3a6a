//! Possible segment tests.
//!
//! Typed members, bounds, and literal alternatives.

use tagline::grammar::{PossibleKind, Usage};

fn single(usage: &str) -> tagline::grammar::Possible {
    let compiled = Usage::compile(usage, None).unwrap();
    compiled.tags()[0].possibles[0].clone()
}

#[test]
fn typed_member_carries_its_type() {
    let p = single("<target:member>");
    assert_eq!(p.name, "target");
    assert_eq!(p.type_name(), Some("member"));
}

#[test]
fn bounds_variants_parse() {
    assert_eq!(single("<n:integer{1,10}>").bounds(), (Some(1.0), Some(10.0)));
    assert_eq!(single("<n:integer{3}>").bounds(), (Some(3.0), None));
    assert_eq!(single("<n:integer{3,}>").bounds(), (Some(3.0), None));
    assert_eq!(single("<n:string{,32}>").bounds(), (None, Some(32.0)));
}

#[test]
fn reversed_bounds_are_rejected() {
    assert!(Usage::compile("<n:integer{10,1}>", None).is_err());
}

#[test]
fn unparseable_bounds_are_rejected() {
    assert!(Usage::compile("<n:integer{one,ten}>", None).is_err());
}

#[test]
fn bare_word_matches_case_insensitively() {
    let p = single("<off>");
    assert!(matches!(p.kind, PossibleKind::Literal { .. }));
    assert!(p.matches_literal("off"));
    assert!(p.matches_literal("Off"));
    assert!(!p.matches_literal("offline"));
}

#[test]
fn pattern_literal_with_flags() {
    let p = single("<state/enable|disable/i>");
    assert!(p.matches_literal("ENABLE"));
    assert!(p.matches_literal("disable"));
    assert!(!p.matches_literal("enabled"));
}

#[test]
fn invalid_pattern_literal_is_a_grammar_error() {
    assert!(Usage::compile("<state/[unclosed/>", None).is_err());
}

#[test]
fn unsupported_pattern_flags_are_rejected() {
    assert!(Usage::compile("<state/on|off/g>", None).is_err());
}

#[test]
fn duplicate_names_within_a_tag_are_rejected() {
    let err = Usage::compile("<x:member|x:string>", None).unwrap_err();
    assert!(err.is_grammar());
}

#[test]
fn same_name_across_tags_is_fine() {
    assert!(Usage::compile("<x:member> [x:string]", None).is_ok());
}
