//! Tokenizer tests.
//!
//! Flag extraction, quoted spans, and delimiter handling over raw text.

use tagline::grammar::{FlagValue, Tokenizer};

#[test]
fn words_split_on_the_delimiter() {
    let stream = Tokenizer::tokenize("kick someone being rude", " ", false, false);
    assert_eq!(stream.tokens, vec!["kick", "someone", "being", "rude"]);
    assert!(stream.flags.is_empty());
}

#[test]
fn flags_never_become_positional_tokens() {
    let stream = Tokenizer::tokenize("prune --force 100", " ", false, true);
    assert_eq!(stream.flags.get("force"), Some(&FlagValue::Present));
    assert_eq!(stream.tokens, vec!["prune", "100"]);
}

#[test]
fn valued_flag_forms() {
    let stream = Tokenizer::tokenize(
        r#"--days=7 --reason="routine cleanup" go"#,
        " ",
        false,
        true,
    );
    assert_eq!(stream.flags.get("days"), Some(&FlagValue::Value("7".into())));
    assert_eq!(
        stream.flags.get("reason"),
        Some(&FlagValue::Value("routine cleanup".into()))
    );
    assert_eq!(stream.tokens, vec!["go"]);
}

#[test]
fn quoted_flag_value_keeps_spaces() {
    let stream = Tokenizer::tokenize(r#"--note="two words""#, " ", false, true);
    assert_eq!(
        stream.flags.get("note"),
        Some(&FlagValue::Value("two words".into()))
    );
}

#[test]
fn flag_in_the_middle_still_splits_neighbours() {
    let stream = Tokenizer::tokenize("delete --force 5", " ", false, true);
    assert_eq!(stream.tokens, vec!["delete", "5"]);
}

#[test]
fn quoted_span_keeps_inner_delimiters() {
    let stream = Tokenizer::tokenize(r#"create "a new channel" text"#, " ", true, false);
    assert_eq!(stream.tokens, vec!["create", "a new channel", "text"]);
}

#[test]
fn unterminated_quote_is_literal_text() {
    let stream = Tokenizer::tokenize(r#"create "a new channel"#, " ", true, false);
    assert_eq!(stream.tokens, vec!["create", r#""a"#, "new", "channel"]);
}

#[test]
fn quoting_disabled_keeps_quotes_in_tokens() {
    let stream = Tokenizer::tokenize(r#""a b" c"#, " ", false, false);
    assert_eq!(stream.tokens, vec![r#""a"#, r#"b""#, "c"]);
}

#[test]
fn custom_delimiter_splits_verbatim() {
    let stream = Tokenizer::tokenize("one, two, three", ", ", false, false);
    assert_eq!(stream.tokens, vec!["one", "two", "three"]);
}

#[test]
fn empty_delimiter_yields_the_whole_content() {
    let stream = Tokenizer::tokenize("  keep it all  ", "", false, false);
    assert_eq!(stream.tokens, vec!["keep it all"]);
}

#[test]
fn flags_and_quotes_compose() {
    let stream = Tokenizer::tokenize(
        r#"--force "new channel" general"#,
        " ",
        true,
        true,
    );
    assert_eq!(stream.flags.get("force"), Some(&FlagValue::Present));
    assert_eq!(stream.tokens, vec!["new channel", "general"]);
}
