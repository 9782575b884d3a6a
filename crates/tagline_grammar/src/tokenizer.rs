//! Input tokenization.
//!
//! Converts raw message text into flag key/value pairs and an ordered
//! sequence of positional word tokens. Flags are extracted before word
//! splitting, so `--force delete 5` yields the flag `force` and the tokens
//! `delete` and `5`.

use std::collections::BTreeMap;

use tagline_foundation::regex;

/// Value recorded for one extracted flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlagValue {
    /// The flag appeared bare (`--name`).
    Present,
    /// The flag carried a value (`--name=value` or `--name="some value"`).
    Value(String),
}

impl FlagValue {
    /// Returns the carried value, or `None` for a bare flag.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Present => None,
            Self::Value(v) => Some(v),
        }
    }
}

/// Output of one tokenizer run: extracted flags plus positional tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenStream {
    /// Flags by name, in name order.
    pub flags: BTreeMap<String, FlagValue>,
    /// Positional tokens, left to right.
    pub tokens: Vec<String>,
}

/// Tokenizes raw message text.
///
/// Stateless; every call is independent and deterministic.
pub struct Tokenizer;

impl Tokenizer {
    /// Tokenizes `content`.
    ///
    /// - With `flag_support`, `--name` and `--name=value` pairs are pulled
    ///   out first and never appear as positional tokens.
    /// - The residue is split on `delimiter` (empty tokens dropped). With
    ///   `quoted_string_support`, a `"` opening a token captures through the
    ///   closing `"` as one token, quotes stripped and inner delimiters
    ///   preserved; an unterminated quote degrades to literal text.
    /// - An empty `delimiter` yields the whole residue as a single token.
    #[must_use]
    pub fn tokenize(
        content: &str,
        delimiter: &str,
        quoted_string_support: bool,
        flag_support: bool,
    ) -> TokenStream {
        let (residue, flags) = if flag_support {
            Self::extract_flags(content, delimiter)
        } else {
            (content.to_string(), BTreeMap::new())
        };

        let tokens = if quoted_string_support {
            Self::split_quoted(&residue, delimiter)
        } else {
            Self::split(&residue, delimiter)
        };

        TokenStream { flags, tokens }
    }

    /// Extracts `--name[=value]` pairs anywhere in `content`.
    ///
    /// Each match is replaced with the delimiter so the words around it
    /// still split apart.
    fn extract_flags(content: &str, delimiter: &str) -> (String, BTreeMap<String, FlagValue>) {
        let pattern = regex!(r#"--([A-Za-z][\w-]*)(?:=(?:"((?:[^"\\]|\\.)*)"|(\S+)))?"#);

        let mut flags = BTreeMap::new();
        for caps in pattern.captures_iter(content) {
            let name = caps[1].to_string();
            let value = if let Some(quoted) = caps.get(2) {
                FlagValue::Value(unescape(quoted.as_str()))
            } else if let Some(bare) = caps.get(3) {
                FlagValue::Value(bare.as_str().to_string())
            } else {
                FlagValue::Present
            };
            flags.insert(name, value);
        }

        let residue = pattern.replace_all(content, delimiter).into_owned();
        (residue, flags)
    }

    /// Splits on the delimiter, dropping empty tokens.
    fn split(content: &str, delimiter: &str) -> Vec<String> {
        if delimiter.is_empty() {
            let trimmed = content.trim();
            return if trimmed.is_empty() {
                Vec::new()
            } else {
                vec![trimmed.to_string()]
            };
        }
        content
            .split(delimiter)
            .filter(|part| !part.is_empty())
            .map(String::from)
            .collect()
    }

    /// Splits on the delimiter with double-quoted spans kept whole.
    fn split_quoted(content: &str, delimiter: &str) -> Vec<String> {
        if delimiter.is_empty() {
            return Self::split(content, delimiter);
        }

        let mut tokens = Vec::new();
        let mut rest = content;

        loop {
            while let Some(stripped) = rest.strip_prefix(delimiter) {
                rest = stripped;
            }
            if rest.is_empty() {
                break;
            }

            // A quote opening a token captures through the closing quote.
            if let Some(inner) = rest.strip_prefix('"') {
                if let Some(close) = inner.find('"') {
                    tokens.push(inner[..close].to_string());
                    rest = &inner[close + 1..];
                    continue;
                }
                // Unterminated: fall through and treat the quote literally.
            }

            match rest.find(delimiter) {
                Some(idx) => {
                    tokens.push(rest[..idx].to_string());
                    rest = &rest[idx + delimiter.len()..];
                }
                None => {
                    tokens.push(rest.to_string());
                    break;
                }
            }
        }

        tokens
    }
}

/// Removes the backslash escapes a quoted flag value may carry.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(ch);
        }
    }
    out
}
