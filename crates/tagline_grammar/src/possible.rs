//! One argument alternative within a tag.
//!
//! A possible is either *typed* — `name:type` with optional `{min,max}`
//! bounds, resolved through the resolver registry — or a *literal*, matched
//! directly against the raw token: a bare word (`on`, matched
//! case-insensitively) or an explicit `name/pattern/flags` regex.

use std::fmt;

use regex::Regex;
use tagline_foundation::{Error, ErrorKind, Result, regex};

/// One concrete argument specification.
#[derive(Clone, Debug)]
pub struct Possible {
    /// Identifier used in documentation and error messages.
    pub name: String,
    /// Whether this possible is typed or literal.
    pub kind: PossibleKind,
}

/// The two families of possibles.
#[derive(Clone, Debug)]
pub enum PossibleKind {
    /// Resolved through the resolver registry under `type_name`.
    Typed {
        /// Key into the resolver registry.
        type_name: String,
        /// Lower bound (numeric value or length), if declared.
        min: Option<f64>,
        /// Upper bound, if declared.
        max: Option<f64>,
    },
    /// Satisfied by matching the raw token against a regex, bypassing the
    /// registry entirely.
    Literal {
        /// How the literal was written, for canonical re-serialization.
        source: LiteralSource,
        /// The compiled, anchored matcher.
        pattern: Regex,
    },
}

/// How a literal possible was declared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LiteralSource {
    /// A bare word; the possible's name doubles as the matched text.
    Word,
    /// An explicit `/pattern/flags` suffix.
    Pattern {
        /// The pattern text as written.
        pattern: String,
        /// Inline flags as written (subset of `imsx`).
        flags: String,
    },
}

impl Possible {
    /// Parses one `|`-separated member of a tag.
    ///
    /// # Errors
    ///
    /// Returns a grammar error if the member does not match the segment
    /// syntax, declares reversed or unparseable bounds, or carries an
    /// invalid literal pattern.
    pub fn parse(member: &str) -> Result<Self> {
        let segment = regex!(
            r"^([^:{}/|]+)(?::([^:{}/|]+))?(?:\{([^,}]*)(?:,([^,}]*))?\})?(?:/((?:\\.|[^/\\])+)/([a-z]*))?$"
        );

        let caps = segment
            .captures(member.trim())
            .ok_or_else(|| Error::invalid_bound(member))?;

        let name = caps[1].trim().to_string();
        let type_name = caps.get(2).map(|m| m.as_str().trim().to_string());
        let min = parse_limit(caps.get(3).map(|m| m.as_str()), member)?;
        let max = parse_limit(caps.get(4).map(|m| m.as_str()), member)?;
        let literal = caps.get(5).map(|m| m.as_str().to_string());
        let flags = caps.get(6).map_or(String::new(), |m| m.as_str().to_string());

        if let Some(pattern) = literal {
            if type_name.is_some() || min.is_some() || max.is_some() {
                return Err(Error::new(ErrorKind::InvalidLiteral {
                    pattern,
                    message: "a pattern literal cannot also declare a type or bounds".into(),
                }));
            }
            let compiled = compile_literal(&pattern, &flags)?;
            return Ok(Self {
                name,
                kind: PossibleKind::Literal {
                    source: LiteralSource::Pattern { pattern, flags },
                    pattern: compiled,
                },
            });
        }

        match type_name {
            Some(type_name) => {
                if let (Some(lo), Some(hi)) = (min, max) {
                    if lo > hi {
                        return Err(Error::invalid_bound(member));
                    }
                }
                Ok(Self {
                    name,
                    kind: PossibleKind::Typed {
                        type_name,
                        min,
                        max,
                    },
                })
            }
            None => {
                if min.is_some() || max.is_some() {
                    return Err(Error::invalid_bound(member));
                }
                // Bare word: the name is the literal text, matched whole and
                // case-insensitively.
                let compiled = Regex::new(&format!("^(?i:{})$", regex::escape(&name)))
                    .map_err(|e| Error::new(ErrorKind::Internal(e.to_string())))?;
                Ok(Self {
                    name,
                    kind: PossibleKind::Literal {
                        source: LiteralSource::Word,
                        pattern: compiled,
                    },
                })
            }
        }
    }

    /// Returns the registry type name for a typed possible.
    #[must_use]
    pub fn type_name(&self) -> Option<&str> {
        match &self.kind {
            PossibleKind::Typed { type_name, .. } => Some(type_name),
            PossibleKind::Literal { .. } => None,
        }
    }

    /// Returns the declared bounds for a typed possible.
    #[must_use]
    pub fn bounds(&self) -> (Option<f64>, Option<f64>) {
        match &self.kind {
            PossibleKind::Typed { min, max, .. } => (*min, *max),
            PossibleKind::Literal { .. } => (None, None),
        }
    }

    /// Matches a raw token against a literal possible.
    ///
    /// Always false for typed possibles; those go through the registry.
    #[must_use]
    pub fn matches_literal(&self, token: &str) -> bool {
        match &self.kind {
            PossibleKind::Literal { pattern, .. } => pattern.is_match(token),
            PossibleKind::Typed { .. } => false,
        }
    }

    /// Short description for generated reprompt messages, e.g.
    /// `reason:string{,200}` or `on`.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Possible {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            PossibleKind::Typed {
                type_name,
                min,
                max,
            } => {
                write!(f, "{}:{type_name}", self.name)?;
                match (min, max) {
                    (Some(lo), Some(hi)) => write!(f, "{{{lo},{hi}}}"),
                    (Some(lo), None) => write!(f, "{{{lo},}}"),
                    (None, Some(hi)) => write!(f, "{{,{hi}}}"),
                    (None, None) => Ok(()),
                }
            }
            PossibleKind::Literal { source, .. } => match source {
                LiteralSource::Word => write!(f, "{}", self.name),
                LiteralSource::Pattern { pattern, flags } => {
                    write!(f, "{}/{pattern}/{flags}", self.name)
                }
            },
        }
    }
}

impl PartialEq for Possible {
    fn eq(&self, other: &Self) -> bool {
        if self.name != other.name {
            return false;
        }
        match (&self.kind, &other.kind) {
            (
                PossibleKind::Typed {
                    type_name: t1,
                    min: lo1,
                    max: hi1,
                },
                PossibleKind::Typed {
                    type_name: t2,
                    min: lo2,
                    max: hi2,
                },
            ) => t1 == t2 && lo1 == lo2 && hi1 == hi2,
            (
                PossibleKind::Literal { source: s1, .. },
                PossibleKind::Literal { source: s2, .. },
            ) => s1 == s2,
            _ => false,
        }
    }
}

/// Parses one side of a `{min,max}` bound. Empty text means unbounded.
fn parse_limit(text: Option<&str>, member: &str) -> Result<Option<f64>> {
    match text.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => {
            let value: f64 = raw.parse().map_err(|_| Error::invalid_bound(member))?;
            if value.is_finite() {
                Ok(Some(value))
            } else {
                Err(Error::invalid_bound(member))
            }
        }
    }
}

/// Compiles a `/pattern/flags` literal, anchored to the whole token.
fn compile_literal(pattern: &str, flags: &str) -> Result<Regex> {
    if !flags.chars().all(|c| "imsx".contains(c)) {
        return Err(Error::new(ErrorKind::InvalidLiteral {
            pattern: pattern.to_string(),
            message: format!("unsupported flags: {flags}"),
        }));
    }
    let inline = if flags.is_empty() {
        String::new()
    } else {
        format!("(?{flags})")
    };
    Regex::new(&format!("^{inline}(?:{pattern})$")).map_err(|e| {
        Error::new(ErrorKind::InvalidLiteral {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })
    })
}
