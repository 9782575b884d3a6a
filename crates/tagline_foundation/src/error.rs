//! Error types for the tagline system.
//!
//! Uses `thiserror` for ergonomic error definition. Two families share the
//! one type: grammar errors, raised once when a usage string is compiled or
//! a command is registered, and resolution errors, raised per token while a
//! prompt session runs. Resolution errors are always recoverable at the
//! session level; terminal session outcomes are modeled separately as
//! ordinary values, not errors.

use std::fmt;

use thiserror::Error;

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for tagline operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an unbalanced-brackets grammar error.
    #[must_use]
    pub fn unbalanced_brackets(usage: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnbalancedBrackets {
            usage: usage.into(),
        })
    }

    /// Creates a nested-tag grammar error.
    #[must_use]
    pub fn nested_tag(position: usize) -> Self {
        Self::new(ErrorKind::NestedTag { position })
    }

    /// Creates an unexpected-character grammar error.
    #[must_use]
    pub fn unexpected_character(character: char, position: usize) -> Self {
        Self::new(ErrorKind::UnexpectedCharacter {
            character,
            position,
        })
    }

    /// Creates a duplicate-name grammar error.
    #[must_use]
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateName { name: name.into() })
    }

    /// Creates an invalid-bound grammar error.
    #[must_use]
    pub fn invalid_bound(text: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidBound { text: text.into() })
    }

    /// Creates an unknown-type registration error.
    #[must_use]
    pub fn unknown_type(type_name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownType {
            type_name: type_name.into(),
        })
    }

    /// Creates a per-token coercion failure.
    #[must_use]
    pub fn invalid_argument(name: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument {
            name: name.into(),
            expected: expected.into(),
        })
    }

    /// Creates an out-of-range failure (post-coercion bound check).
    #[must_use]
    pub fn out_of_range(check: RangeCheck) -> Self {
        Self::new(ErrorKind::OutOfRange(check))
    }

    /// Creates a failed member lookup.
    #[must_use]
    pub fn invalid_member(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidMember { name: name.into() })
    }

    /// Creates a failed role lookup.
    #[must_use]
    pub fn invalid_role(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidRole { name: name.into() })
    }

    /// Creates an unknown-resolver runtime failure.
    #[must_use]
    pub fn unknown_resolver(type_name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownResolver {
            type_name: type_name.into(),
        })
    }

    /// Returns true if this error belongs to the grammar family, i.e. it is
    /// fatal at configuration time rather than recoverable per token.
    #[must_use]
    pub const fn is_grammar(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::UnbalancedBrackets { .. }
                | ErrorKind::NestedTag { .. }
                | ErrorKind::UnexpectedCharacter { .. }
                | ErrorKind::EmptyTag { .. }
                | ErrorKind::DuplicateName { .. }
                | ErrorKind::InvalidBound { .. }
                | ErrorKind::InvalidLiteral { .. }
                | ErrorKind::DanglingRepeat { .. }
                | ErrorKind::UnknownType { .. }
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A bracket in the usage string was opened but never closed, or closed
    /// without being opened.
    #[error("unbalanced brackets in usage string: {usage}")]
    UnbalancedBrackets {
        /// The offending usage string.
        usage: String,
    },

    /// A tag was opened inside another tag.
    #[error("nested tag at offset {position}")]
    NestedTag {
        /// Byte offset of the inner opening bracket.
        position: usize,
    },

    /// A character other than whitespace appeared outside any tag.
    #[error("unexpected character {character:?} at offset {position}")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset into the usage string.
        position: usize,
    },

    /// A tag contained no possibles.
    #[error("empty tag at offset {position}")]
    EmptyTag {
        /// Byte offset of the closing bracket.
        position: usize,
    },

    /// Two possibles within one tag share a name.
    #[error("duplicate argument name in tag: {name}")]
    DuplicateName {
        /// The duplicated name.
        name: String,
    },

    /// A `{min,max}` bound failed to parse or is reversed.
    #[error("invalid bound: {text}")]
    InvalidBound {
        /// The bound text as written.
        text: String,
    },

    /// A `/pattern/flags` literal failed to compile.
    #[error("invalid literal pattern /{pattern}/: {message}")]
    InvalidLiteral {
        /// The pattern as written.
        pattern: String,
        /// The regex engine's complaint.
        message: String,
    },

    /// A `[...]` repeat marker appeared with no preceding tag.
    #[error("repeat marker at offset {position} has no preceding tag")]
    DanglingRepeat {
        /// Byte offset of the marker.
        position: usize,
    },

    /// A possible names a type no resolver is registered for.
    ///
    /// Raised at command registration; truly dynamic names that are
    /// registered later surface as [`ErrorKind::UnknownResolver`] instead.
    #[error("unknown argument type: {type_name}")]
    UnknownType {
        /// The unresolvable type name.
        type_name: String,
    },

    /// A token failed type coercion.
    #[error("{name} must be a valid {expected}")]
    InvalidArgument {
        /// Name of the possible being resolved.
        name: String,
        /// Human-readable description of the expected type.
        expected: String,
    },

    /// A coerced value fell outside the possible's declared bounds.
    #[error("{0}")]
    OutOfRange(RangeCheck),

    /// A token did not name a resolvable guild member.
    #[error("{name} must mention a guild member or give their id")]
    InvalidMember {
        /// Name of the possible being resolved.
        name: String,
    },

    /// A token did not name a resolvable guild role.
    #[error("{name} must mention a guild role or give its id")]
    InvalidRole {
        /// Name of the possible being resolved.
        name: String,
    },

    /// No resolver is registered for a type name at resolution time.
    #[error("no resolver registered for type: {type_name}")]
    UnknownResolver {
        /// The unresolvable type name.
        type_name: String,
    },

    /// The channel a prompt should be sent to is gone.
    #[error("channel is unavailable")]
    ChannelUnavailable,

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// How a bound applies to a resolved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeUnit {
    /// The bound constrains the numeric value itself.
    Value,
    /// The bound constrains a length in characters.
    Characters,
}

/// A failed bound check, carrying enough context for a helpful message.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeCheck {
    /// Name of the possible being resolved.
    pub name: String,
    /// Lower bound, if declared.
    pub min: Option<f64>,
    /// Upper bound, if declared.
    pub max: Option<f64>,
    /// Whether the bound applies to a value or a length.
    pub unit: RangeUnit,
}

impl fmt::Display for RangeCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (Some(min), Some(max)) => write!(f, "{} must be between {min} and {max}", self.name)?,
            (Some(min), None) => write!(f, "{} must be at least {min}", self.name)?,
            (None, Some(max)) => write!(f, "{} must be at most {max}", self.name)?,
            (None, None) => write!(f, "{} is out of range", self.name)?,
        }
        if self.unit == RangeUnit::Characters {
            write!(f, " characters")?;
        }
        Ok(())
    }
}
