//! Usage-string compiler and input tokenizer for tagline.
//!
//! A command declares its expected arguments with a compact usage string:
//!
//! ```text
//! <member:member> [reason:string{,200}] [...]
//! ```
//!
//! `<...>` wraps a required position, `[...]` an optional one, `|` separates
//! alternatives within one position, and a trailing `[...]` marks the
//! previous position as repeating. [`Usage::compile`] turns that string into
//! an immutable sequence of [`Tag`]s once, at command registration; every
//! invocation then shares the compiled form read-only.
//!
//! [`Tokenizer`] handles the other half: splitting raw message text into
//! `--flag[=value]` pairs and positional word tokens, with optional
//! quoted-string support.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod possible;
pub mod tag;
pub mod tokenizer;
pub mod usage;

pub use possible::{Possible, PossibleKind};
pub use tag::{Tag, TagRequirement, TagResponse};
pub use tokenizer::{FlagValue, TokenStream, Tokenizer};
pub use usage::Usage;
