//! Tagline - usage-grammar compiler and interactive argument prompting
//!
//! This crate re-exports all layers of the tagline system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: tagline_runtime    — Commands, prefix chain, dispatcher, console
//! Layer 3: tagline_prompt     — Prompt session state machine, messenger
//! Layer 2: tagline_resolver   — Resolver registry, built-ins, directory
//! Layer 1: tagline_grammar    — Tokenizer, usage compiler (Tag/Possible)
//! Layer 0: tagline_foundation — Core types (Value, ids, Message, Error)
//! ```

pub use tagline_foundation as foundation;
pub use tagline_grammar as grammar;
pub use tagline_prompt as prompt;
pub use tagline_resolver as resolver;
pub use tagline_runtime as runtime;
