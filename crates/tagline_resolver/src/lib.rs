//! Resolver registry and built-in argument resolvers for tagline.
//!
//! A resolver converts one raw token into a typed [`Value`] for one type
//! name. Built-ins cover primitive coercions (`string`, `integer`, `float`,
//! `boolean`, `url`) and platform-entity lookups (`member`, `role`);
//! anything else is registered at runtime under its own name.
//!
//! Resolution failures are always recoverable: the prompt session turns
//! them into a reprompt (required tag) or a skip (optional tag).
//!
//! [`Value`]: tagline_foundation::Value

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod builtin;
pub mod directory;
pub mod registry;

pub use directory::{Directory, MemoryDirectory};
pub use registry::{Invocation, Resolve, ResolverRegistry};
