//! Interactive argument-resolution sessions for tagline.
//!
//! A [`PromptSession`] walks a compiled usage's tags over the tokens of one
//! message, resolving each through the registry. When a required tag cannot
//! be satisfied it reprompts the author through a [`Messenger`] and splices
//! the reply's tokens back in, until the session completes or a budget runs
//! out. Sessions are per-invocation values; the usage and registry they
//! borrow stay read-only and shared.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod messenger;
pub mod options;
pub mod session;

pub use messenger::{AwaitOutcome, Messenger};
pub use options::PromptOptions;
pub use session::{PromptSession, ResolvedArgs, SessionOutcome};
