//! Command registry, prefix resolution, and console front end for tagline.
//!
//! This crate turns the engine layers into something runnable: commands
//! that own a compiled usage, a prioritized prefix chain, a dispatcher
//! that routes messages into prompt sessions, and a rustyline-backed
//! console implementing the [`Messenger`] trait for local use.
//!
//! [`Messenger`]: tagline_prompt::Messenger

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod console;
pub mod dispatch;

pub use command::{Command, CommandRegistry};
pub use console::{ConsoleMessenger, LineEditor, ReadResult, RustylineEditor};
pub use dispatch::{DispatchOutcome, Dispatcher, PrefixChain, PrefixKind};
