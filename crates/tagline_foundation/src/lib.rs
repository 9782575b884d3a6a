//! Core types, identifiers, and errors for tagline.
//!
//! This crate provides:
//! - [`Message`] - An immutable snapshot of a chat message
//! - Snowflake identifier newtypes ([`UserId`], [`ChannelId`], [`GuildId`], ...)
//! - [`Value`] - The tagged union of resolved argument values
//! - [`Error`] - Error types covering the grammar/resolution taxonomy

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

#[macro_use]
mod macros;

mod error;
mod id;
mod message;
mod value;

pub use error::{Error, ErrorKind, RangeCheck, RangeUnit, Result};
pub use id::{ChannelId, GuildId, MessageId, RoleId, UserId};
pub use message::{Member, Message, Role};
pub use value::Value;
