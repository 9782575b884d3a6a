//! The session's channel to the outside world.
//!
//! A prompt session talks to its author through exactly two operations:
//! send a line of text, and block until the author replies (or the wait
//! ends some other way). The chat platform, a test script, or a console all
//! sit behind the same trait.

use std::time::Duration;

use tagline_foundation::{ChannelId, Message, Result, UserId};

/// How one wait for a reply ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AwaitOutcome {
    /// The author replied within the timeout.
    Reply(Message),
    /// The timeout elapsed with no reply.
    TimedOut,
    /// The surrounding context went away (channel deleted, shutdown).
    Cancelled,
}

/// Outbound messaging and reply collection for prompt sessions.
///
/// `await_reply` is the session's single suspension point; everything else
/// in a session is pure computation over values it already holds.
pub trait Messenger: Send + Sync {
    /// Sends `text` to the channel.
    ///
    /// # Errors
    ///
    /// Returns an error when the channel cannot be reached; the session
    /// treats this as an external abort.
    fn send(&self, channel: ChannelId, text: &str) -> Result<()>;

    /// Blocks until `author` sends a message in `channel`, the timeout
    /// elapses, or the context is cancelled.
    fn await_reply(&self, channel: ChannelId, author: UserId, timeout: Duration) -> AwaitOutcome;
}
