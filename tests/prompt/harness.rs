//! Scripted messenger and fixtures shared by the prompt tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tagline::foundation::{
    ChannelId, GuildId, Member, Message, MessageId, Result, Role, RoleId, UserId,
};
use tagline::prompt::{AwaitOutcome, Messenger};
use tagline::resolver::{MemoryDirectory, ResolverRegistry};

pub const SOMEONE: u64 = 266_624_760_782_258_186;
pub const MODS: u64 = 312_312_312_312_312_312;

/// A messenger that records sends and plays back queued wait outcomes.
pub struct Script {
    replies: Mutex<VecDeque<AwaitOutcome>>,
    sent: Mutex<Vec<String>>,
}

impl Script {
    pub fn new(replies: Vec<AwaitOutcome>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

impl Messenger for Script {
    fn send(&self, _channel: ChannelId, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }

    fn await_reply(
        &self,
        _channel: ChannelId,
        _author: UserId,
        _timeout: Duration,
    ) -> AwaitOutcome {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(AwaitOutcome::TimedOut)
    }
}

/// A registry over a directory holding one member and one role.
pub fn registry() -> ResolverRegistry {
    let mut directory = MemoryDirectory::new();
    directory.insert_member(Member {
        user: UserId(SOMEONE),
        guild: GuildId(4),
        display_name: "someone".into(),
    });
    directory.insert_role(Role {
        id: RoleId(MODS),
        guild: GuildId(4),
        name: "mods".into(),
    });
    ResolverRegistry::new(Arc::new(directory))
}

pub fn origin(content: &str) -> Message {
    Message::new(MessageId(1), UserId(2), ChannelId(3), GuildId(4), content)
}

pub fn reply(content: &str) -> AwaitOutcome {
    AwaitOutcome::Reply(Message::new(
        MessageId(9),
        UserId(2),
        ChannelId(3),
        GuildId(4),
        content,
    ))
}
