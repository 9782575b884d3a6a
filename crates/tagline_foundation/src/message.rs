//! Message snapshots and platform entities.
//!
//! [`Message`] is an immutable value copied out of the collaborator's
//! native message object. The engine never mutates or extends
//! collaborator-owned state; everything it derives from a message lives in
//! its own structures.

use crate::id::{ChannelId, GuildId, MessageId, RoleId, UserId};

/// An immutable snapshot of one chat message.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    /// Identifier of this message.
    pub id: MessageId,
    /// Author of the message.
    pub author: UserId,
    /// Channel the message was sent in.
    pub channel: ChannelId,
    /// Guild the channel belongs to; `None` for direct messages.
    pub guild: Option<GuildId>,
    /// Raw text content.
    pub content: String,
}

impl Message {
    /// Creates a guild message snapshot.
    #[must_use]
    pub fn new(
        id: MessageId,
        author: UserId,
        channel: ChannelId,
        guild: GuildId,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id,
            author,
            channel,
            guild: Some(guild),
            content: content.into(),
        }
    }

    /// Creates a direct-message snapshot (no guild).
    #[must_use]
    pub fn direct(
        id: MessageId,
        author: UserId,
        channel: ChannelId,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id,
            author,
            channel,
            guild: None,
            content: content.into(),
        }
    }

    /// Returns true if this message was sent outside any guild.
    #[must_use]
    pub const fn is_direct(&self) -> bool {
        self.guild.is_none()
    }
}

/// A guild member, as returned by the member resolver.
///
/// The directory that produced this value has already synchronized the
/// member's persisted settings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Member {
    /// The member's user id.
    pub user: UserId,
    /// The guild this membership belongs to.
    pub guild: GuildId,
    /// Display name within the guild.
    pub display_name: String,
}

/// A guild role, as returned by the role resolver.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Role {
    /// The role id.
    pub id: RoleId,
    /// The guild the role belongs to.
    pub guild: GuildId,
    /// Role name.
    pub name: String,
}
