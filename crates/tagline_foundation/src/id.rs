//! Snowflake identifier newtypes.
//!
//! The chat platform identifies every user, channel, guild, role, and
//! message by a 64-bit snowflake. Wrapping each in its own type keeps a
//! member lookup from ever receiving a channel id.

use std::fmt;

macro_rules! snowflake {
    ($(#[$doc:meta])* $name:ident, $label:literal) => {
        $(#[$doc])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub u64);

        impl $name {
            /// Creates an identifier from a raw snowflake.
            #[must_use]
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Returns the raw snowflake.
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }
    };
}

snowflake!(
    /// Identifier of a user (message author, member lookup target).
    UserId,
    "UserId"
);

snowflake!(
    /// Identifier of a text channel.
    ChannelId,
    "ChannelId"
);

snowflake!(
    /// Identifier of a guild.
    GuildId,
    "GuildId"
);

snowflake!(
    /// Identifier of a guild role.
    RoleId,
    "RoleId"
);

snowflake!(
    /// Identifier of a message.
    MessageId,
    "MessageId"
);
