//! Platform entity lookup.
//!
//! The member and role resolvers need to turn a snowflake into a live
//! entity. That lookup belongs to the surrounding framework (cache or
//! network), so it sits behind a trait; the engine ships an in-memory
//! implementation for tests and the demo console.

use std::collections::HashMap;
use std::sync::Mutex;

use tagline_foundation::{GuildId, Member, Role, RoleId, UserId};

/// Lookup collaborator for platform entities.
pub trait Directory: Send + Sync {
    /// Fetches a guild member by user id.
    fn fetch_member(&self, guild: GuildId, user: UserId) -> Option<Member>;

    /// Fetches a guild role by id.
    fn fetch_role(&self, guild: GuildId, role: RoleId) -> Option<Role>;

    /// Synchronizes a member's persisted settings.
    ///
    /// The member resolver calls this before returning a member, so
    /// command code always sees settings that are current. Returns false
    /// if the sync could not be performed; the member is still usable.
    fn sync_member_settings(&self, member: &Member) -> bool;
}

/// An in-memory [`Directory`] backed by hash maps.
#[derive(Default)]
pub struct MemoryDirectory {
    members: HashMap<(GuildId, UserId), Member>,
    roles: HashMap<(GuildId, RoleId), Role>,
    synced: Mutex<Vec<UserId>>,
}

impl MemoryDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a member.
    pub fn insert_member(&mut self, member: Member) {
        self.members.insert((member.guild, member.user), member);
    }

    /// Adds a role.
    pub fn insert_role(&mut self, role: Role) {
        self.roles.insert((role.guild, role.id), role);
    }

    /// Users whose settings have been synced, in sync order.
    #[must_use]
    pub fn synced_users(&self) -> Vec<UserId> {
        self.synced.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl Directory for MemoryDirectory {
    fn fetch_member(&self, guild: GuildId, user: UserId) -> Option<Member> {
        self.members.get(&(guild, user)).cloned()
    }

    fn fetch_role(&self, guild: GuildId, role: RoleId) -> Option<Role> {
        self.roles.get(&(guild, role)).cloned()
    }

    fn sync_member_settings(&self, member: &Member) -> bool {
        if let Ok(mut synced) = self.synced.lock() {
            synced.push(member.user);
            true
        } else {
            false
        }
    }
}
