//! Presence update snapshots.
//!
//! A `PresenceEvent` captures the parts of a gateway presence update the
//! notification logic reads: who changed, which activities they now have, and
//! enough of the guild to pick a destination channel.

use std::collections::HashSet;

use serenity::all::{Activity, Guild, Presence};

/// A single activity from a presence update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivitySnapshot {
    pub name: String,
    /// Application id of the game, when Discord knows it.
    pub application_id: Option<String>,
}

impl ActivitySnapshot {
    pub fn from_activity(activity: &Activity) -> Self {
        Self {
            name: activity.name.clone(),
            application_id: activity.application_id.map(|id| id.get().to_string()),
        }
    }
}

/// Guild a presence update was received in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GuildContext {
    pub guild_id: u64,
    pub system_channel_id: Option<u64>,
    /// Ids of the channels and active threads known to exist in the guild.
    pub channel_ids: HashSet<u64>,
}

impl GuildContext {
    /// Converts a cached Serenity guild into a guild context
    ///
    /// # Arguments
    /// - `guild` - Guild as held in the Serenity cache
    ///
    /// # Returns
    /// - `GuildContext` - Guild id, system channel, channel and thread ids
    pub fn from_guild(guild: &Guild) -> Self {
        Self {
            guild_id: guild.id.get(),
            system_channel_id: guild.system_channel_id.map(|id| id.get()),
            channel_ids: guild
                .channels
                .keys()
                .chain(guild.threads.iter().map(|thread| &thread.id))
                .map(|id| id.get())
                .collect(),
        }
    }

    pub fn has_channel(&self, channel_id: u64) -> bool {
        self.channel_ids.contains(&channel_id)
    }
}

/// A user's presence after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceEvent {
    pub user_id: String,
    /// Username, if the payload or the cache provided one.
    pub username: Option<String>,
    /// Guild context; `None` when the guild is not cached.
    pub guild: Option<GuildContext>,
    pub activities: Vec<ActivitySnapshot>,
}

impl PresenceEvent {
    /// Converts a Serenity presence into a presence event
    ///
    /// # Arguments
    /// - `presence` - Presence delivered by the gateway
    /// - `guild` - Context of the guild the update belongs to, if cached
    ///
    /// # Returns
    /// - `PresenceEvent` - Snapshot of the user's new presence
    pub fn from_presence(presence: &Presence, guild: Option<GuildContext>) -> Self {
        Self {
            user_id: presence.user.id.get().to_string(),
            username: presence.user.name.clone(),
            guild,
            activities: presence
                .activities
                .iter()
                .map(ActivitySnapshot::from_activity)
                .collect(),
        }
    }

    /// Whether any activity belongs to the given application id.
    pub fn has_application(&self, application_id: &str) -> bool {
        self.activities
            .iter()
            .any(|activity| activity.application_id.as_deref() == Some(application_id))
    }

    /// Name used in the notification text; a user mention when no username is known.
    pub fn display_name(&self) -> String {
        match &self.username {
            Some(name) => name.clone(),
            None => format!("<@{}>", self.user_id),
        }
    }
}
