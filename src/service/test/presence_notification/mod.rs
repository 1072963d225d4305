use std::collections::HashSet;
use std::path::PathBuf;

use crate::{
    config::Config,
    error::AppError,
    model::presence::{ActivitySnapshot, GuildContext, PresenceEvent},
    service::{
        cooldown::CooldownService,
        opt_in::OptInService,
        presence_notification::{render_message, resolve_channel, PresenceNotificationService},
    },
};
use test_utils::builder::TestBuilder;

mod resolve_channel;

const COOLDOWN_MS: i64 = 60_000;
const APPLICATION_ID: &str = "438100";
const GUILD_ID: u64 = 2002;
const SYSTEM_CHANNEL_ID: u64 = 3001;
const CONFIGURED_CHANNEL_ID: u64 = 3002;

/// Configuration with the given target channel and a 60 second cooldown.
fn test_config(activity_channel_id: Option<u64>) -> Config {
    Config {
        discord_bot_token: "token".to_string(),
        discord_client_id: 1,
        discord_guild_id: GUILD_ID,
        activity_cooldown_ms: COOLDOWN_MS,
        activity_channel_id,
        activity_application_id: APPLICATION_ID.to_string(),
        activity_message: "{username} has started playing VRChat!".to_string(),
        opt_in_file: PathBuf::from("unused.json"),
    }
}

fn test_guild() -> GuildContext {
    GuildContext {
        guild_id: GUILD_ID,
        system_channel_id: Some(SYSTEM_CHANNEL_ID),
        channel_ids: HashSet::from([SYSTEM_CHANNEL_ID, CONFIGURED_CHANNEL_ID]),
    }
}

/// Presence event for `user_id` with one activity of the given application.
fn playing(user_id: &str, application_id: Option<&str>) -> PresenceEvent {
    PresenceEvent {
        user_id: user_id.to_string(),
        username: Some(format!("user{}", user_id)),
        guild: Some(test_guild()),
        activities: vec![ActivitySnapshot {
            name: "Some Game".to_string(),
            application_id: application_id.map(str::to_string),
        }],
    }
}
