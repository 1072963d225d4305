//! Test factory for creating Serenity Guild objects.
//!
//! Guilds are built by deserializing JSON shaped like a gateway `GUILD_CREATE`
//! payload, so channel and system channel lookups behave as they would against
//! the cache.

use serenity::all::Guild;

/// Creates a test Serenity Guild with a system channel and text channels.
///
/// Every id in `channel_ids` becomes a text channel named `channel-<id>`.
/// The system channel is referenced by id only and does not need to appear
/// in `channel_ids`.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
/// - `system_channel_id` - Optional system channel ID
/// - `channel_ids` - IDs of the text channels the guild contains
///
/// # Returns
/// - `Guild` - A valid Serenity Guild struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
pub fn create_test_guild(
    guild_id: u64,
    name: &str,
    system_channel_id: Option<u64>,
    channel_ids: &[u64],
) -> Guild {
    create_test_guild_with_threads(guild_id, name, system_channel_id, channel_ids, &[])
}

/// Creates a test Serenity Guild that also has active threads.
///
/// Threads are public threads (type 11) named `thread-<id>`, parented to the
/// first text channel when there is one.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
/// - `system_channel_id` - Optional system channel ID
/// - `channel_ids` - IDs of the text channels the guild contains
/// - `thread_ids` - IDs of the active threads in the guild
///
/// # Panics
/// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
pub fn create_test_guild_with_threads(
    guild_id: u64,
    name: &str,
    system_channel_id: Option<u64>,
    channel_ids: &[u64],
    thread_ids: &[u64],
) -> Guild {
    let channels: Vec<serde_json::Value> = channel_ids
        .iter()
        .enumerate()
        .map(|(position, id)| {
            serde_json::json!({
                "id": id.to_string(),
                "guild_id": guild_id.to_string(),
                "type": 0,
                "name": format!("channel-{}", id),
                "position": position,
                "permission_overwrites": [],
                "nsfw": false,
                "flags": 0,
            })
        })
        .collect();

    let parent_id = channel_ids.first().map(|id| id.to_string());
    let threads: Vec<serde_json::Value> = thread_ids
        .iter()
        .map(|id| {
            serde_json::json!({
                "id": id.to_string(),
                "guild_id": guild_id.to_string(),
                "parent_id": parent_id,
                "type": 11,
                "name": format!("thread-{}", id),
                "flags": 0,
            })
        })
        .collect();

    serde_json::from_value(serde_json::json!({
        "id": guild_id.to_string(),
        "name": name,
        "icon": null,
        "icon_hash": null,
        "owner_id": "100000000000000000",
        "afk_timeout": 300,
        "verification_level": 0,
        "default_message_notifications": 0,
        "explicit_content_filter": 0,
        "roles": [],
        "emojis": [],
        "stickers": [],
        "features": [],
        "mfa_level": 0,
        "system_channel_id": system_channel_id.map(|id| id.to_string()),
        "system_channel_flags": 0,
        "premium_tier": 0,
        "premium_subscription_count": 0,
        "premium_progress_bar_enabled": false,
        "preferred_locale": "en-US",
        "nsfw_level": 0,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "large": false,
        "member_count": 100,
        "voice_states": [],
        "channels": channels,
        "threads": threads,
        "presences": [],
        "max_presences": 25000,
        "max_members": 100000,
        "unavailable": false,
        "members": [],
        "stage_instances": [],
        "guild_scheduled_events": [],
    }))
    .expect("Failed to create test guild - invalid JSON structure")
}
