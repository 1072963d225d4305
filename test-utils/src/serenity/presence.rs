//! Test factories for creating Serenity Presence objects.

use serenity::all::Presence;

/// Creates the JSON of a "playing" activity for use with `create_test_presence`.
///
/// # Arguments
/// - `name` - Activity name shown in the client (e.g. "VRChat")
/// - `application_id` - Optional application id of the game
///
/// # Returns
/// - `serde_json::Value` - Activity payload as the gateway sends it
pub fn create_test_activity(name: &str, application_id: Option<&str>) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "type": 0,
        "application_id": application_id,
        "created_at": 1_700_000_000_000u64,
    })
}

/// Creates a test Serenity Presence with customizable fields.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Optional username; partial presence payloads omit it
/// - `guild_id` - Optional guild ID the presence update belongs to
/// - `activities` - Activity payloads, see `create_test_activity`
///
/// # Returns
/// - `Presence` - A valid Serenity Presence struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Presence (indicates invalid test data)
pub fn create_test_presence(
    user_id: u64,
    username: Option<&str>,
    guild_id: Option<u64>,
    activities: Vec<serde_json::Value>,
) -> Presence {
    let mut user = serde_json::json!({ "id": user_id.to_string() });
    if let Some(username) = username {
        user["username"] = serde_json::Value::from(username);
    }

    serde_json::from_value(serde_json::json!({
        "user": user,
        "guild_id": guild_id.map(|id| id.to_string()),
        "status": "online",
        "activities": activities,
        "client_status": { "desktop": "online" },
    }))
    .expect("Failed to create test presence - invalid JSON structure")
}
