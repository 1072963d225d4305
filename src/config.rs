use std::path::PathBuf;
use std::time::Duration;

use crate::error::{config::ConfigError, AppError};
use crate::util::parse::{parse_snowflake_from_env, parse_u64_from_env};

/// Application id of VRChat, the activity watched when none is configured.
const DEFAULT_APPLICATION_ID: &str = "438100";
const DEFAULT_NOTIFICATION_MESSAGE: &str = "{username} has started playing VRChat!";
const DEFAULT_OPT_IN_FILE: &str = "vrchat.json";

/// Static bot configuration, loaded once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub discord_bot_token: String,
    pub discord_client_id: u64,
    /// Guild the slash commands are registered in.
    pub discord_guild_id: u64,

    /// Minimum time between two notifications for the same user, in milliseconds.
    pub activity_cooldown_ms: i64,
    /// Channel notifications go to. Falls back to the guild's system channel when unset.
    pub activity_channel_id: Option<u64>,
    /// Application id an activity must carry to trigger a notification.
    pub activity_application_id: String,
    /// Notification text; `{username}` is replaced with the user's name.
    pub activity_message: String,

    pub opt_in_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated the same as unset ones so that a blank line in
    /// `.env` disables an optional setting instead of failing to parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let require =
            |name: &str| get(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let cooldown =
            parse_u64_from_env("ACTIVITY_COOLDOWN_MS", require("ACTIVITY_COOLDOWN_MS")?)?;
        let activity_cooldown_ms = i64::try_from(cooldown)
            .ok()
            .filter(|ms| *ms > 0)
            .ok_or_else(|| ConfigError::InvalidEnvVar {
                name: "ACTIVITY_COOLDOWN_MS".to_string(),
                value: cooldown.to_string(),
                reason: "cooldown must be a positive number of milliseconds".to_string(),
            })?;

        let activity_channel_id = get("ACTIVITY_CHANNEL_ID")
            .map(|value| parse_snowflake_from_env("ACTIVITY_CHANNEL_ID", value))
            .transpose()?;

        Ok(Self {
            discord_bot_token: require("DISCORD_BOT_TOKEN")?,
            discord_client_id: parse_snowflake_from_env(
                "DISCORD_CLIENT_ID",
                require("DISCORD_CLIENT_ID")?,
            )?,
            discord_guild_id: parse_snowflake_from_env(
                "DISCORD_GUILD_ID",
                require("DISCORD_GUILD_ID")?,
            )?,
            activity_cooldown_ms,
            activity_channel_id,
            activity_application_id: get("ACTIVITY_APPLICATION_ID")
                .map(|id| id.trim().to_string())
                .unwrap_or_else(|| DEFAULT_APPLICATION_ID.to_string()),
            activity_message: get("ACTIVITY_MESSAGE")
                .unwrap_or_else(|| DEFAULT_NOTIFICATION_MESSAGE.to_string()),
            opt_in_file: get("OPT_IN_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OPT_IN_FILE)),
        })
    }

    /// Cooldown as a `Duration`, used as the sweep interval.
    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.activity_cooldown_ms as u64)
    }
}
