//! Ready event handler for bot initialization.
//!
//! The ready event fires once per gateway connection after the initial handshake.
//! The bot uses it to refresh its slash commands in the configured guild, replacing
//! the full command set so removed commands disappear as well.

use serenity::all::{Context, GuildId, Ready};

use crate::bot::command::CommandRegistry;
use crate::state::AppState;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `state` - Application state holding the guild to register commands in
/// - `commands` - Commands to register
/// - `ctx` - Discord context for API calls
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(
    state: &AppState,
    commands: &CommandRegistry,
    ctx: Context,
    ready: Ready,
) {
    tracing::info!("Ready! Logged in as {}", ready.user.name);

    let guild_id = GuildId::new(state.config.discord_guild_id);

    tracing::info!(
        "Started refreshing {} application (/) commands in guild {}",
        commands.len(),
        guild_id
    );

    match guild_id.set_commands(&ctx.http, commands.definitions()).await {
        Ok(registered) => {
            let names: Vec<&str> = registered.iter().map(|c| c.name.as_str()).collect();
            tracing::info!(
                "Successfully reloaded {} application (/) commands: {:?}",
                registered.len(),
                names
            );
        }
        Err(e) => {
            tracing::error!("Failed to register application (/) commands: {:?}", e);
        }
    }
}
