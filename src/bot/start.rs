use std::sync::Arc;

use serenity::all::{ApplicationId, Client, GatewayIntents, ShardManager};
use serenity::prelude::TypeMapKey;

use crate::bot::{command::CommandRegistry, handler::Handler};
use crate::error::AppError;
use crate::state::AppState;

/// Key for the shard manager in the client's shared data.
///
/// Commands read it to report the gateway heartbeat latency.
pub struct ShardManagerContainer;

impl TypeMapKey for ShardManagerContainer {
    type Value = Arc<ShardManager>;
}

/// Gateway intents the bot subscribes to.
///
/// GUILD_PRESENCES and GUILD_MEMBERS are privileged intents - they must be
/// enabled in the Discord Developer Portal.
pub fn required_intents() -> GatewayIntents {
    GatewayIntents::GUILDS | GatewayIntents::GUILD_PRESENCES | GatewayIntents::GUILD_MEMBERS
}

/// Initializes the Discord bot client
///
/// Builds the client with the bot's event handler and stores the shard manager in
/// the client's shared data for latency lookups.
///
/// # Arguments
/// - `state` - Application state shared with the event handler
///
/// # Returns
/// - `Ok(Client)` - The configured client, not yet connected
/// - `Err(AppError)` - Bot initialization fails
pub async fn init_bot(state: AppState) -> Result<Client, AppError> {
    let token = state.config.discord_bot_token.clone();
    let application_id = ApplicationId::new(state.config.discord_client_id);

    let handler = Handler::new(state, CommandRegistry::with_default_commands());

    let client = Client::builder(&token, required_intents())
        .application_id(application_id)
        .event_handler(handler)
        .await?;

    client
        .data
        .write()
        .await
        .insert::<ShardManagerContainer>(client.shard_manager.clone());

    Ok(client)
}

/// Starts the Discord bot
///
/// Connects to the gateway and processes events until the connection ends.
///
/// # Returns
/// - `Ok(())` if the bot ran and shut down cleanly
/// - `Err(AppError)` if the connection fails
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
