use serenity::all::{Context, EventHandler, Interaction, Presence, Ready};
use serenity::async_trait;

use crate::bot::command::CommandRegistry;
use crate::state::AppState;

pub mod interaction;
pub mod presence;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub state: AppState,
    pub commands: CommandRegistry,
}

impl Handler {
    pub fn new(state: AppState, commands: CommandRegistry) -> Self {
        Self { state, commands }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.state, &self.commands, ctx, ready).await;
    }

    /// Called when a slash command or other interaction is received
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.state, &self.commands, ctx, interaction)
            .await;
    }

    /// Called when a user's presence changes in a guild the bot is in
    async fn presence_update(&self, ctx: Context, new_data: Presence) {
        presence::handle_presence_update(&self.state, ctx, new_data).await;
    }
}
