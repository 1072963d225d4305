//! `/ping` - report round-trip and gateway heartbeat latency.

use std::time::Duration;

use serenity::all::CreateCommand;
use serenity::async_trait;

use crate::{
    bot::command::{responder::CommandResponse, SlashCommand},
    error::AppError,
    model::command::CommandInvocation,
    state::AppState,
};

pub const COMMAND_NAME: &str = "ping";

/// Placeholder response sent before latency is measured.
pub const PLACEHOLDER_MESSAGE: &str = "Waking up the dragon...";

pub struct PingCommand;

#[async_trait]
impl SlashCommand for PingCommand {
    fn name(&self) -> &'static str {
        COMMAND_NAME
    }

    fn definition(&self) -> CreateCommand {
        CreateCommand::new(COMMAND_NAME).description("Shows the bot latency")
    }

    async fn execute(
        &self,
        responder: &dyn CommandResponse,
        _invocation: &CommandInvocation,
        _state: &AppState,
    ) -> Result<(), AppError> {
        responder.reply(PLACEHOLDER_MESSAGE).await?;

        let roundtrip_ms = responder.roundtrip_ms().await?;
        let heartbeat = responder.heartbeat_latency().await;

        responder
            .edit(&format_latency(roundtrip_ms, heartbeat))
            .await
    }
}

/// Renders the final ping response.
pub fn format_latency(roundtrip_ms: i64, heartbeat: Option<Duration>) -> String {
    let heartbeat = match heartbeat {
        Some(latency) => format!("{} ms", latency.as_millis()),
        None => "Unavailable".to_string(),
    };

    format!(
        "🏓 Pong!\n📶 Roundtrip latency: {} ms\n💓 WebSocket heartbeat: {}",
        roundtrip_ms, heartbeat
    )
}
