use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, EditInteractionResponse,
};
use serenity::async_trait;

use crate::{
    bot::start::ShardManagerContainer, error::AppError, util::snowflake::snowflake_created_ms,
};

/// Responses a command can send for the interaction it is handling.
///
/// Commands and the dispatcher only talk to the interaction through this trait, so
/// they run the same against Discord and against a recording double in tests.
#[async_trait]
pub trait CommandResponse: Send + Sync {
    /// Whether an initial response was already sent for this interaction.
    fn has_responded(&self) -> bool;

    /// Sends the initial response, visible to everyone in the channel.
    async fn reply(&self, content: &str) -> Result<(), AppError>;

    /// Sends the initial response, visible only to the invoker.
    async fn reply_ephemeral(&self, content: &str) -> Result<(), AppError>;

    /// Replaces the content of the initial response.
    async fn edit(&self, content: &str) -> Result<(), AppError>;

    /// Sends an additional message, visible only to the invoker.
    async fn followup_ephemeral(&self, content: &str) -> Result<(), AppError>;

    /// Milliseconds between the interaction and the message created by the
    /// initial response, taken from their snowflake timestamps.
    async fn roundtrip_ms(&self) -> Result<i64, AppError>;

    /// Latest gateway heartbeat latency, if one was acknowledged.
    async fn heartbeat_latency(&self) -> Option<Duration>;
}

/// Reports a failure to the invoker.
///
/// Uses a follow-up when a response already exists, else the initial response.
/// Delivery failures are logged and otherwise ignored.
pub async fn report_error(responder: &dyn CommandResponse, command_name: &str, content: &str) {
    let result = if responder.has_responded() {
        responder.followup_ephemeral(content).await
    } else {
        responder.reply_ephemeral(content).await
    };

    if let Err(e) = result {
        tracing::warn!("Failed to report error for command {}: {}", command_name, e);
    }
}

/// Responds to a single command interaction over the Discord API.
///
/// Remembers whether an initial response was sent so the dispatcher knows whether
/// an error report has to be a new response or a follow-up.
pub struct Responder<'a> {
    ctx: &'a Context,
    command: &'a CommandInteraction,
    responded: AtomicBool,
}

impl<'a> Responder<'a> {
    pub fn new(ctx: &'a Context, command: &'a CommandInteraction) -> Self {
        Self {
            ctx,
            command,
            responded: AtomicBool::new(false),
        }
    }

    async fn respond(&self, message: CreateInteractionResponseMessage) -> Result<(), AppError> {
        self.command
            .create_response(self.ctx, CreateInteractionResponse::Message(message))
            .await?;
        self.responded.store(true, Ordering::Release);
        Ok(())
    }
}

#[async_trait]
impl CommandResponse for Responder<'_> {
    fn has_responded(&self) -> bool {
        self.responded.load(Ordering::Acquire)
    }

    async fn reply(&self, content: &str) -> Result<(), AppError> {
        self.respond(CreateInteractionResponseMessage::new().content(content))
            .await
    }

    async fn reply_ephemeral(&self, content: &str) -> Result<(), AppError> {
        self.respond(
            CreateInteractionResponseMessage::new()
                .content(content)
                .ephemeral(true),
        )
        .await
    }

    async fn edit(&self, content: &str) -> Result<(), AppError> {
        self.command
            .edit_response(self.ctx, EditInteractionResponse::new().content(content))
            .await?;
        Ok(())
    }

    async fn followup_ephemeral(&self, content: &str) -> Result<(), AppError> {
        self.command
            .create_followup(
                self.ctx,
                CreateInteractionResponseFollowup::new()
                    .content(content)
                    .ephemeral(true),
            )
            .await?;
        Ok(())
    }

    async fn roundtrip_ms(&self) -> Result<i64, AppError> {
        let response = self.command.get_response(&self.ctx.http).await?;

        Ok(snowflake_created_ms(response.id.get()) - snowflake_created_ms(self.command.id.get()))
    }

    async fn heartbeat_latency(&self) -> Option<Duration> {
        let shard_manager = {
            let data = self.ctx.data.read().await;
            data.get::<ShardManagerContainer>().cloned()
        }?;

        let runners = shard_manager.runners.lock().await;
        runners
            .get(&self.ctx.shard_id)
            .and_then(|runner| runner.latency)
    }
}
