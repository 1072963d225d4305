use std::collections::HashMap;
use std::time::Duration;

use serenity::all::CreateCommand;
use serenity::async_trait;

use crate::{
    bot::command::{responder::CommandResponse, CommandRegistry, SlashCommand},
    config::Config,
    error::{command::CommandError, AppError},
    model::command::CommandInvocation,
    state::AppState,
};
use test_utils::{
    builder::TestBuilder,
    context::TestContext,
    responder::{RecordedResponse, RecordingResponder, ResponseKind},
};


const USER_ID: &str = "1001";

#[async_trait]
impl CommandResponse for RecordingResponder {
    fn has_responded(&self) -> bool {
        RecordingResponder::has_responded(self)
    }

    async fn reply(&self, content: &str) -> Result<(), AppError> {
        self.record(ResponseKind::Reply, content);
        Ok(())
    }

    async fn reply_ephemeral(&self, content: &str) -> Result<(), AppError> {
        self.record(ResponseKind::ReplyEphemeral, content);
        Ok(())
    }

    async fn edit(&self, content: &str) -> Result<(), AppError> {
        self.record(ResponseKind::Edit, content);
        Ok(())
    }

    async fn followup_ephemeral(&self, content: &str) -> Result<(), AppError> {
        self.record(ResponseKind::FollowupEphemeral, content);
        Ok(())
    }

    async fn roundtrip_ms(&self) -> Result<i64, AppError> {
        Ok(RecordingResponder::roundtrip_ms(self))
    }

    async fn heartbeat_latency(&self) -> Option<Duration> {
        self.heartbeat()
    }
}

/// State backed by the opt-in file of the test context.
async fn test_state(test: &TestContext) -> Result<AppState, AppError> {
    AppState::from_config(Config {
        discord_bot_token: "token".to_string(),
        discord_client_id: 1,
        discord_guild_id: 2002,
        activity_cooldown_ms: 60_000,
        activity_channel_id: None,
        activity_application_id: "438100".to_string(),
        activity_message: "{username} has started playing VRChat!".to_string(),
        opt_in_file: test.opt_in_path(),
    })
    .await
}

fn invocation(name: &str, options: &[(&str, &str)]) -> CommandInvocation {
    CommandInvocation {
        name: name.to_string(),
        options: options
            .iter()
            .map(|(option, value)| (option.to_string(), value.to_string()))
            .collect::<HashMap<_, _>>(),
        user_id: USER_ID.to_string(),
    }
}

fn response(kind: ResponseKind, content: &str) -> RecordedResponse {
    RecordedResponse {
        kind,
        content: content.to_string(),
    }
}

/// Command that always fails, optionally after sending its initial response.
struct FailingCommand {
    responds_first: bool,
}

const FAILING_COMMAND: &str = "fail";
const FAILING_COMMAND_REPLY: &str = "Working on it...";

#[async_trait]
impl SlashCommand for FailingCommand {
    fn name(&self) -> &'static str {
        FAILING_COMMAND
    }

    fn definition(&self) -> CreateCommand {
        CreateCommand::new(FAILING_COMMAND).description("Always fails")
    }

    async fn execute(
        &self,
        responder: &dyn CommandResponse,
        invocation: &CommandInvocation,
        _state: &AppState,
    ) -> Result<(), AppError> {
        if self.responds_first {
            responder.reply(FAILING_COMMAND_REPLY).await?;
        }

        Err(CommandError::MissingOption {
            command: invocation.name.clone(),
            option: "target".to_string(),
        }
        .into())
    }
}
