//! `/vrchat on|off` - manage activity notifications for the invoking user.

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption};
use serenity::async_trait;

use crate::{
    bot::command::{responder::CommandResponse, SlashCommand},
    error::{command::CommandError, AppError},
    model::command::{CommandInvocation, ToggleOption},
    service::opt_in::OptInService,
    state::AppState,
};

pub const COMMAND_NAME: &str = "vrchat";
pub const OPTION_NAME: &str = "option";

pub const OPTED_IN_MESSAGE: &str = "You have opted in to VRChat activity tracking.";
pub const OPTED_OUT_MESSAGE: &str = "You have opted out of VRChat activity tracking.";
pub const PERSIST_FAILED_MESSAGE: &str = "An error occurred while processing your request.";

pub struct VrchatCommand;

#[async_trait]
impl SlashCommand for VrchatCommand {
    fn name(&self) -> &'static str {
        COMMAND_NAME
    }

    fn definition(&self) -> CreateCommand {
        CreateCommand::new(COMMAND_NAME)
            .description("Manage VRChat notifications")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    OPTION_NAME,
                    "Turn notifications on or off",
                )
                .required(true)
                .add_string_choice("On", ToggleOption::On.as_str())
                .add_string_choice("Off", ToggleOption::Off.as_str()),
            )
    }

    async fn execute(
        &self,
        responder: &dyn CommandResponse,
        invocation: &CommandInvocation,
        state: &AppState,
    ) -> Result<(), AppError> {
        let option = parse_option(invocation)?;

        match set_opt_in(&state.opt_in, &invocation.user_id, option).await {
            Ok(()) => {
                tracing::info!(
                    "User {} turned activity notifications {}",
                    invocation.user_id,
                    option
                );
                responder.reply(confirmation_message(option)).await
            }
            Err(e) => {
                tracing::error!("Error handling VRChat command: {}", e);
                responder.reply_ephemeral(PERSIST_FAILED_MESSAGE).await
            }
        }
    }
}

/// Reads the `option` argument of the invocation
///
/// # Returns
/// - `Ok(ToggleOption)` - The requested state
/// - `Err(CommandError::MissingOption)` - No `option` argument
/// - `Err(CommandError::InvalidOption)` - A value other than `on` or `off`
pub fn parse_option(invocation: &CommandInvocation) -> Result<ToggleOption, CommandError> {
    let value = invocation
        .option(OPTION_NAME)
        .ok_or_else(|| CommandError::MissingOption {
            command: invocation.name.clone(),
            option: OPTION_NAME.to_string(),
        })?;

    ToggleOption::parse(value).ok_or_else(|| CommandError::InvalidOption {
        command: invocation.name.clone(),
        option: OPTION_NAME.to_string(),
        value: value.to_string(),
    })
}

/// Applies the requested state to the registry and persists it
///
/// # Returns
/// - `Ok(())` - Registry updated and written to disk
/// - `Err(AppError::IoErr)` - Registry updated in memory only
pub async fn set_opt_in(
    opt_in: &OptInService,
    user_id: &str,
    option: ToggleOption,
) -> Result<(), AppError> {
    match option {
        ToggleOption::On => opt_in.opt_in(user_id).await,
        ToggleOption::Off => opt_in.opt_out(user_id).await,
    }
}

pub fn confirmation_message(option: ToggleOption) -> &'static str {
    match option {
        ToggleOption::On => OPTED_IN_MESSAGE,
        ToggleOption::Off => OPTED_OUT_MESSAGE,
    }
}
