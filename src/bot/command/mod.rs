//! Slash commands.
//!
//! Each command implements `SlashCommand`, which bundles the definition uploaded to
//! Discord with the function executed when the command is invoked. Commands are kept
//! in a `CommandRegistry` keyed by name; the interaction handler looks the invoked
//! command up there and reports failures to the invoker.
//!
//! # Available Commands
//!
//! - `ping` - Reports round-trip and gateway heartbeat latency
//! - `vrchat` - Opts the invoker in to or out of activity notifications

pub mod ping;
pub mod responder;
pub mod vrchat;

#[cfg(test)]
mod test;

use std::collections::HashMap;

use serenity::all::{CommandDataOptionValue, CommandInteraction, CreateCommand};
use serenity::async_trait;

use crate::{
    error::{command::CommandError, AppError},
    model::command::CommandInvocation,
    state::AppState,
};

use self::{
    ping::PingCommand,
    responder::{report_error, CommandResponse},
    vrchat::VrchatCommand,
};

/// Reply sent when a command fails for any reason.
pub const GENERIC_ERROR_MESSAGE: &str = "There was an error executing this command!";

/// A slash command the bot registers and handles.
#[async_trait]
pub trait SlashCommand: Send + Sync {
    /// Name the command is registered and dispatched under.
    fn name(&self) -> &'static str;

    /// Definition uploaded to Discord during command registration.
    fn definition(&self) -> CreateCommand;

    /// Executes the command.
    ///
    /// Returning an error makes the dispatcher log it and answer the invoker with
    /// `GENERIC_ERROR_MESSAGE`, as a follow-up if the command already responded.
    ///
    /// # Arguments
    /// - `responder` - Handle for responding to the interaction
    /// - `invocation` - Command name, options and invoking user
    /// - `state` - Application state
    async fn execute(
        &self,
        responder: &dyn CommandResponse,
        invocation: &CommandInvocation,
        state: &AppState,
    ) -> Result<(), AppError>;
}

/// Lookup table of slash commands keyed by name.
pub struct CommandRegistry {
    commands: HashMap<&'static str, Box<dyn SlashCommand>>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Creates a registry holding every command the bot ships with.
    pub fn with_default_commands() -> Self {
        Self::new().with_command(PingCommand).with_command(VrchatCommand)
    }

    /// Adds a command, replacing any command registered under the same name.
    pub fn with_command<C: SlashCommand + 'static>(mut self, command: C) -> Self {
        if self.commands.contains_key(command.name()) {
            tracing::warn!(
                "Command {} registered twice, keeping the latest",
                command.name()
            );
        }
        self.commands.insert(command.name(), Box::new(command));
        self
    }

    pub fn get(&self, name: &str) -> Option<&dyn SlashCommand> {
        self.commands.get(name).map(|command| command.as_ref())
    }

    /// Names of all registered commands, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.commands.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Definitions of all registered commands, sorted by name.
    pub fn definitions(&self) -> Vec<CreateCommand> {
        self.names()
            .into_iter()
            .filter_map(|name| self.commands.get(name))
            .map(|command| command.definition())
            .collect()
    }

    /// Runs the invoked command and reports any failure to the invoker.
    ///
    /// Unknown commands and command errors are logged and answered with
    /// `GENERIC_ERROR_MESSAGE`: as an ephemeral reply when nothing was sent yet,
    /// else as an ephemeral follow-up.
    ///
    /// # Returns
    /// - `Ok(())` - The command completed
    /// - `Err(AppError)` - The error that was reported to the invoker
    pub async fn dispatch(
        &self,
        responder: &dyn CommandResponse,
        invocation: &CommandInvocation,
        state: &AppState,
    ) -> Result<(), AppError> {
        let result = match self.get(&invocation.name) {
            Some(command) => command.execute(responder, invocation, state).await,
            None => Err(CommandError::UnknownCommand(invocation.name.clone()).into()),
        };

        if let Err(e) = &result {
            tracing::error!("Error executing command {}: {}", invocation.name, e);
            report_error(responder, &invocation.name, GENERIC_ERROR_MESSAGE).await;
        }

        result
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Reduces a Serenity command interaction to a `CommandInvocation`.
///
/// Only string options are kept; the bot's commands declare no other kind.
pub fn invocation_from_command(command: &CommandInteraction) -> CommandInvocation {
    let options = command
        .data
        .options
        .iter()
        .filter_map(|option| match &option.value {
            CommandDataOptionValue::String(value) => Some((option.name.clone(), value.clone())),
            _ => None,
        })
        .collect();

    CommandInvocation {
        name: command.data.name.clone(),
        options,
        user_id: command.user.id.get().to_string(),
    }
}
