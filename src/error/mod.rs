//! Error types for the bot.
//!
//! `AppError` is the top-level error type that wraps the domain-specific errors
//! and the errors of the crates the bot depends on. Event handlers never let an
//! `AppError` escape: they log it and, for slash commands, answer the invoker
//! with a generic message.

pub mod command;
pub mod config;

use thiserror::Error;

use crate::error::{command::CommandError, config::ConfigError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Most variants
/// use `#[from]` for automatic error conversion with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Slash command dispatch or option error.
    #[error(transparent)]
    CommandErr(#[from] CommandError),

    /// Filesystem error while loading or persisting the opt-in list.
    #[error("Opt-in file I/O failed: {0}")]
    IoErr(#[from] std::io::Error),

    /// The opt-in file did not contain a JSON array of user ids.
    #[error("Opt-in file is malformed: {0}")]
    JsonErr(#[from] serde_json::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Scheduler error while registering or starting the cooldown sweep.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
