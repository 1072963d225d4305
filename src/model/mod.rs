//! Domain models for the bot.
//!
//! Gateway payloads are converted into these transport-neutral snapshots before
//! they reach the service layer, so the notification and command logic can be
//! exercised without a live connection.

pub mod command;
pub mod notification;
pub mod presence;
