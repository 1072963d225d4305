//! Activity watch bot.
//!
//! A Discord bot that announces when opted-in users start a watched activity.
//! Users opt in and out with the `/vrchat` slash command; the bot keeps the opt-in
//! list in a JSON file and rate-limits announcements per user with an in-memory
//! cooldown pruned by a background sweep.
//!
//! # Architecture
//!
//! - **Bot** (`bot/`) - Serenity event handler, slash commands and client startup
//! - **Service** (`service/`) - Opt-in registry, cooldown tracking, notification decisions
//! - **Data** (`data/`) - Flat-file persistence of the opt-in list
//! - **Model** (`model/`) - Transport-neutral snapshots of gateway events
//! - **Scheduler** (`scheduler/`) - Periodic cooldown sweep
//! - **Configuration** (`config`) - Environment-based configuration
//! - **State** (`state`) - Shared services handed to every handler
//! - **Error** (`error/`) - Application error types

pub mod bot;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
