//! Test factories for creating Serenity gateway objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (Guild, Presence, Activity) for testing purposes. These factories create
//! valid Serenity objects by deserializing JSON, simulating what Discord's
//! gateway would deliver.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_activity, create_test_presence};
//!
//! let activity = create_test_activity("VRChat", Some("438100"));
//! let presence = create_test_presence(1001, Some("alice"), Some(2002), vec![activity]);
//! ```
//!
//! # Available Factories
//!
//! - `guild::create_test_guild` - Create Serenity Guild objects
//! - `guild::create_test_guild_with_threads` - Create guilds with active threads
//! - `presence::create_test_presence` - Create Serenity Presence objects
//! - `presence::create_test_activity` - Create activity JSON for presences

pub mod guild;
pub mod presence;

// Re-export commonly used functions for convenience
pub use guild::{create_test_guild, create_test_guild_with_threads};
pub use presence::{create_test_activity, create_test_presence};
