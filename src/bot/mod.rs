//! Discord bot integration.
//!
//! The bot registers its slash commands when it connects, answers command
//! interactions, and watches presence updates of opted-in users to announce when
//! they start the configured activity.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild and channel data used to resolve the announcement channel
//! - `GUILD_PRESENCES` - Presence updates carrying user activities (privileged intent)
//! - `GUILD_MEMBERS` - Member data used to resolve usernames (privileged intent)
//!
//! Note: privileged intents must be explicitly enabled in the Discord Developer
//! Portal for the bot application.

pub mod command;
pub mod handler;
pub mod start;
