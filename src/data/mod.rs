//! Data access for the bot's persisted state.
//!
//! The only persisted state is the opt-in list, stored as a flat JSON file.
//! Cooldown timestamps live in memory and are owned by the service layer.

pub mod opt_in;
