//! Background jobs.
//!
//! - `cooldown_sweep` - Periodic pruning of expired notification cooldowns

pub mod cooldown_sweep;
