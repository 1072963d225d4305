//! Business logic for the bot.
//!
//! - `opt_in` - Registry of users who agreed to activity notifications
//! - `cooldown` - Per-user notification cooldown tracking
//! - `presence_notification` - Decision whether a presence update is announced
//!
//! Services take their collaborators explicitly, either by reference for
//! short-lived services or as cloneable handles stored in `AppState`.

pub mod cooldown;
pub mod opt_in;
pub mod presence_notification;

#[cfg(test)]
mod test;
