//! Presence notification decision logic.
//!
//! Decides whether a presence update should produce an announcement and where it
//! goes. The decision reads the opt-in registry, records into the cooldown tracker,
//! and returns the message to send; delivering it is left to the bot layer.

use crate::{
    config::Config,
    model::{
        notification::Notification,
        presence::{GuildContext, PresenceEvent},
    },
    service::{cooldown::CooldownService, opt_in::OptInService},
};

/// Placeholder replaced with the user's name in the notification template.
const USERNAME_PLACEHOLDER: &str = "{username}";

pub struct PresenceNotificationService<'a> {
    config: &'a Config,
    opt_in: &'a OptInService,
    cooldown: &'a CooldownService,
}

impl<'a> PresenceNotificationService<'a> {
    pub fn new(
        config: &'a Config,
        opt_in: &'a OptInService,
        cooldown: &'a CooldownService,
    ) -> Self {
        Self {
            config,
            opt_in,
            cooldown,
        }
    }

    /// Evaluates a presence update at time `now`.
    ///
    /// The update is ignored unless the user opted in, one of their activities
    /// carries the configured application id, and the user is outside the cooldown
    /// window. Once those pass the notification time is recorded, even if no
    /// destination channel can be resolved afterwards.
    ///
    /// # Arguments
    /// - `event` - The user's presence after the update
    /// - `now` - Current time in milliseconds since the Unix epoch
    ///
    /// # Returns
    /// - `Some(Notification)` - Message to send and its channel
    /// - `None` - Nothing to send
    pub async fn evaluate(&self, event: &PresenceEvent, now: i64) -> Option<Notification> {
        if !self.opt_in.contains(&event.user_id).await {
            return None;
        }

        if !event.has_application(&self.config.activity_application_id) {
            return None;
        }

        if !self.cooldown.try_acquire(&event.user_id, now).await {
            tracing::debug!(
                "Skipping activity notification for user {}: cooldown active",
                event.user_id
            );
            return None;
        }

        let Some(channel_id) =
            resolve_channel(self.config.activity_channel_id, event.guild.as_ref())
        else {
            tracing::debug!(
                "No channel to announce activity of user {} in, skipping",
                event.user_id
            );
            return None;
        };

        Some(Notification {
            channel_id,
            content: render_message(&self.config.activity_message, &event.display_name()),
        })
    }
}

/// Picks the channel a notification goes to.
///
/// A configured channel is only used if it exists in the event's guild; without a
/// configured channel the guild's system channel is used.
///
/// # Returns
/// - `Some(u64)` - Destination channel id
/// - `None` - No usable channel
pub fn resolve_channel(configured: Option<u64>, guild: Option<&GuildContext>) -> Option<u64> {
    let guild = guild?;

    match configured {
        Some(channel_id) => guild.has_channel(channel_id).then_some(channel_id),
        None => guild.system_channel_id,
    }
}

/// Substitutes the user's name into the notification template.
pub fn render_message(template: &str, username: &str) -> String {
    template.replace(USERNAME_PLACEHOLDER, username)
}
