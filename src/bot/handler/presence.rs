//! Presence update handler announcing watched activities.

use chrono::Utc;
use serenity::all::{ChannelId, Context, CreateMessage, Presence};

use crate::model::notification::Notification;
use crate::model::presence::{GuildContext, PresenceEvent};
use crate::service::presence_notification::PresenceNotificationService;
use crate::state::AppState;

/// Handles the presence_update event.
///
/// Builds a `PresenceEvent` from the payload and the cache, lets the presence
/// notification service decide whether to announce it, and sends the resulting
/// message. A failed send is logged and not retried.
pub async fn handle_presence_update(state: &AppState, ctx: Context, presence: Presence) {
    let event = build_event(&ctx, &presence);

    let service = PresenceNotificationService::new(&state.config, &state.opt_in, &state.cooldown);

    let Some(notification) = service.evaluate(&event, Utc::now().timestamp_millis()).await else {
        return;
    };

    tracing::info!(
        "User {} started the watched activity, notifying channel {}",
        event.user_id,
        notification.channel_id
    );

    send_notification(&ctx, notification).await;
}

/// Converts the presence payload, filling in guild context and username from the cache.
///
/// Presence payloads are partial: the username is often missing and only the guild
/// id is included.
fn build_event(ctx: &Context, presence: &Presence) -> PresenceEvent {
    let guild = presence.guild_id.and_then(|guild_id| {
        ctx.cache
            .guild(guild_id)
            .map(|guild| GuildContext::from_guild(&guild))
    });

    let mut event = PresenceEvent::from_presence(presence, guild);

    if event.username.is_none() {
        event.username = ctx.cache.user(presence.user.id).map(|user| user.name.clone());
    }

    event
}

async fn send_notification(ctx: &Context, notification: Notification) {
    let channel_id = ChannelId::new(notification.channel_id);
    let message = CreateMessage::new().content(notification.content);

    if let Err(e) = channel_id.send_message(&ctx.http, message).await {
        tracing::error!(
            "Failed to send activity notification to channel {}: {:?}",
            channel_id,
            e
        );
    }
}
