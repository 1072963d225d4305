mod cooldown;
mod presence_notification;
