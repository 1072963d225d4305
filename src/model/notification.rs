/// A message the bot decided to send in response to a presence update.
///
/// Produced by the presence notification service and delivered by the bot
/// layer; the service itself never talks to Discord.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Channel the message goes to.
    pub channel_id: u64,
    /// Rendered message text.
    pub content: String,
}
