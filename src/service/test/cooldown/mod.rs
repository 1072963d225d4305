use crate::service::cooldown::CooldownService;

mod should_notify;
mod sweep;

const COOLDOWN_MS: i64 = 60_000;
