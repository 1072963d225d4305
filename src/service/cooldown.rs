//! Per-user notification cooldowns.
//!
//! This module provides the `CooldownService`, an in-memory map from user id to the
//! time of the last notification sent for that user. Entries are never persisted and
//! are pruned by the periodic sweep once they fall outside the cooldown window.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

/// Service deciding whether enough time has passed to notify about a user again.
///
/// Timestamps are milliseconds since the Unix epoch. Cheap to clone; clones share
/// the same map.
#[derive(Clone)]
pub struct CooldownService {
    /// Minimum time between two notifications for the same user, in milliseconds.
    cooldown_ms: i64,
    /// Time of the last notification per user id.
    last_notified: Arc<RwLock<HashMap<String, i64>>>,
}

impl CooldownService {
    pub fn new(cooldown_ms: i64) -> Self {
        Self {
            cooldown_ms,
            last_notified: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Checks whether a notification for the user may be sent at `now`.
    ///
    /// # Returns
    /// - `true` - No notification recorded, or the last one is more than the cooldown ago
    /// - `false` - The last notification is within the cooldown window
    pub async fn should_notify(&self, user_id: &str, now: i64) -> bool {
        let last_notified = self.last_notified.read().await;
        self.is_expired(last_notified.get(user_id).copied(), now)
    }

    /// Records a notification for the user at `now`, replacing any earlier entry.
    pub async fn record(&self, user_id: &str, now: i64) {
        self.last_notified
            .write()
            .await
            .insert(user_id.to_string(), now);
    }

    /// Checks and records in one step.
    ///
    /// Holds the write lock across both so that two presence updates for the same
    /// user racing each other produce a single notification.
    ///
    /// # Returns
    /// - `true` - Notification allowed and recorded at `now`
    /// - `false` - Within the cooldown window, nothing recorded
    pub async fn try_acquire(&self, user_id: &str, now: i64) -> bool {
        let mut last_notified = self.last_notified.write().await;

        if !self.is_expired(last_notified.get(user_id).copied(), now) {
            return false;
        }

        last_notified.insert(user_id.to_string(), now);
        true
    }

    /// Removes every entry older than the cooldown window.
    ///
    /// # Returns
    /// - `usize` - Number of entries removed
    pub async fn sweep(&self, now: i64) -> usize {
        let mut last_notified = self.last_notified.write().await;
        let before = last_notified.len();

        last_notified.retain(|_, last| now - *last <= self.cooldown_ms);

        before - last_notified.len()
    }

    pub async fn last_notified(&self, user_id: &str) -> Option<i64> {
        self.last_notified.read().await.get(user_id).copied()
    }

    pub async fn len(&self) -> usize {
        self.last_notified.read().await.len()
    }

    fn is_expired(&self, last: Option<i64>, now: i64) -> bool {
        match last {
            Some(last) => now - last > self.cooldown_ms,
            None => true,
        }
    }
}
