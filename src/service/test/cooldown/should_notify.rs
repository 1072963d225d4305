use super::*;

/// Tests a user with no recorded notification.
///
/// Expected: notification allowed
#[tokio::test]
async fn allows_unknown_user() {
    let cooldown = CooldownService::new(COOLDOWN_MS);

    assert!(cooldown.should_notify("1001", 0).await);
}

/// Tests a user notified within the cooldown window.
///
/// Expected: notification suppressed
#[tokio::test]
async fn suppresses_within_window() {
    let cooldown = CooldownService::new(COOLDOWN_MS);
    cooldown.record("1001", 0).await;

    assert!(!cooldown.should_notify("1001", 30_000).await);
}

/// Tests a user notified exactly one cooldown ago.
///
/// The window is exclusive of its end only once strictly exceeded.
///
/// Expected: notification suppressed at the boundary, allowed one ms later
#[tokio::test]
async fn boundary_requires_strictly_greater() {
    let cooldown = CooldownService::new(COOLDOWN_MS);
    cooldown.record("1001", 0).await;

    assert!(!cooldown.should_notify("1001", COOLDOWN_MS).await);
    assert!(cooldown.should_notify("1001", COOLDOWN_MS + 1).await);
}

/// Tests that cooldowns are tracked per user.
///
/// Expected: another user is unaffected
#[tokio::test]
async fn tracks_users_independently() {
    let cooldown = CooldownService::new(COOLDOWN_MS);
    cooldown.record("1001", 0).await;

    assert!(cooldown.should_notify("1002", 1).await);
}

/// Tests that `record` overwrites an earlier entry.
///
/// Expected: window measured from the latest record
#[tokio::test]
async fn record_overwrites_previous_entry() {
    let cooldown = CooldownService::new(COOLDOWN_MS);
    cooldown.record("1001", 0).await;
    cooldown.record("1001", 50_000).await;

    assert_eq!(cooldown.last_notified("1001").await, Some(50_000));
    assert!(!cooldown.should_notify("1001", 70_000).await);
}
