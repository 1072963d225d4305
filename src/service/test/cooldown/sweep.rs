use super::*;

/// Tests sweeping entries older than the cooldown.
///
/// Expected: expired entry removed, fresh entry kept
#[tokio::test]
async fn removes_only_expired_entries() {
    let cooldown = CooldownService::new(COOLDOWN_MS);
    cooldown.record("expired", 0).await;
    cooldown.record("fresh", 40_000).await;

    let removed = cooldown.sweep(70_000).await;

    assert_eq!(removed, 1);
    assert_eq!(cooldown.last_notified("expired").await, None);
    assert_eq!(cooldown.last_notified("fresh").await, Some(40_000));
}

/// Tests an entry exactly one cooldown old.
///
/// Expected: kept, since it is not strictly older than the window
#[tokio::test]
async fn keeps_entry_at_boundary() {
    let cooldown = CooldownService::new(COOLDOWN_MS);
    cooldown.record("1001", 0).await;

    assert_eq!(cooldown.sweep(COOLDOWN_MS).await, 0);
    assert_eq!(cooldown.len().await, 1);
}

/// Tests repeated sweeps over an entry inside the window.
///
/// Expected: entry survives every sweep
#[tokio::test]
async fn entry_within_window_survives_repeated_sweeps() {
    let cooldown = CooldownService::new(COOLDOWN_MS);
    cooldown.record("1001", 10_000).await;

    for now in [10_000, 20_000, 40_000, 70_000] {
        cooldown.sweep(now).await;
    }

    assert_eq!(cooldown.last_notified("1001").await, Some(10_000));
}

/// Tests that a swept user can be notified again.
///
/// Expected: notification allowed after the sweep
#[tokio::test]
async fn swept_user_can_be_notified() {
    let cooldown = CooldownService::new(COOLDOWN_MS);
    cooldown.record("1001", 0).await;

    cooldown.sweep(100_000).await;

    assert!(cooldown.should_notify("1001", 100_000).await);
}
