use super::*;

#[test]
fn uses_system_channel_without_configuration() {
    assert_eq!(resolve_channel(None, Some(&test_guild())), Some(SYSTEM_CHANNEL_ID));
}

#[test]
fn uses_configured_channel_in_guild() {
    assert_eq!(
        resolve_channel(Some(CONFIGURED_CHANNEL_ID), Some(&test_guild())),
        Some(CONFIGURED_CHANNEL_ID)
    );
}

/// A configured channel from another guild is not used, and the system
/// channel is not used as a fallback either.
#[test]
fn ignores_configured_channel_outside_guild() {
    assert_eq!(resolve_channel(Some(9999), Some(&test_guild())), None);
}

#[test]
fn guild_without_system_channel_resolves_nothing() {
    let guild = GuildContext {
        system_channel_id: None,
        ..test_guild()
    };

    assert_eq!(resolve_channel(None, Some(&guild)), None);
}

#[test]
fn missing_guild_resolves_nothing() {
    assert_eq!(resolve_channel(None, None), None);
    assert_eq!(resolve_channel(Some(CONFIGURED_CHANNEL_ID), None), None);
}
