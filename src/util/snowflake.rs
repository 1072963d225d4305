/// Discord snowflake epoch (2015-01-01T00:00:00.000Z) in Unix milliseconds.
const DISCORD_EPOCH_MS: u64 = 1_420_070_400_000;

/// Creation time encoded in a Discord snowflake, in Unix milliseconds.
pub fn snowflake_created_ms(id: u64) -> i64 {
    (id >> 22).saturating_add(DISCORD_EPOCH_MS) as i64
}
