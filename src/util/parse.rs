use crate::error::config::ConfigError;

/// Parses a u64 value from an environment variable's String value
///
/// # Arguments
/// - `name` - Name of the environment variable, used for error reporting
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(ConfigError::InvalidEnvVar)` - Failed to parse the string as a u64
pub fn parse_u64_from_env(name: &str, value: String) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.clone(),
            reason: e.to_string(),
        })
}

/// Parses a non-zero snowflake id from an environment variable's String value
///
/// Discord ids are never zero and serenity's id types panic on zero, so a zero
/// value is rejected here rather than at the first API call.
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed non-zero id
/// - `Err(ConfigError::InvalidEnvVar)` - Not a number, or zero
pub fn parse_snowflake_from_env(name: &str, value: String) -> Result<u64, ConfigError> {
    let id = parse_u64_from_env(name, value)?;

    if id == 0 {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: id.to_string(),
            reason: "snowflake ids must be non-zero".to_string(),
        });
    }

    Ok(id)
}
