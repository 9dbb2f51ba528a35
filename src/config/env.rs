//! Environment variable loading

use std::env;
use std::str::FromStr;

use super::{
    ConfigError, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_RATE_LIMIT_BURST_SIZE,
    DEFAULT_RATE_LIMIT_REQUESTS_PER_SECOND, ScreeningConfig, ServerConfig,
};

/// Reads an environment variable, treating empty values as unset.
pub(crate) fn env_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Reads an environment variable, keeping a set-but-empty value as `""`.
///
/// Used for settings where an empty value switches a feature off.
pub(crate) fn env_var_allow_empty(key: &str) -> Option<String> {
    env::var(key).ok().map(|value| value.trim().to_string())
}

/// Parses an environment variable into `T`, falling back to `default` when unset.
pub(crate) fn parse_env<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env_var(key) {
        Some(value) => value.parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            key,
            value,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

/// Splits a comma-separated list, dropping blank entries.
pub(crate) fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build configuration from environment variables on top of defaults
pub(crate) fn load_from_env() -> Result<ServerConfig, ConfigError> {
    let defaults = ScreeningConfig::default();

    let screening = ScreeningConfig {
        operator_name: env_var("OPERATOR_NAME").unwrap_or(defaults.operator_name),
        spam_prefixes: env_var_allow_empty("SPAM_PREFIXES")
            .map(|v| parse_list(&v))
            .unwrap_or(defaults.spam_prefixes),
        voip_marker: env_var_allow_empty("VOIP_MARKER").unwrap_or(defaults.voip_marker),
        gather_timeout_seconds: parse_env(
            "GATHER_TIMEOUT_SECONDS",
            defaults.gather_timeout_seconds,
        )?,
        hold_seconds: parse_env("HOLD_SECONDS", defaults.hold_seconds)?,
        screen_action: env_var("SCREEN_ACTION").unwrap_or(defaults.screen_action),
    };

    Ok(ServerConfig {
        host: env_var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
        port: parse_env("PORT", DEFAULT_PORT)?,
        twilio_phone_number: env_var("TWILIO_PHONE_NUMBER"),
        operator_phone_number: env_var("OPERATOR_PHONE_NUMBER"),
        screening,
        cors_allowed_origins: env_var("CORS_ALLOWED_ORIGINS"),
        rate_limit_requests_per_second: parse_env(
            "RATE_LIMIT_REQUESTS_PER_SECOND",
            DEFAULT_RATE_LIMIT_REQUESTS_PER_SECOND,
        )?,
        rate_limit_burst_size: parse_env(
            "RATE_LIMIT_BURST_SIZE",
            DEFAULT_RATE_LIMIT_BURST_SIZE,
        )?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        assert_eq!(parse_list("+100, +1900 ,,"), vec!["+100", "+1900"]);
        assert!(parse_list(" , ").is_empty());
    }
}
