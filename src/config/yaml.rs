use serde::Deserialize;
use std::path::Path;

use super::ConfigError;

/// Complete YAML configuration structure
///
/// All fields are optional to allow partial configuration. Values present in the
/// file override environment variables and defaults.
///
/// # Example YAML structure
/// ```yaml
/// server:
///   host: "0.0.0.0"
///   port: 3000
///
/// telephony:
///   twilio_phone_number: "+15550001111"
///   operator_phone_number: "+15559990000"
///
/// screening:
///   operator_name: "Steve"
///   spam_prefixes: ["+100", "+1900"]
///   voip_marker: "VOIP"
///   gather_timeout_seconds: 5
///   hold_seconds: 10
///   screen_action: "/screen"
///
/// security:
///   cors_allowed_origins: "*"
///   rate_limit_requests_per_second: 60
///   rate_limit_burst_size: 10
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct YamlConfig {
    pub server: Option<ServerYaml>,
    pub telephony: Option<TelephonyYaml>,
    pub screening: Option<ScreeningYaml>,
    pub security: Option<SecurityYaml>,
}

/// Server configuration from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ServerYaml {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Phone numbers used on the outbound dial leg
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct TelephonyYaml {
    pub twilio_phone_number: Option<String>,
    pub operator_phone_number: Option<String>,
}

/// Screening behaviour from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ScreeningYaml {
    pub operator_name: Option<String>,
    pub spam_prefixes: Option<Vec<String>>,
    pub voip_marker: Option<String>,
    pub gather_timeout_seconds: Option<u32>,
    pub hold_seconds: Option<u32>,
    pub screen_action: Option<String>,
}

/// Security configuration from YAML
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SecurityYaml {
    pub cors_allowed_origins: Option<String>,
    pub rate_limit_requests_per_second: Option<u32>,
    pub rate_limit_burst_size: Option<u32>,
}

impl YamlConfig {
    /// Read and parse a YAML configuration file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// Parse YAML configuration from a string
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to an empty mapping
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }
}
