//! Configuration module for the call screener
//!
//! This module handles server configuration from various sources: .env files, YAML files,
//! and environment variables. Priority: YAML > ENV vars > .env values > defaults.
//!
//! # Modules
//! - `yaml`: YAML configuration file loading
//! - `env`: Environment variable loading
//! - `merge`: Merging YAML and environment configurations
//!
//! # Example
//! ```rust,no_run
//! use call_screener::config::ServerConfig;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load from environment variables only
//! let config = ServerConfig::from_env()?;
//!
//! // Load from YAML file with environment variable overrides
//! let config_path = PathBuf::from("config.yaml");
//! let config = ServerConfig::from_file(&config_path)?;
//!
//! println!("Server listening on {}", config.address());
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

mod env;
mod merge;
mod yaml;

pub use yaml::YamlConfig;

pub(crate) const DEFAULT_HOST: &str = "0.0.0.0";
pub(crate) const DEFAULT_PORT: u16 = 3000;
pub(crate) const DEFAULT_RATE_LIMIT_REQUESTS_PER_SECOND: u32 = 60;
pub(crate) const DEFAULT_RATE_LIMIT_BURST_SIZE: u32 = 10;

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML config: {0}")]
    ParseYaml(#[from] serde_yaml::Error),

    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Screening behaviour: who the caller is told they are reaching, which callers
/// are turned away before the prompt, and how long the flow waits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreeningConfig {
    /// Name spoken in prompts and shown on the dashboard
    pub operator_name: String,
    /// Caller ids starting with any of these are rejected outright.
    /// An empty list (`SPAM_PREFIXES=` or `spam_prefixes: []`) disables the check.
    pub spam_prefixes: Vec<String>,
    /// Display names containing this (any case) are rejected outright.
    /// An empty marker (`VOIP_MARKER=` or `voip_marker: ""`) disables the check.
    pub voip_marker: String,
    /// Silence, in seconds, before the speech gather gives up
    pub gather_timeout_seconds: u32,
    /// How long the caller is held after speaking, in seconds
    pub hold_seconds: u32,
    /// Callback target for gathered speech; a path or absolute URL that reaches `POST /screen`
    pub screen_action: String,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            operator_name: "Steve".to_string(),
            spam_prefixes: vec!["+100".to_string()],
            voip_marker: "VOIP".to_string(),
            gather_timeout_seconds: 5,
            hold_seconds: 10,
            screen_action: "/screen".to_string(),
        }
    }
}

/// Server configuration
///
/// Contains everything needed to run the call screener:
/// - Listener settings (host, port)
/// - The two phone numbers used when the operator accepts a call
/// - Screening behaviour
/// - Security settings (CORS, rate limiting)
#[derive(Debug, Clone)]
pub struct ServerConfig {
    // Server settings
    pub host: String,
    pub port: u16,

    // Telephony settings
    /// Caller-ID presented on the outbound leg when connecting a call
    pub twilio_phone_number: Option<String>,
    /// Destination the connect action dials
    pub operator_phone_number: Option<String>,

    pub screening: ScreeningConfig,

    // Security configuration
    /// CORS allowed origins (comma-separated list or "*" for all)
    /// Default: None (same-origin only)
    pub cors_allowed_origins: Option<String>,

    // Rate limiting configuration
    /// Maximum requests per second per IP address
    /// Default: 60
    pub rate_limit_requests_per_second: u32,
    /// Maximum burst size for rate limiting
    /// Default: 10
    pub rate_limit_burst_size: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            twilio_phone_number: None,
            operator_phone_number: None,
            screening: ScreeningConfig::default(),
            cors_allowed_origins: None,
            rate_limit_requests_per_second: DEFAULT_RATE_LIMIT_REQUESTS_PER_SECOND,
            rate_limit_burst_size: DEFAULT_RATE_LIMIT_BURST_SIZE,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables (and defaults)
    ///
    /// The .env file, if any, is loaded into the environment in main.rs before
    /// this is called, so real environment variables win over .env values.
    pub fn from_env() -> Result<Self, ConfigError> {
        merge::merge_config(None)
    }

    /// Load configuration from a YAML file with environment variable base
    ///
    /// Priority order (highest to lowest):
    /// 1. YAML file values
    /// 2. Environment variables (actual ENV vars override .env values)
    /// 3. .env file values
    /// 4. Default values
    ///
    /// # Errors
    /// Returns an error if:
    /// - The YAML file cannot be read or is malformed
    /// - Environment variables have invalid formats
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let yaml_config = YamlConfig::from_file(path)?;
        merge::merge_config(Some(yaml_config))
    }

    /// Get the server address as a string
    ///
    /// Returns the address in the format "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
