//! Merging YAML overrides onto the environment configuration

use super::yaml::YamlConfig;
use super::{ConfigError, ServerConfig, env};

/// Load the environment configuration and apply any YAML overrides on top.
pub(crate) fn merge_config(yaml: Option<YamlConfig>) -> Result<ServerConfig, ConfigError> {
    let mut config = env::load_from_env()?;

    let Some(yaml) = yaml else {
        return Ok(config);
    };

    if let Some(server) = yaml.server {
        if let Some(host) = server.host {
            config.host = host;
        }
        if let Some(port) = server.port {
            config.port = port;
        }
    }

    if let Some(telephony) = yaml.telephony {
        if telephony.twilio_phone_number.is_some() {
            config.twilio_phone_number = telephony.twilio_phone_number;
        }
        if telephony.operator_phone_number.is_some() {
            config.operator_phone_number = telephony.operator_phone_number;
        }
    }

    if let Some(screening) = yaml.screening {
        let target = &mut config.screening;
        if let Some(name) = screening.operator_name {
            target.operator_name = name;
        }
        if let Some(prefixes) = screening.spam_prefixes {
            target.spam_prefixes = prefixes;
        }
        if let Some(marker) = screening.voip_marker {
            target.voip_marker = marker;
        }
        if let Some(timeout) = screening.gather_timeout_seconds {
            target.gather_timeout_seconds = timeout;
        }
        if let Some(hold) = screening.hold_seconds {
            target.hold_seconds = hold;
        }
        if let Some(action) = screening.screen_action {
            target.screen_action = action;
        }
    }

    if let Some(security) = yaml.security {
        if security.cors_allowed_origins.is_some() {
            config.cors_allowed_origins = security.cors_allowed_origins;
        }
        if let Some(rps) = security.rate_limit_requests_per_second {
            config.rate_limit_requests_per_second = rps;
        }
        if let Some(burst) = security.rate_limit_burst_size {
            config.rate_limit_burst_size = burst;
        }
    }

    Ok(config)
}
