//! Caller heuristic applied before the screening prompt

use crate::config::ScreeningConfig;

/// Why a caller was turned away
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpamVerdict {
    /// Caller id starts with a blocked prefix
    BlockedPrefix(String),
    /// Display name carries the VOIP marker
    VoipCallerName,
}

/// Prefix and display-name checks built once from [`ScreeningConfig`]
#[derive(Debug, Clone)]
pub struct SpamFilter {
    prefixes: Vec<String>,
    /// Upper-cased marker, `None` when the check is disabled
    voip_marker: Option<String>,
}

impl SpamFilter {
    pub fn new(config: &ScreeningConfig) -> Self {
        let prefixes = config
            .spam_prefixes
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();

        let marker = config.voip_marker.trim();
        let voip_marker = (!marker.is_empty()).then(|| marker.to_uppercase());

        Self {
            prefixes,
            voip_marker,
        }
    }

    /// Returns a verdict when the caller should be rejected without screening.
    ///
    /// Absent or empty values never match.
    pub fn check(&self, from: Option<&str>, caller_name: Option<&str>) -> Option<SpamVerdict> {
        if let Some(from) = from.filter(|f| !f.is_empty()) {
            if let Some(prefix) = self.prefixes.iter().find(|p| from.starts_with(p.as_str())) {
                return Some(SpamVerdict::BlockedPrefix(prefix.clone()));
            }
        }

        if let (Some(marker), Some(name)) = (&self.voip_marker, caller_name) {
            if name.to_uppercase().contains(marker.as_str()) {
                return Some(SpamVerdict::VoipCallerName);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_filter() -> SpamFilter {
        SpamFilter::new(&ScreeningConfig::default())
    }

    #[test]
    fn test_blocked_prefix() {
        let filter = default_filter();
        assert_eq!(
            filter.check(Some("+1005551234"), Some("Jane Doe")),
            Some(SpamVerdict::BlockedPrefix("+100".to_string()))
        );
    }

    #[test]
    fn test_blocked_prefix_wins_regardless_of_name() {
        let filter = default_filter();
        assert!(filter.check(Some("+1001234567"), None).is_some());
        assert!(filter.check(Some("+1001234567"), Some("")).is_some());
    }

    #[test]
    fn test_voip_marker_any_case() {
        let filter = default_filter();
        for name in ["VOIP CALLER", "voip", "Acme VoIP Inc", "xvoipx"] {
            assert_eq!(
                filter.check(Some("+15551234567"), Some(name)),
                Some(SpamVerdict::VoipCallerName),
                "name {name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_voip_marker_without_caller_id() {
        let filter = default_filter();
        assert_eq!(
            filter.check(None, Some("Voip Wireless")),
            Some(SpamVerdict::VoipCallerName)
        );
    }

    #[test]
    fn test_regular_caller_passes() {
        let filter = default_filter();
        assert!(filter.check(Some("+15551234567"), Some("Bob")).is_none());
        // "+100" must be a prefix, not a substring
        assert!(filter.check(Some("+15551001234"), Some("Bob")).is_none());
    }

    #[test]
    fn test_missing_values_never_match() {
        let filter = default_filter();
        assert!(filter.check(None, None).is_none());
        assert!(filter.check(Some(""), Some("")).is_none());
    }

    #[test]
    fn test_empty_config_disables_checks() {
        let config = ScreeningConfig {
            spam_prefixes: vec!["".to_string(), "  ".to_string()],
            voip_marker: "".to_string(),
            ..Default::default()
        };
        let filter = SpamFilter::new(&config);
        assert!(filter.check(Some("+1001234567"), Some("VOIP")).is_none());
    }

    #[test]
    fn test_multiple_prefixes() {
        let config = ScreeningConfig {
            spam_prefixes: vec!["+100".to_string(), "+1900".to_string()],
            ..Default::default()
        };
        let filter = SpamFilter::new(&config);
        assert_eq!(
            filter.check(Some("+19005550000"), None),
            Some(SpamVerdict::BlockedPrefix("+1900".to_string()))
        );
    }
}
