//! Configuration for care-instruction resolution

use care_types::{FALLBACK_LABEL, PLACEHOLDER_PREFIX};
use serde::{Deserialize, Serialize};

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareConfig {
    /// Heading for furniture whose material matched no treatment
    pub fallback_label: String,
    /// Label prefix for furniture records without a type
    pub placeholder_prefix: String,
    pub telemetry: TelemetryConfig,
}

impl Default for CareConfig {
    fn default() -> Self {
        Self {
            fallback_label: FALLBACK_LABEL.to_string(),
            placeholder_prefix: PLACEHOLDER_PREFIX.to_string(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    pub enabled: bool,
    /// Warn when a material identifier is claimed by more than one treatment
    pub log_ambiguity: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_ambiguity: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CareConfig::default();
        assert_eq!(config.fallback_label, "Care Instructions");
        assert_eq!(config.placeholder_prefix, "Furniture Item");
        assert!(config.telemetry.enabled);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: CareConfig =
            serde_json::from_value(serde_json::json!({"fallback_label": "General Care"})).unwrap();
        assert_eq!(config.fallback_label, "General Care");
        assert_eq!(config.placeholder_prefix, "Furniture Item");
        assert!(config.telemetry.log_ambiguity);
    }
}
