//! Configuration types for analysis sessions

use descriptive_core::DivisorMode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shape of the data the next analysis expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataLayout {
    /// Raw observations
    #[default]
    Ungrouped,
    /// Class labels with frequencies
    Grouped,
}

impl DataLayout {
    /// Build from the boolean "is grouped" flag used by configuration requests
    pub fn from_grouped_flag(is_grouped: bool) -> Self {
        if is_grouped {
            Self::Grouped
        } else {
            Self::Ungrouped
        }
    }

    /// Get the name of this layout
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ungrouped => "ungrouped",
            Self::Grouped => "grouped",
        }
    }
}

impl fmt::Display for DataLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Settings applied to every analysis of a session until reconfigured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Denominator for variance and standard deviation
    pub divisor: DivisorMode,
    /// Which payload and estimator the next analysis uses
    pub layout: DataLayout,
}

impl AnalysisConfig {
    pub fn new(divisor: DivisorMode, layout: DataLayout) -> Self {
        Self { divisor, layout }
    }
}

impl fmt::Display for AnalysisConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} data, {} divisor", self.layout, self.divisor.name())
    }
}

/// Configure operation payload
///
/// Missing flags fall back to sample mode and ungrouped data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigureRequest {
    /// Use the sample (n - 1) divisor
    #[serde(default = "default_sample", alias = "es_muestral")]
    pub sample: bool,
    /// Expect grouped data
    #[serde(default, alias = "es_agrupado")]
    pub grouped: bool,
}

fn default_sample() -> bool {
    true
}

impl Default for ConfigureRequest {
    fn default() -> Self {
        Self {
            sample: default_sample(),
            grouped: false,
        }
    }
}

impl ConfigureRequest {
    pub fn new(sample: bool, grouped: bool) -> Self {
        Self { sample, grouped }
    }
}

impl From<ConfigureRequest> for AnalysisConfig {
    fn from(request: ConfigureRequest) -> Self {
        Self {
            divisor: DivisorMode::from_sample_flag(request.sample),
            layout: DataLayout::from_grouped_flag(request.grouped),
        }
    }
}

/// Reply to a configure operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Acknowledgement {
    pub status: &'static str,
    pub message: String,
    /// Configuration now in effect
    pub config: AnalysisConfig,
}

impl Acknowledgement {
    pub(crate) fn saved(config: AnalysisConfig) -> Self {
        Self {
            status: "success",
            message: format!("Configuration saved: {config}"),
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.divisor, DivisorMode::Sample);
        assert_eq!(config.layout, DataLayout::Ungrouped);
        assert_eq!(AnalysisConfig::from(ConfigureRequest::default()), config);
    }

    #[test]
    fn test_request_conversion() {
        let config = AnalysisConfig::from(ConfigureRequest::new(false, true));
        assert_eq!(config.divisor, DivisorMode::Population);
        assert_eq!(config.layout, DataLayout::Grouped);
    }

    #[test]
    fn test_request_deserialization_with_defaults() {
        let request: ConfigureRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, ConfigureRequest::default());

        let request: ConfigureRequest = serde_json::from_str(r#"{"grouped": true}"#).unwrap();
        assert!(request.sample);
        assert!(request.grouped);
    }

    #[test]
    fn test_request_aliases() {
        let request: ConfigureRequest =
            serde_json::from_str(r#"{"es_muestral": false, "es_agrupado": true}"#).unwrap();
        assert_eq!(request, ConfigureRequest::new(false, true));
    }

    #[test]
    fn test_config_round_trip() {
        let config = AnalysisConfig::new(DivisorMode::Population, DataLayout::Grouped);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"divisor":"population","layout":"grouped"}"#);
        let parsed: AnalysisConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_display() {
        let config = AnalysisConfig::new(DivisorMode::Sample, DataLayout::Ungrouped);
        assert_eq!(config.to_string(), "ungrouped data, sample divisor");
    }
}
