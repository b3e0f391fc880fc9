//! Unified configuration loading for the scan front end.
//!
//! Loads all configuration from a single YAML file with sensible defaults.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use drishti_scan::config::DrishtiConfig;
//!
//! // Load from default path (configs/config.yaml)
//! let config = DrishtiConfig::load_default()?;
//!
//! // Or use built-in defaults (VLP-16, no file needed)
//! let config = DrishtiConfig::default();
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`ScannerSection`] | Beam count, azimuth bins, angular resolutions, ranges |
//! | [`SegmentationSection`] | Cluster link threshold, pruning fallbacks, ground tolerance |
//!
//! ## Example YAML
//!
//! ```yaml
//! scanner:
//!   num_beams: 16
//!   horizon_scan: 1800
//!   ang_bottom: 15.1
//!
//! segmentation:
//!   valid_point_num: 5
//!   valid_line_num: 3
//! ```

mod defaults;
mod error;
mod scanner;
mod segmentation;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use error::{ConfigLoadError, GeometryError};
pub use scanner::ScannerSection;
pub use segmentation::SegmentationSection;

/// Full front-end configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct DrishtiConfig {
    /// Scanner geometry
    #[serde(default)]
    pub scanner: ScannerSection,

    /// Segmentation thresholds
    #[serde(default)]
    pub segmentation: SegmentationSection,
}

impl DrishtiConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/config.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/config.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Build a configuration around a scanner preset.
    pub fn for_scanner(scanner: ScannerSection) -> Self {
        Self {
            scanner,
            segmentation: SegmentationSection::default(),
        }
    }

    /// Check every section before the first scan is admitted.
    pub fn validate(&self) -> Result<(), GeometryError> {
        self.scanner.validate()?;
        self.segmentation.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DrishtiConfig::default();
        assert_eq!(config.scanner.num_beams, 16);
        assert_eq!(config.segmentation.valid_line_num, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = DrishtiConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = DrishtiConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed.scanner.horizon_scan, config.scanner.horizon_scan);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = r#"
scanner:
  num_beams: 32
  ground_scan_index: 20
"#;
        let config = DrishtiConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.scanner.num_beams, 32);
        assert_eq!(config.scanner.horizon_scan, 1800);
        assert_eq!(config.segmentation.valid_point_num, 5);
    }

    #[test]
    fn test_for_scanner_preset() {
        let config = DrishtiConfig::for_scanner(ScannerSection::os1_64());
        assert_eq!(config.scanner.num_beams, 64);
        assert_eq!(config.scanner.horizon_scan, 1024);
        assert!(config.validate().is_ok());
    }
}
