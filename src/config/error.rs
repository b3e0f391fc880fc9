//! Configuration loading and validation errors.

use thiserror::Error;

/// Failure to read or parse the YAML configuration file.
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    /// The file is not valid configuration YAML.
    #[error("failed to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Scanner geometry that cannot produce a valid range image.
///
/// Raised once, at construction, before any scan is admitted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// `num_beams` is zero.
    #[error("num_beams must be positive")]
    NoBeams,

    /// `horizon_scan` is zero.
    #[error("horizon_scan must be positive")]
    NoColumns,

    /// `ground_scan_index` does not leave a beam above the ground band.
    #[error("ground_scan_index {ground_scan_index} must be below num_beams {num_beams}")]
    GroundBandTooTall {
        /// Configured ceiling of the ground band.
        ground_scan_index: usize,
        /// Configured beam count.
        num_beams: usize,
    },

    /// An angular resolution is zero or negative.
    #[error("ang_res_{axis} must be positive, got {value}")]
    NonPositiveResolution {
        /// Which resolution: `'x'` (horizontal) or `'y'` (vertical).
        axis: char,
        /// The rejected value.
        value: f32,
    },

    /// `min_range` is negative or non-finite.
    #[error("min_range must be finite and non-negative, got {0}")]
    InvalidMinRange(f32),

    /// `segment_theta` is outside (0, pi/2].
    #[error("segment_theta must lie in (0, pi/2], got {0}")]
    InvalidSegmentTheta(f32),
}
