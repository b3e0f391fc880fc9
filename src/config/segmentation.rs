//! Segmentation configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;
use super::error::GeometryError;

/// Segmentation section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SegmentationSection {
    /// Depth-ratio angle threshold for linking neighbors (radians).
    /// Lowering it merges more aggressively at depth discontinuities.
    #[serde(default = "defaults::segment_theta")]
    pub segment_theta: f32,

    /// Minimum cluster size for the vertical-span fallback
    #[serde(default = "defaults::valid_point_num")]
    pub valid_point_num: usize,

    /// Minimum distinct beams for the vertical-span fallback
    #[serde(default = "defaults::valid_line_num")]
    pub valid_line_num: usize,

    /// Inter-beam inclination tolerance around the mount angle for a cell
    /// to count as ground (degrees)
    #[serde(default = "defaults::ground_angle_threshold")]
    pub ground_angle_threshold: f32,

    /// Below this many projected cells the scan is logged as near-empty
    #[serde(default = "defaults::min_valid_cells")]
    pub min_valid_cells: usize,
}

impl Default for SegmentationSection {
    fn default() -> Self {
        Self {
            segment_theta: defaults::segment_theta(),
            valid_point_num: defaults::valid_point_num(),
            valid_line_num: defaults::valid_line_num(),
            ground_angle_threshold: defaults::ground_angle_threshold(),
            min_valid_cells: defaults::min_valid_cells(),
        }
    }
}

impl SegmentationSection {
    /// Check that the thresholds are usable.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !(self.segment_theta > 0.0 && self.segment_theta <= std::f32::consts::FRAC_PI_2) {
            return Err(GeometryError::InvalidSegmentTheta(self.segment_theta));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let seg = SegmentationSection::default();
        assert!((seg.segment_theta - 60.0_f32.to_radians()).abs() < 1e-6);
        assert_eq!(seg.valid_point_num, 5);
        assert_eq!(seg.valid_line_num, 3);
        assert!((seg.ground_angle_threshold - 10.0).abs() < 1e-6);
        assert!(seg.validate().is_ok());
    }

    #[test]
    fn test_validate_theta_range() {
        let mut seg = SegmentationSection::default();
        seg.segment_theta = 0.0;
        assert!(seg.validate().is_err());

        seg.segment_theta = 2.0;
        assert!(seg.validate().is_err());
    }
}
