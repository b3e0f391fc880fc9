//! Scanner geometry configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;
use super::error::GeometryError;

/// Scanner geometry section
///
/// Describes the beam layout of the rotating multi-beam sensor. Defaults
/// (and the named presets) follow the common mechanically-spinning models;
/// rows index beams bottom to top, columns index azimuth bins.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScannerSection {
    /// Number of beams (range-image rows)
    #[serde(default = "defaults::num_beams")]
    pub num_beams: usize,

    /// Azimuth bins per revolution (range-image columns)
    #[serde(default = "defaults::horizon_scan")]
    pub horizon_scan: usize,

    /// Horizontal angular resolution (degrees per column)
    #[serde(default = "defaults::ang_res_x")]
    pub ang_res_x: f32,

    /// Vertical angular resolution (degrees per beam)
    #[serde(default = "defaults::ang_res_y")]
    pub ang_res_y: f32,

    /// Absolute elevation of the lowest beam (degrees)
    #[serde(default = "defaults::ang_bottom")]
    pub ang_bottom: f32,

    /// Highest row index eligible for ground classification
    #[serde(default = "defaults::ground_scan_index")]
    pub ground_scan_index: usize,

    /// Minimum valid return range (meters)
    #[serde(default = "defaults::min_range")]
    pub min_range: f32,

    /// Sensor pitch relative to horizontal (degrees)
    #[serde(default = "defaults::mount_angle")]
    pub mount_angle: f32,

    /// Use the sensor-provided ring channel instead of deriving the beam
    /// from elevation
    #[serde(default = "defaults::use_ring_channel")]
    pub use_ring_channel: bool,

    /// Revolution period in seconds (advisory, for the timing collaborator)
    #[serde(default = "defaults::scan_period")]
    pub scan_period: f32,
}

impl Default for ScannerSection {
    fn default() -> Self {
        Self::vlp_16()
    }
}

impl ScannerSection {
    /// Velodyne VLP-16: 16 beams, 0.2° × 2.0°, lowest beam at −15.1°.
    pub fn vlp_16() -> Self {
        Self {
            num_beams: 16,
            horizon_scan: 1800,
            ang_res_x: 0.2,
            ang_res_y: 2.0,
            ang_bottom: 15.1,
            ground_scan_index: 7,
            min_range: 1.0,
            mount_angle: 0.0,
            use_ring_channel: true,
            scan_period: 0.1,
        }
    }

    /// Velodyne HDL-32E: 32 beams over a 41.33° vertical field.
    pub fn hdl_32e() -> Self {
        Self {
            num_beams: 32,
            horizon_scan: 1800,
            ang_res_x: 360.0 / 1800.0,
            ang_res_y: 41.33 / 31.0,
            ang_bottom: 30.67,
            ground_scan_index: 20,
            ..Self::vlp_16()
        }
    }

    /// Velodyne VLS-128: 128 beams at 0.3° vertical resolution.
    pub fn vls_128() -> Self {
        Self {
            num_beams: 128,
            horizon_scan: 1800,
            ang_res_x: 0.2,
            ang_res_y: 0.3,
            ang_bottom: 25.0,
            ground_scan_index: 10,
            ..Self::vlp_16()
        }
    }

    /// Ouster OS1-16: 16 beams, 1024 azimuth bins.
    pub fn os1_16() -> Self {
        Self {
            num_beams: 16,
            horizon_scan: 1024,
            ang_res_x: 360.0 / 1024.0,
            ang_res_y: 33.2 / 15.0,
            ang_bottom: 16.6,
            ground_scan_index: 7,
            ..Self::vlp_16()
        }
    }

    /// Ouster OS1-64: 64 beams, 1024 azimuth bins.
    pub fn os1_64() -> Self {
        Self {
            num_beams: 64,
            horizon_scan: 1024,
            ang_res_x: 360.0 / 1024.0,
            ang_res_y: 33.2 / 63.0,
            ang_bottom: 16.6,
            ground_scan_index: 15,
            ..Self::vlp_16()
        }
    }

    /// Check that the geometry can produce a valid range image.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.num_beams == 0 {
            return Err(GeometryError::NoBeams);
        }
        if self.horizon_scan == 0 {
            return Err(GeometryError::NoColumns);
        }
        if self.ground_scan_index >= self.num_beams {
            return Err(GeometryError::GroundBandTooTall {
                ground_scan_index: self.ground_scan_index,
                num_beams: self.num_beams,
            });
        }
        if !(self.ang_res_x > 0.0) {
            return Err(GeometryError::NonPositiveResolution {
                axis: 'x',
                value: self.ang_res_x,
            });
        }
        if !(self.ang_res_y > 0.0) {
            return Err(GeometryError::NonPositiveResolution {
                axis: 'y',
                value: self.ang_res_y,
            });
        }
        if !(self.min_range >= 0.0) || !self.min_range.is_finite() {
            return Err(GeometryError::InvalidMinRange(self.min_range));
        }
        Ok(())
    }

    /// Total cells of the range image.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.num_beams * self.horizon_scan
    }

    /// Horizontal resolution in radians.
    #[inline]
    pub fn alpha_x(&self) -> f32 {
        self.ang_res_x.to_radians()
    }

    /// Vertical resolution in radians.
    #[inline]
    pub fn alpha_y(&self) -> f32 {
        self.ang_res_y.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_vlp16() {
        let scanner = ScannerSection::default();
        assert_eq!(scanner.num_beams, 16);
        assert_eq!(scanner.horizon_scan, 1800);
        assert_eq!(scanner.ground_scan_index, 7);
        assert!(scanner.validate().is_ok());
    }

    #[test]
    fn test_presets_validate() {
        for preset in [
            ScannerSection::vlp_16(),
            ScannerSection::hdl_32e(),
            ScannerSection::vls_128(),
            ScannerSection::os1_16(),
            ScannerSection::os1_64(),
        ] {
            assert!(preset.validate().is_ok());
        }
    }

    #[test]
    fn test_validate_rejects_bad_geometry() {
        let mut scanner = ScannerSection::default();
        scanner.num_beams = 0;
        assert_eq!(scanner.validate(), Err(GeometryError::NoBeams));

        let mut scanner = ScannerSection::default();
        scanner.ground_scan_index = 16;
        assert!(matches!(
            scanner.validate(),
            Err(GeometryError::GroundBandTooTall { .. })
        ));

        let mut scanner = ScannerSection::default();
        scanner.ang_res_y = 0.0;
        assert!(matches!(
            scanner.validate(),
            Err(GeometryError::NonPositiveResolution { axis: 'y', .. })
        ));

        let mut scanner = ScannerSection::default();
        scanner.min_range = f32::NAN;
        assert!(matches!(
            scanner.validate(),
            Err(GeometryError::InvalidMinRange(_))
        ));
    }

    #[test]
    fn test_alpha_conversion() {
        let scanner = ScannerSection::default();
        assert!((scanner.alpha_x() - 0.2_f32.to_radians()).abs() < 1e-7);
        assert!((scanner.alpha_y() - 2.0_f32.to_radians()).abs() < 1e-7);
    }
}
