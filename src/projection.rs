//! Range-image projection: azimuth bracketing and beam/column binning.
//!
//! The scanner sweeps clockwise when viewed from above, so azimuths are
//! negated (`-atan2(y, x)`) to obtain counter-clockwise angles. Column
//! binning measures the angle from +Y and shifts it so the point directly
//! behind the sensor (−X) lands in column 0, sweeping counter-clockwise
//! from there:
//!
//! ```text
//!            3/4·C
//!            | +y
//!      C     |
//! (-x) ------+------> C/2 (+x)
//!      0     |
//!            | -y
//!           C/4
//! ```

use crate::config::ScannerSection;
use crate::core::{encode_cell_key, Point, PointCloud};
use crate::image::RangeImage;

/// Start and end azimuth of one sweep, radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SweepBounds {
    /// Azimuth of the first return.
    pub start: f32,
    /// Azimuth of the last return, one revolution ahead of `start`.
    pub end: f32,
    /// `end - start`, normalized into (π, 3π].
    pub diff: f32,
}

/// Compute the azimuth bracket of a scan from its first and last returns.
///
/// The sweep length is normalized into (π, 3π], tolerating a slight over-
/// or undershoot of a full revolution. An empty batch yields an exact
/// revolution starting at azimuth zero.
pub fn find_sweep_bounds(points: &[Point]) -> SweepBounds {
    use std::f32::consts::PI;

    let (first, last) = match (points.first(), points.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            return SweepBounds {
                start: 0.0,
                end: 2.0 * PI,
                diff: 2.0 * PI,
            }
        }
    };

    let start = -first.y.atan2(first.x);
    let mut end = -last.y.atan2(last.x) + 2.0 * PI;

    if end - start > 3.0 * PI {
        end -= 2.0 * PI;
    } else if end - start < PI {
        end += 2.0 * PI;
    }

    SweepBounds {
        start,
        end,
        diff: end - start,
    }
}

/// Tally of one projection pass.
///
/// Individual dropped returns are silent; the tally is the only trace.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProjectionStats {
    /// Returns written into the range image.
    pub projected: usize,
    /// Returns with non-finite coordinates, removed at ingest.
    pub dropped_nonfinite: usize,
    /// Returns whose beam fell outside `[0, num_beams)`.
    pub dropped_row: usize,
    /// Returns whose azimuth bin fell outside `[0, horizon_scan)`.
    pub dropped_col: usize,
    /// Returns closer than the minimum valid range.
    pub dropped_near: usize,
}

impl ProjectionStats {
    /// Total returns discarded by the pass.
    pub fn total_dropped(&self) -> usize {
        self.dropped_nonfinite + self.dropped_row + self.dropped_col + self.dropped_near
    }
}

/// Project raw returns into the range image and the organized clouds.
///
/// For each return the beam row comes from the ring channel when present,
/// otherwise from its elevation angle; the column from its azimuth. The
/// cell's range is recorded and the point is written into both organized
/// clouds at slot `col + row * cols`: `full` carries the encoded cell key
/// as intensity, `full_info` carries the measured range. On a bin
/// collision the last writer wins.
///
/// `full` and `full_info` must already be sized to `rows * cols` sentinel
/// slots.
pub fn project_scan(
    points: &[Point],
    rings: Option<&[u16]>,
    scanner: &ScannerSection,
    image: &mut RangeImage,
    full: &mut PointCloud,
    full_info: &mut PointCloud,
    stats: &mut ProjectionStats,
) {
    if let Some(rings) = rings {
        debug_assert_eq!(rings.len(), points.len());
    }

    let rows = scanner.num_beams;
    let cols = scanner.horizon_scan;

    for (i, point) in points.iter().enumerate() {
        let row = match rings {
            Some(rings) => rings[i] as i32,
            None => {
                let horizontal = (point.x * point.x + point.y * point.y).sqrt();
                let elevation = point.z.atan2(horizontal).to_degrees();
                ((elevation + scanner.ang_bottom) / scanner.ang_res_y).round() as i32
            }
        };
        if row < 0 || row >= rows as i32 {
            stats.dropped_row += 1;
            continue;
        }

        // Angle from +Y, positive clockwise; column 0 ends up behind the
        // sensor and columns increase counter-clockwise.
        let horizon_angle = point.x.atan2(point.y).to_degrees();
        let mut col =
            -((horizon_angle - 90.0) / scanner.ang_res_x).round() as i32 + cols as i32 / 2;
        if col >= cols as i32 {
            col -= cols as i32;
        }
        if col < 0 || col >= cols as i32 {
            stats.dropped_col += 1;
            continue;
        }

        let range = point.range();
        if range < scanner.min_range {
            stats.dropped_near += 1;
            continue;
        }

        let (row, col) = (row as usize, col as usize);
        image.set_range(row, col, range);

        let index = image.index(row, col);
        full.set(
            index,
            Point::new(point.x, point.y, point.z, encode_cell_key(row, col)),
        );
        full_info.set(index, Point::new(point.x, point.y, point.z, range));
        stats.projected += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn vlp16() -> ScannerSection {
        ScannerSection::vlp_16()
    }

    fn organized(scanner: &ScannerSection) -> (RangeImage, PointCloud, PointCloud) {
        let image = RangeImage::new(scanner.num_beams, scanner.horizon_scan);
        let mut full = PointCloud::new();
        let mut info = PointCloud::new();
        full.fill_sentinel(scanner.cell_count());
        info.fill_sentinel(scanner.cell_count());
        (image, full, info)
    }

    #[test]
    fn test_sweep_bounds_full_revolution() {
        // Start just past -x (clockwise sweep), end just short of it.
        let points = vec![
            Point::new(-10.0, -0.1, 0.0, 0.0),
            Point::new(-10.0, 0.1, 0.0, 0.0),
        ];
        let bounds = find_sweep_bounds(&points);
        assert!(bounds.diff > PI && bounds.diff <= 3.0 * PI);
        assert!((bounds.diff - 2.0 * PI).abs() < 0.1);
    }

    #[test]
    fn test_sweep_bounds_empty() {
        let bounds = find_sweep_bounds(&[]);
        assert_eq!(bounds.start, 0.0);
        assert!((bounds.diff - 2.0 * PI).abs() < 1e-6);
    }

    #[test]
    fn test_sweep_bounds_normalized() {
        // First and last return at the same azimuth: raw diff is exactly
        // 2π, inside the bracket already.
        let p = Point::new(5.0, 5.0, 0.0, 0.0);
        let bounds = find_sweep_bounds(&[p, p]);
        assert!((bounds.diff - 2.0 * PI).abs() < 1e-5);
    }

    #[test]
    fn test_project_single_point_dead_ahead() {
        let scanner = vlp16();
        let (mut image, mut full, mut info) = organized(&scanner);
        let mut stats = ProjectionStats::default();

        let points = [Point::new(0.0, 10.0, 0.0, 0.0)];
        let rings = [7u16];
        project_scan(
            &points,
            Some(&rings),
            &scanner,
            &mut image,
            &mut full,
            &mut info,
            &mut stats,
        );

        assert_eq!(stats.projected, 1);
        assert!((image.range_at(7, 1350) - 10.0).abs() < 1e-5);

        let index = image.index(7, 1350);
        let projected = full.get(index);
        assert_eq!(crate::core::decode_cell_key(projected.intensity), (7, 1350));
        assert!((info.get(index).intensity - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_project_point_behind_wraps_to_column_zero() {
        let scanner = vlp16();
        let (mut image, mut full, mut info) = organized(&scanner);
        let mut stats = ProjectionStats::default();

        let points = [Point::new(-10.0, 0.0, 0.0, 0.0)];
        let rings = [0u16];
        project_scan(
            &points,
            Some(&rings),
            &scanner,
            &mut image,
            &mut full,
            &mut info,
            &mut stats,
        );

        assert_eq!(stats.projected, 1);
        assert!(image.has_return(0, 0));
    }

    #[test]
    fn test_project_row_from_elevation() {
        let mut scanner = vlp16();
        scanner.use_ring_channel = false;
        let (mut image, mut full, mut info) = organized(&scanner);
        let mut stats = ProjectionStats::default();

        // Elevation ≈ -15.1° puts the return on beam 0; ≈ +15.1° on beam 15.
        let low = Point::new(0.0, 10.0, -2.699, 0.0);
        let high = Point::new(0.0, 10.0, 2.699, 0.0);
        project_scan(
            &[low, high],
            None,
            &scanner,
            &mut image,
            &mut full,
            &mut info,
            &mut stats,
        );

        assert_eq!(stats.projected, 2);
        assert!(image.has_return(0, 1350));
        assert!(image.has_return(15, 1350));
    }

    #[test]
    fn test_project_drops_out_of_range() {
        let scanner = vlp16();
        let (mut image, mut full, mut info) = organized(&scanner);
        let mut stats = ProjectionStats::default();

        let points = [
            Point::new(0.0, 0.5, 0.0, 0.0),  // below min_range
            Point::new(0.0, 10.0, 0.0, 0.0), // fine
        ];
        let rings = [3u16, 99u16]; // second ring out of [0, 16)
        project_scan(
            &points,
            Some(&rings),
            &scanner,
            &mut image,
            &mut full,
            &mut info,
            &mut stats,
        );

        assert_eq!(stats.projected, 0);
        assert_eq!(stats.dropped_near, 1);
        assert_eq!(stats.dropped_row, 1);
        assert_eq!(stats.total_dropped(), 2);
    }

    #[test]
    fn test_last_writer_wins_on_collision() {
        let scanner = vlp16();
        let (mut image, mut full, mut info) = organized(&scanner);
        let mut stats = ProjectionStats::default();

        let points = [
            Point::new(0.0, 10.0, 0.0, 0.0),
            Point::new(0.0, 20.0, 0.0, 0.0),
        ];
        let rings = [7u16, 7u16];
        project_scan(
            &points,
            Some(&rings),
            &scanner,
            &mut image,
            &mut full,
            &mut info,
            &mut stats,
        );

        assert!((image.range_at(7, 1350) - 20.0).abs() < 1e-5);
    }
}
