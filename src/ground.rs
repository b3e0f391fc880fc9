//! Ground classification over the bottom beams of the range image.
//!
//! Two vertically adjacent returns on a flat ground patch form a
//! near-horizontal segment regardless of their distance from the sensor,
//! so the classifier thresholds the inclination between beam `r` and beam
//! `r + 1` against the sensor mount angle instead of comparing heights.

use crate::config::{ScannerSection, SegmentationSection};
use crate::core::PointCloud;
use crate::image::{RangeImage, EXCLUDED_LABEL, GROUND, GROUND_INVALID};

/// Label ground cells and exclude them (plus empty cells) from segmentation.
///
/// For every column and every beam pair `(r, r+1)` with `r` below the
/// ground band ceiling, the inclination of the segment between the two
/// returns is compared against the mount angle; within tolerance both
/// cells are marked ground. Pairs with a missing return are marked
/// invalid. A final pass writes `EXCLUDED_LABEL` into the label grid for
/// every ground or empty cell, and the ground cloud is extracted from rows
/// `0 ..= ground_scan_index`.
///
/// `full` is the organized projected cloud the image was built from.
pub fn classify_ground(
    scanner: &ScannerSection,
    segmentation: &SegmentationSection,
    image: &mut RangeImage,
    full: &PointCloud,
    ground_cloud: &mut PointCloud,
) {
    let rows = image.rows();
    let cols = image.cols();
    let band = scanner.ground_scan_index;
    let full = full.as_slice();

    for col in 0..cols {
        for row in 0..band {
            let lower = full[image.index(row, col)];
            let upper = full[image.index(row + 1, col)];

            if lower.is_sentinel() || upper.is_sentinel() {
                image.set_ground(row, col, GROUND_INVALID);
                continue;
            }

            let dx = upper.x - lower.x;
            let dy = upper.y - lower.y;
            let dz = upper.z - lower.z;
            let inclination = dz.atan2((dx * dx + dy * dy).sqrt()).to_degrees();

            if (inclination - scanner.mount_angle).abs() <= segmentation.ground_angle_threshold {
                image.set_ground(row, col, GROUND);
                image.set_ground(row + 1, col, GROUND);
            }
        }
    }

    // Ground and empty cells take no part in clustering.
    for row in 0..rows {
        for col in 0..cols {
            if image.is_ground(row, col) || !image.has_return(row, col) {
                image.set_label(row, col, EXCLUDED_LABEL);
            }
        }
    }

    for row in 0..=band {
        for col in 0..cols {
            if image.is_ground(row, col) {
                ground_cloud.push(full[image.index(row, col)]);
            }
        }
    }
}
