//! Per-scan metadata handed to downstream feature extraction.

use super::scan::ScanHeader;

/// Margin reserved at both ends of each beam's segmented-cloud window.
///
/// Downstream curvature estimation reads a ±5 neighborhood around each
/// point; trimming the window inward by 5 keeps that neighborhood inside a
/// single beam.
pub const RING_MARGIN: i32 = 5;

/// Companion record for the segmented cloud of one scan.
///
/// The segmented cloud is a flat sequence ordered by beam, then by column.
/// `start_ring_index[r] ..= end_ring_index[r]` is the usable window of beam
/// `r` inside it, already trimmed inward by [`RING_MARGIN`] at both ends.
/// On beams with fewer than `2 * RING_MARGIN` contributions the window
/// inverts (`end < start`); consumers must treat an inverted window as an
/// empty beam.
#[derive(Clone, Debug, Default)]
pub struct ScanMetadata {
    /// Identity of the scan this record describes.
    pub header: ScanHeader,

    /// Azimuth of the first return, radians.
    pub start_orientation: f32,
    /// Azimuth of the last return plus one revolution, radians.
    pub end_orientation: f32,
    /// Sweep length `end - start`, normalized into (π, 3π].
    pub orientation_diff: f32,

    /// Per beam: first usable index into the segmented cloud.
    pub start_ring_index: Vec<i32>,
    /// Per beam: last usable index into the segmented cloud.
    pub end_ring_index: Vec<i32>,

    /// Per segmented point: was it classified as ground?
    pub ground_flag: Vec<bool>,
    /// Per segmented point: its range-image column.
    pub col_index: Vec<u32>,
    /// Per segmented point: its measured range (meters).
    pub range: Vec<f32>,
}

impl ScanMetadata {
    /// Create a record sized for `num_beams` beams.
    pub fn new(num_beams: usize) -> Self {
        Self {
            start_ring_index: vec![0; num_beams],
            end_ring_index: vec![0; num_beams],
            ..Default::default()
        }
    }

    /// Reset to defaults for the next scan, keeping capacity.
    pub fn reset(&mut self, num_beams: usize) {
        self.header = ScanHeader::default();
        self.start_orientation = 0.0;
        self.end_orientation = 0.0;
        self.orientation_diff = 0.0;

        self.start_ring_index.clear();
        self.start_ring_index.resize(num_beams, 0);
        self.end_ring_index.clear();
        self.end_ring_index.resize(num_beams, 0);

        self.ground_flag.clear();
        self.col_index.clear();
        self.range.clear();
    }

    /// Number of points described by the per-point arrays.
    #[inline]
    pub fn len(&self) -> usize {
        self.range.len()
    }

    /// Are the per-point arrays empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sizes_ring_windows() {
        let meta = ScanMetadata::new(16);
        assert_eq!(meta.start_ring_index.len(), 16);
        assert_eq!(meta.end_ring_index.len(), 16);
        assert!(meta.is_empty());
    }

    #[test]
    fn test_reset_clears_per_point_arrays() {
        let mut meta = ScanMetadata::new(4);
        meta.ground_flag.push(true);
        meta.col_index.push(17);
        meta.range.push(3.5);
        meta.start_ring_index[2] = 99;
        meta.orientation_diff = 1.0;

        meta.reset(4);

        assert!(meta.is_empty());
        assert_eq!(meta.start_ring_index, vec![0; 4]);
        assert_eq!(meta.orientation_diff, 0.0);
    }
}
