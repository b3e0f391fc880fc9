//! Cluster labeling of the range image by breadth-first search.
//!
//! Non-ground cells are grouped with a depth-ratio angular criterion
//! instead of Euclidean distance: for two neighboring returns at ranges
//! `d1 ≥ d2` separated by the angular resolution `α`, the angle
//!
//! ```text
//! ψ = atan2(d2·sin α, d1 − d2·cos α)
//! ```
//!
//! is the angle at the farther return of the triangle formed by the
//! sensor and the two returns. A large ψ means a near-tangential
//! sightline, i.e. both
//! returns lie on the same surface, so the criterion stays stable at
//! range. Neighbors link when `ψ > segment_theta`.
//!
//! The image is cylindrical: BFS wraps across the column seam but never
//! across rows.

use crate::config::{ScannerSection, SegmentationSection};
use crate::image::{RangeImage, OUTLIER_LABEL};

/// Clusters at least this large are accepted without the beam-span check.
const SEGMENT_ACCEPT_SIZE: usize = 30;

/// Four-connected neighborhood: (row, col) offsets.
const NEIGHBORS: [(i32, i32); 4] = [(-1, 0), (0, 1), (0, -1), (1, 0)];

/// BFS cluster labeler with pre-sized scratch storage.
///
/// The visit queue doubles as the cluster membership list: cells are never
/// re-pushed, so after a search terminates the queue holds exactly the
/// cells of that cluster. Create once and reuse across scans; a flat
/// pre-sized buffer here is a latency choice, not a convenience.
#[derive(Clone, Debug)]
pub struct Segmenter {
    /// FIFO visit queue and, once drained, the cluster's cell list.
    queue: Vec<(u16, u16)>,
    /// Head of the FIFO within `queue`.
    head: usize,
    /// Per-beam flag: did this beam contribute a cell to the cluster?
    line_hit: Vec<bool>,
}

impl Segmenter {
    /// Create a segmenter sized for a `rows × cols` range image.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            queue: Vec::with_capacity(rows * cols),
            head: 0,
            line_hit: vec![false; rows],
        }
    }

    /// Label every unvisited cell of the image, row-major.
    ///
    /// Accepted clusters receive dense ids `1..=N`; rejected clusters are
    /// relabeled [`OUTLIER_LABEL`]. Returns `N`.
    pub fn segment(
        &mut self,
        scanner: &ScannerSection,
        segmentation: &SegmentationSection,
        image: &mut RangeImage,
    ) -> usize {
        let mut next_label: i32 = 1;

        for row in 0..image.rows() {
            for col in 0..image.cols() {
                if image.label_at(row, col) == 0
                    && self.grow_cluster(scanner, segmentation, image, row, col, next_label)
                {
                    next_label += 1;
                }
            }
        }

        (next_label - 1) as usize
    }

    /// Flood one cluster from a seed cell. Returns whether it was accepted.
    fn grow_cluster(
        &mut self,
        scanner: &ScannerSection,
        segmentation: &SegmentationSection,
        image: &mut RangeImage,
        seed_row: usize,
        seed_col: usize,
        label: i32,
    ) -> bool {
        let alpha_x = scanner.alpha_x();
        let alpha_y = scanner.alpha_y();
        let rows = image.rows() as i32;

        self.queue.clear();
        self.head = 0;
        self.line_hit.fill(false);

        self.queue.push((seed_row as u16, seed_col as u16));
        image.set_label(seed_row, seed_col, label);
        self.line_hit[seed_row] = true;

        while self.head < self.queue.len() {
            let (from_row, from_col) = self.queue[self.head];
            self.head += 1;
            let (from_row, from_col) = (from_row as usize, from_col as usize);

            for &(dr, dc) in &NEIGHBORS {
                let to_row = from_row as i32 + dr;
                if to_row < 0 || to_row >= rows {
                    continue;
                }
                let to_row = to_row as usize;
                let to_col = image.wrap_col(from_col as i32 + dc);

                if image.label_at(to_row, to_col) != 0 {
                    continue;
                }

                let r1 = image.range_at(from_row, from_col);
                let r2 = image.range_at(to_row, to_col);
                let d1 = r1.max(r2);
                let d2 = r1.min(r2);
                let alpha = if dr == 0 { alpha_x } else { alpha_y };

                let psi = (d2 * alpha.sin()).atan2(d1 - d2 * alpha.cos());
                if psi > segmentation.segment_theta {
                    self.queue.push((to_row as u16, to_col as u16));
                    image.set_label(to_row, to_col, label);
                    self.line_hit[to_row] = true;
                }
            }
        }

        let size = self.queue.len();
        let accepted = if size >= SEGMENT_ACCEPT_SIZE {
            true
        } else if size >= segmentation.valid_point_num {
            // Tall, thin structures (poles, trunks) carry few points but
            // span many beams and are worth keeping.
            let lines = self.line_hit.iter().filter(|&&hit| hit).count();
            lines >= segmentation.valid_line_num
        } else {
            false
        };

        if !accepted {
            for &(row, col) in &self.queue {
                image.set_label(row as usize, col as usize, OUTLIER_LABEL);
            }
        }
        accepted
    }
}
