//! The per-scan pipeline: ingest, bracket, project, classify, segment, emit.

use log::{debug, warn};

use crate::config::{DrishtiConfig, GeometryError};
use crate::core::{Point, PointCloud, ScanBatch, ScanMetadata, RING_MARGIN};
use crate::error::{Result, ScanError};
use crate::ground::classify_ground;
use crate::image::{RangeImage, OUTLIER_LABEL};
use crate::projection::{find_sweep_bounds, project_scan, ProjectionStats};
use crate::segmentation::Segmenter;

/// Keep every 5th ground / outlier column; the optimizer needs some of
/// them, not all.
const DECIMATION_STRIDE: usize = 5;

/// Ground columns this close to the seam are always kept, stabilizing
/// feature extraction where the image wraps.
const SEAM_KEEP_WIDTH: usize = 5;

/// Everything one scan produces.
///
/// All clouds are retained buffers, overwritten in place on the next
/// `process` call.
#[derive(Clone, Debug, Default)]
pub struct FrontEndOutput {
    /// Organized projected cloud, `rows × cols` slots, intensity = cell key.
    pub full_projected: PointCloud,
    /// Organized cloud with intensity = measured range.
    pub full_info: PointCloud,
    /// Every ground-classified return in the ground band.
    pub ground: PointCloud,
    /// Ground (decimated) plus valid clusters, beam-major.
    pub segmented: PointCloud,
    /// Valid clusters only, intensity = cluster id.
    pub segmented_pure: PointCloud,
    /// Decimated sample of pruned small clusters above the ground band.
    pub outlier: PointCloud,
    /// Companion record for `segmented`.
    pub metadata: ScanMetadata,
    /// Projection tally for this scan.
    pub stats: ProjectionStats,
    /// Number of accepted clusters.
    pub cluster_count: usize,
}

/// Single-threaded scan front end.
///
/// Owns every working buffer: the range image, the BFS scratch, the
/// organized clouds, and the emitted artifacts. One `process` call runs a
/// whole scan to completion; a failed scan leaves only reset buffers
/// behind, never partial output. After the first scan no allocation
/// happens on the hot path.
pub struct ScanFrontEnd {
    config: DrishtiConfig,
    image: RangeImage,
    segmenter: Segmenter,
    /// Finite returns of the current batch, acquisition order preserved.
    filtered: Vec<Point>,
    /// Ring channel filtered in lockstep with `filtered`.
    filtered_rings: Vec<u16>,
    output: FrontEndOutput,
}

impl ScanFrontEnd {
    /// Create a front end, validating the geometry up front.
    pub fn new(config: DrishtiConfig) -> std::result::Result<Self, GeometryError> {
        config.validate()?;

        let rows = config.scanner.num_beams;
        let cols = config.scanner.horizon_scan;
        let cells = rows * cols;

        // Size every cloud for a worst-case scan up front; from here on the
        // hot path only reuses capacity.
        let mut output = FrontEndOutput {
            full_projected: PointCloud::with_capacity(cells),
            full_info: PointCloud::with_capacity(cells),
            ground: PointCloud::with_capacity(cells),
            segmented: PointCloud::with_capacity(cells),
            segmented_pure: PointCloud::with_capacity(cells),
            outlier: PointCloud::with_capacity(cells / DECIMATION_STRIDE),
            metadata: ScanMetadata::new(rows),
            stats: ProjectionStats::default(),
            cluster_count: 0,
        };
        output.full_projected.fill_sentinel(cells);
        output.full_info.fill_sentinel(cells);

        Ok(Self {
            config,
            image: RangeImage::new(rows, cols),
            segmenter: Segmenter::new(rows, cols),
            filtered: Vec::with_capacity(cells),
            filtered_rings: Vec::with_capacity(cells),
            output,
        })
    }

    /// The configuration the front end was built with.
    pub fn config(&self) -> &DrishtiConfig {
        &self.config
    }

    /// Artifacts of the most recent successful scan.
    pub fn output(&self) -> &FrontEndOutput {
        &self.output
    }

    /// Range image of the most recent successful scan.
    pub fn image(&self) -> &RangeImage {
        &self.image
    }

    /// Run the whole pipeline on one scan.
    ///
    /// On error the scan is discarded in full; buffers are reset when the
    /// next scan is admitted.
    pub fn process(&mut self, batch: &ScanBatch) -> Result<&FrontEndOutput> {
        self.reset();
        self.ingest(batch)?;

        let bounds = find_sweep_bounds(&self.filtered);
        self.output.metadata.start_orientation = bounds.start;
        self.output.metadata.end_orientation = bounds.end;
        self.output.metadata.orientation_diff = bounds.diff;

        if self.filtered.is_empty() {
            warn!(
                "empty scan at t={}: no finite returns",
                batch.header.timestamp_us
            );
            return Ok(&self.output);
        }

        let rings = if self.config.scanner.use_ring_channel && batch.has_rings() {
            Some(self.filtered_rings.as_slice())
        } else {
            None
        };
        project_scan(
            &self.filtered,
            rings,
            &self.config.scanner,
            &mut self.image,
            &mut self.output.full_projected,
            &mut self.output.full_info,
            &mut self.output.stats,
        );

        if self.output.stats.projected < self.config.segmentation.min_valid_cells {
            warn!(
                "near-empty scan at t={}: {} cells projected, {} dropped",
                batch.header.timestamp_us,
                self.output.stats.projected,
                self.output.stats.total_dropped(),
            );
        }

        classify_ground(
            &self.config.scanner,
            &self.config.segmentation,
            &mut self.image,
            &self.output.full_projected,
            &mut self.output.ground,
        );

        self.output.cluster_count = self.segmenter.segment(
            &self.config.scanner,
            &self.config.segmentation,
            &mut self.image,
        );

        self.emit();

        debug!(
            "scan t={}: {} projected, {} ground, {} clusters, {} segmented, {} outliers",
            batch.header.timestamp_us,
            self.output.stats.projected,
            self.output.ground.len(),
            self.output.cluster_count,
            self.output.segmented.len(),
            self.output.outlier.len(),
        );

        Ok(&self.output)
    }

    /// Re-initialize every per-scan buffer, keeping capacity.
    fn reset(&mut self) {
        let cells = self.config.scanner.cell_count();
        self.image.reset();
        self.filtered.clear();
        self.filtered_rings.clear();

        let out = &mut self.output;
        out.full_projected.fill_sentinel(cells);
        out.full_info.fill_sentinel(cells);
        out.ground.clear();
        out.segmented.clear();
        out.segmented_pure.clear();
        out.outlier.clear();
        out.metadata.reset(self.config.scanner.num_beams);
        out.stats = ProjectionStats::default();
        out.cluster_count = 0;
    }

    /// Validate the batch and keep its finite returns.
    fn ingest(&mut self, batch: &ScanBatch) -> Result<()> {
        if let Some(rings) = &batch.rings {
            if rings.len() != batch.points.len() {
                return Err(ScanError::RingChannelMismatch {
                    points: batch.points.len(),
                    rings: rings.len(),
                });
            }
            if !batch.dense {
                return Err(ScanError::NotDense);
            }
        }

        self.output.metadata.header = batch.header.clone();

        match &batch.rings {
            Some(rings) => {
                for (point, &ring) in batch.points.iter().zip(rings.iter()) {
                    if point.is_finite() {
                        self.filtered.push(*point);
                        self.filtered_rings.push(ring);
                    } else {
                        self.output.stats.dropped_nonfinite += 1;
                    }
                }
            }
            None => {
                for point in &batch.points {
                    if point.is_finite() {
                        self.filtered.push(*point);
                    } else {
                        self.output.stats.dropped_nonfinite += 1;
                    }
                }
            }
        }
        Ok(())
    }

    /// Build the segmented, pure-object, and outlier clouds plus metadata.
    ///
    /// Emission walks the image beam-major, so each beam's contributions
    /// land contiguously in the segmented cloud in ascending column order.
    /// Ring windows are trimmed inward by [`RING_MARGIN`] at both ends; on
    /// a beam with fewer contributions than the margins the window inverts
    /// and consumers treat the beam as empty.
    fn emit(&mut self) {
        let cols = self.config.scanner.horizon_scan;
        let band = self.config.scanner.ground_scan_index;
        let image = &self.image;
        let out = &mut self.output;
        let full = out.full_projected.as_slice();

        let mut size: i32 = 0;
        for row in 0..image.rows() {
            out.metadata.start_ring_index[row] = size - 1 + RING_MARGIN;

            for col in 0..cols {
                let label = image.label_at(row, col);
                let is_ground = image.is_ground(row, col);
                if label <= 0 && !is_ground {
                    continue;
                }

                // Pruned clusters are sampled into the outlier cloud and
                // otherwise dropped.
                if label == OUTLIER_LABEL {
                    if row > band && col % DECIMATION_STRIDE == 0 {
                        out.outlier.push(full[image.index(row, col)]);
                    }
                    continue;
                }

                // Most ground columns are skipped; the seam edges stay.
                if is_ground
                    && col % DECIMATION_STRIDE != 0
                    && col > SEAM_KEEP_WIDTH
                    && col + SEAM_KEEP_WIDTH < cols
                {
                    continue;
                }

                out.metadata.ground_flag.push(is_ground);
                out.metadata.col_index.push(col as u32);
                out.metadata.range.push(image.range_at(row, col));
                out.segmented.push(full[image.index(row, col)]);
                size += 1;
            }

            out.metadata.end_ring_index[row] = size - 1 - RING_MARGIN;
        }

        for row in 0..image.rows() {
            for col in 0..cols {
                let label = image.label_at(row, col);
                if label > 0 && label != OUTLIER_LABEL {
                    let point = full[image.index(row, col)];
                    out.segmented_pure.push(point.with_intensity(label as f32));
                }
            }
        }
    }
}
