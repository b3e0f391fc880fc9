//! # DrishtiScan
//!
//! Range-image projection and ground-aware segmentation front end for a
//! multi-beam lidar odometry pipeline.
//!
//! ## Overview
//!
//! Each revolution of a rotating multi-beam scanner is turned into:
//!
//! - **Range image** - a dense `beams × azimuth bins` projection
//! - **Ground mask** - cells whose inter-beam inclination is near-horizontal
//! - **Segmented cloud** - non-ground returns clustered into objects, with
//!   tiny clusters pruned as outliers
//! - **Scan metadata** - per-beam windows and per-point flags for the
//!   downstream feature extractor
//!
//! ## Pipeline
//!
//! One [`ScanFrontEnd::process`] call per scan: ingest → azimuth bracket →
//! projection → ground classification → BFS segmentation → emission. The
//! pipeline is single-threaded, allocates nothing on the hot path after
//! warm-up, and keeps no state across scans.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use drishti_scan::{DrishtiConfig, ScanFrontEnd, ScanBatch};
//!
//! let mut front_end = ScanFrontEnd::new(DrishtiConfig::default())?;
//!
//! for batch in scans {
//!     let output = front_end.process(&batch)?;
//!     println!(
//!         "{} clusters, {} segmented points",
//!         output.cluster_count,
//!         output.segmented.len()
//!     );
//! }
//! ```
//!
//! ## Coordinate System
//!
//! Sensor frame, fixed by the supported mounting:
//! - X: Right
//! - Y: Forward
//! - Z: Up
//!
//! The scanner sweeps clockwise viewed from above; beams are indexed
//! bottom to top.

#![warn(missing_docs)]

// Core types
pub mod core;

// Unified configuration
pub mod config;

// Scan-level errors
pub mod error;

// Range-image storage
pub mod image;

// Azimuth bracketing and projection
pub mod projection;

// Ground classification
pub mod ground;

// BFS cluster labeling
pub mod segmentation;

// Per-scan pipeline and emission
pub mod frontend;

// Re-export commonly used types
pub use config::{
    ConfigLoadError, DrishtiConfig, GeometryError, ScannerSection, SegmentationSection,
};

pub use crate::core::{
    decode_cell_key, encode_cell_key, Point, PointCloud, ScanBatch, ScanHeader, ScanMetadata,
    RING_MARGIN,
};

pub use error::{Result, ScanError};

pub use frontend::{FrontEndOutput, ScanFrontEnd};

pub use image::{RangeImage, EXCLUDED_LABEL, GROUND, GROUND_INVALID, GROUND_UNKNOWN, OUTLIER_LABEL};

pub use projection::{find_sweep_bounds, ProjectionStats, SweepBounds};

pub use segmentation::Segmenter;
