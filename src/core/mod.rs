//! Core data types: points, clouds, scan input, scan metadata.

mod cloud;
mod metadata;
mod point;
mod scan;

pub use cloud::PointCloud;
pub use metadata::{ScanMetadata, RING_MARGIN};
pub use point::{decode_cell_key, encode_cell_key, Point};
pub use scan::{ScanBatch, ScanHeader};
