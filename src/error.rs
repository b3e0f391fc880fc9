//! Scan-level error types.
//!
//! # Error Severity
//!
//! Failures are scoped to a single scan; scans are independent and no retry
//! is meaningful:
//!
//! - **`NotDense`** / **`RingChannelMismatch`**: the scan is aborted and
//!   nothing is emitted. The caller logs and awaits the next scan.
//! - Geometry problems are caught before the first scan is admitted and
//!   surface as [`crate::config::GeometryError`] from construction.
//! - Individual out-of-range or below-minimum returns are dropped silently
//!   and tallied in [`crate::projection::ProjectionStats`].
//! - A near-empty projection is a `log::warn!`, not an error: empty
//!   artifacts are emitted and downstream decides.

use thiserror::Error;

/// Errors that abort the current scan.
#[derive(Error, Debug)]
pub enum ScanError {
    /// A ring channel is attached but the batch admits non-finite points.
    #[error("ring channel present but batch is not dense; remove NaN points upstream")]
    NotDense,

    /// The ring channel is not parallel to the point array.
    #[error("ring channel length {rings} does not match point count {points}")]
    RingChannelMismatch {
        /// Number of points in the batch.
        points: usize,
        /// Number of entries in the ring channel.
        rings: usize,
    },
}

/// Scan-processing result alias.
pub type Result<T> = std::result::Result<T, ScanError>;
