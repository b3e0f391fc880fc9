//! Raw scan input types.

use super::point::Point;

/// Identity of one scan: acquisition time and the frame the points live in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanHeader {
    /// Acquisition timestamp in microseconds since epoch.
    pub timestamp_us: u64,
    /// Coordinate frame id (e.g. "base_link").
    pub frame_id: String,
}

impl ScanHeader {
    /// Create a header.
    pub fn new(timestamp_us: u64, frame_id: impl Into<String>) -> Self {
        Self {
            timestamp_us,
            frame_id: frame_id.into(),
        }
    }
}

/// One revolution of raw returns, as handed over by the ingest collaborator.
///
/// Points are in acquisition order: the first point carries the sweep's
/// start azimuth and the last its end azimuth. The optional `rings` channel
/// gives the emitting beam index per point (bottom beam = 0) and must be
/// parallel to `points`. `dense` asserts that the batch contains no
/// non-finite coordinates; it is required whenever `rings` is present,
/// because filtering would break the point/ring pairing.
///
/// The sensor frame is right-x, forward-y, up-z with a clockwise sweep
/// viewed from above. No other mounting is supported.
#[derive(Clone, Debug, Default)]
pub struct ScanBatch {
    /// Scan identity.
    pub header: ScanHeader,
    /// Raw returns in acquisition order.
    pub points: Vec<Point>,
    /// Per-point beam index, parallel to `points`.
    pub rings: Option<Vec<u16>>,
    /// True if the producer guarantees every coordinate is finite.
    pub dense: bool,
}

impl ScanBatch {
    /// Create a batch without a ring channel.
    pub fn new(header: ScanHeader, points: Vec<Point>) -> Self {
        Self {
            header,
            points,
            rings: None,
            dense: false,
        }
    }

    /// Create a dense batch with a per-point ring channel.
    pub fn with_rings(header: ScanHeader, points: Vec<Point>, rings: Vec<u16>) -> Self {
        Self {
            header,
            points,
            rings: Some(rings),
            dense: true,
        }
    }

    /// Number of raw returns.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Is the batch empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Does the batch carry a beam-index channel?
    #[inline]
    pub fn has_rings(&self) -> bool {
        self.rings.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_constructors() {
        let header = ScanHeader::new(42, "base_link");
        let points = vec![Point::new(1.0, 0.0, 0.0, 0.0)];

        let plain = ScanBatch::new(header.clone(), points.clone());
        assert!(!plain.has_rings());
        assert!(!plain.dense);
        assert_eq!(plain.len(), 1);

        let ringed = ScanBatch::with_rings(header, points, vec![3]);
        assert!(ringed.has_rings());
        assert!(ringed.dense);
    }
}
