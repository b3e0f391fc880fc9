//! Shared synthetic-scene builders for front-end integration tests.

#![allow(dead_code)]

use drishti_scan::{DrishtiConfig, Point, ScanBatch, ScanHeader, ScannerSection};

/// Default VLP-16 configuration used by every scenario.
pub fn vlp16() -> DrishtiConfig {
    DrishtiConfig::default()
}

/// Azimuth of a range-image column, radians from +Y, clockwise positive.
pub fn column_azimuth(scanner: &ScannerSection, col: usize) -> f32 {
    (270.0 - scanner.ang_res_x * col as f32).to_radians()
}

/// Elevation of a beam, radians.
pub fn beam_elevation(scanner: &ScannerSection, ring: usize) -> f32 {
    (ring as f32 * scanner.ang_res_y - scanner.ang_bottom).to_radians()
}

/// A return on beam `ring` in column `col` at the given range, lying on
/// the beam's true elevation.
pub fn point_at(scanner: &ScannerSection, ring: usize, col: usize, range: f32) -> Point {
    let elev = beam_elevation(scanner, ring);
    let phi = column_azimuth(scanner, col);
    let horizontal = range * elev.cos();
    Point::new(
        horizontal * phi.sin(),
        horizontal * phi.cos(),
        range * elev.sin(),
        0.0,
    )
}

/// A return in column `col` at horizontal radius `radius` and height `z`.
pub fn flat_point(scanner: &ScannerSection, col: usize, radius: f32, z: f32) -> Point {
    let phi = column_azimuth(scanner, col);
    Point::new(radius * phi.sin(), radius * phi.cos(), z, 0.0)
}

/// Bundle (point, ring) pairs into a dense ringed batch.
pub fn ringed_batch(timestamp_us: u64, returns: &[(Point, u16)]) -> ScanBatch {
    let points = returns.iter().map(|(p, _)| *p).collect();
    let rings = returns.iter().map(|(_, r)| *r).collect();
    ScanBatch::with_rings(ScanHeader::new(timestamp_us, "base_link"), points, rings)
}

/// Flat ground disc at height `z` covering every column of beams
/// `0..=top_ring` at a shared horizontal radius.
pub fn ground_disc(
    scanner: &ScannerSection,
    top_ring: usize,
    radius: f32,
    z: f32,
) -> Vec<(Point, u16)> {
    let mut returns = Vec::new();
    for col in 0..scanner.horizon_scan {
        for ring in 0..=top_ring {
            returns.push((flat_point(scanner, col, radius, z), ring as u16));
        }
    }
    returns
}

/// Surface patch at constant range covering the given beams and columns.
pub fn wall_patch(
    scanner: &ScannerSection,
    rings: std::ops::Range<usize>,
    cols: &[usize],
    range: f32,
) -> Vec<(Point, u16)> {
    let mut returns = Vec::new();
    for ring in rings {
        for &col in cols {
            returns.push((point_at(scanner, ring, col, range), ring as u16));
        }
    }
    returns
}

/// Vertical pole: one return per beam in `rings`, all in one column, on a
/// plumb line at horizontal distance `radius`.
pub fn pole(
    scanner: &ScannerSection,
    rings: std::ops::Range<usize>,
    col: usize,
    radius: f32,
) -> Vec<(Point, u16)> {
    let phi = column_azimuth(scanner, col);
    let mut returns = Vec::new();
    for ring in rings {
        let z = radius * beam_elevation(scanner, ring).tan();
        let point = Point::new(radius * phi.sin(), radius * phi.cos(), z, 0.0);
        returns.push((point, ring as u16));
    }
    returns
}
