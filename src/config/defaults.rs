//! Default value functions for serde deserialization.
//!
//! Scanner defaults match a Velodyne VLP-16.

pub fn num_beams() -> usize {
    16
}

pub fn horizon_scan() -> usize {
    1800
}

pub fn ang_res_x() -> f32 {
    0.2
}

pub fn ang_res_y() -> f32 {
    2.0
}

pub fn ang_bottom() -> f32 {
    15.1
}

pub fn ground_scan_index() -> usize {
    7
}

pub fn min_range() -> f32 {
    1.0
}

pub fn mount_angle() -> f32 {
    0.0
}

pub fn use_ring_channel() -> bool {
    true
}

pub fn scan_period() -> f32 {
    0.1
}

pub fn segment_theta() -> f32 {
    60.0_f32.to_radians()
}

pub fn valid_point_num() -> usize {
    5
}

pub fn valid_line_num() -> usize {
    3
}

pub fn ground_angle_threshold() -> f32 {
    10.0
}

pub fn min_valid_cells() -> usize {
    100
}
