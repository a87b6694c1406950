//! Shared test infrastructure for rgb-gradient integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use rgb_gradient::Rgb;

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two floats with the default tolerance
pub fn approx(a: f64, b: f64) -> bool {
    approx_epsilon(a, b, 1e-9)
}

/// Compare two floats with custom epsilon
pub fn approx_epsilon(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

/// Distance between two hues on the unit circle
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 1.0;
    d.min(1.0 - d)
}

/// True when every channel differs by at most `tolerance`
pub fn channels_within(a: Rgb, b: Rgb, tolerance: u8) -> bool {
    a.r().abs_diff(b.r()) <= tolerance
        && a.g().abs_diff(b.g()) <= tolerance
        && a.b().abs_diff(b.b()) <= tolerance
}

/// Byte values sampled across the full channel range, both ends included
pub fn channel_samples(stride: usize) -> impl Iterator<Item = u8> + Clone {
    (0..=255u8).step_by(stride).chain(core::iter::once(255))
}
