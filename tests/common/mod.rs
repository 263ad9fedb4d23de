//! Shared test infrastructure for color-value integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use color_value::ColorValue;

// ============================================================================
// Sample Inputs
// ============================================================================

/// Every 8-bit channel value stepping by 17 (0, 17, ..., 255)
pub fn channel_steps() -> impl Iterator<Item = u8> + Clone {
    (0..=15u8).map(|n| n * 17)
}

/// Every RGB triple built from `channel_steps`
pub fn rgb_samples() -> impl Iterator<Item = [u8; 3]> {
    channel_steps().flat_map(|r| {
        channel_steps().flat_map(move |g| channel_steps().map(move |b| [r, g, b]))
    })
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Parses a color that must be valid
pub fn color(text: &str) -> ColorValue {
    ColorValue::new(text).unwrap_or_else(|err| panic!("{text:?} failed to parse: {err}"))
}

/// Compare two channel triples with a per-channel tolerance
pub fn channels_within(a: [u8; 3], b: [u8; 3], tolerance: u8) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| x.abs_diff(*y) <= tolerance)
}

/// Compare two float triples with a per-component tolerance
pub fn floats_within(a: [f64; 3], b: [f64; 3], tolerance: f64) -> bool {
    a.iter()
        .zip(b.iter())
        .all(|(x, y)| (x - y).abs() <= tolerance)
}
