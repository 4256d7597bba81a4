// File: crates/ledgerview-core/src/types.rs
// Summary: Shared types and constants (sizes, margins).

use serde::Serialize;

/// Default surface width in pixels.
pub const WIDTH: u32 = 900;
/// Default surface height in pixels (bar and scatter charts).
pub const HEIGHT: u32 = 480;
/// Default surface height for the multi-series chart.
pub const MULTI_HEIGHT: u32 = 500;

/// Screen margins reserved around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Margins of the multi-series chart, which leaves room for its legend.
    pub const fn multi_series() -> Self {
        Self::new(72, 24, 56, 64)
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 24, 50, 64)
    }
}
