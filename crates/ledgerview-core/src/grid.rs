// File: crates/ledgerview-core/src/grid.rs
// Summary: Background grid lines aligned to a scale's ticks.

use crate::geometry::Segment;
use crate::scale::AxisScale;

/// Horizontal lines from `x0` to `x1` at each tick of a vertical scale.
pub fn horizontal<S: AxisScale>(scale: &S, count: usize, x0: f64, x1: f64) -> Vec<Segment> {
    scale
        .tick_values(count)
        .into_iter()
        .filter_map(|v| scale.tick_position(v))
        .map(|y| Segment::horizontal(y, x0, x1))
        .collect()
}

/// Vertical lines from `y0` to `y1` at each tick of a horizontal scale.
pub fn vertical<S: AxisScale>(scale: &S, count: usize, y0: f64, y1: f64) -> Vec<Segment> {
    scale
        .tick_values(count)
        .into_iter()
        .filter_map(|v| scale.tick_position(v))
        .map(|x| Segment::vertical(x, y0, y1))
        .collect()
}
