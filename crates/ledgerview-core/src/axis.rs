// File: crates/ledgerview-core/src/axis.rs
// Summary: Axis model: domain line, tick marks and tick labels laid out from a scale.

use serde::Serialize;

use crate::geometry::{Point, Segment};
use crate::scale::AxisScale;
use crate::scene::{Anchor, TextMark, TextStyle};

/// Length of tick marks and of the domain line's end caps.
pub const TICK_SIZE: f64 = 6.0;
/// Gap between a tick mark and its label.
pub const TICK_PADDING: f64 = 3.0;
/// Font size of tick labels.
pub const TICK_FONT_SIZE: f32 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Orient {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tick {
    pub value: f64,
    pub position: f64,
    pub mark: Segment,
    pub label: Option<TextMark>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Axis {
    pub orient: Orient,
    /// Domain line with end caps, as a polyline.
    pub domain: Vec<Point>,
    pub ticks: Vec<Tick>,
}

impl Axis {
    /// Axis along the bottom edge, drawn at pixel row `y`.
    pub fn bottom<S: AxisScale>(
        scale: &S,
        y: f64,
        count: usize,
        style: TextStyle,
        format: impl Fn(f64) -> String,
    ) -> Self {
        let (r0, r1) = scale.range();
        let domain = vec![
            Point::new(r0, y + TICK_SIZE),
            Point::new(r0, y),
            Point::new(r1, y),
            Point::new(r1, y + TICK_SIZE),
        ];
        let ticks = scale
            .tick_values(count)
            .into_iter()
            .filter_map(|value| {
                let x = scale.tick_position(value)?;
                let label = TextMark::new(
                    format(value),
                    Point::new(x, y + TICK_SIZE + TICK_PADDING + TICK_FONT_SIZE as f64 * 0.71),
                    Anchor::Middle,
                    style,
                );
                Some(Tick {
                    value,
                    position: x,
                    mark: Segment::vertical(x, y, y + TICK_SIZE),
                    label: Some(label),
                })
            })
            .collect();
        Self { orient: Orient::Bottom, domain, ticks }
    }

    /// Axis along the left edge, drawn at pixel column `x`.
    pub fn left<S: AxisScale>(
        scale: &S,
        x: f64,
        count: usize,
        style: TextStyle,
        format: impl Fn(f64) -> String,
    ) -> Self {
        let (r0, r1) = scale.range();
        let domain = vec![
            Point::new(x - TICK_SIZE, r0),
            Point::new(x, r0),
            Point::new(x, r1),
            Point::new(x - TICK_SIZE, r1),
        ];
        let ticks = scale
            .tick_values(count)
            .into_iter()
            .filter_map(|value| {
                let y = scale.tick_position(value)?;
                let label = TextMark::new(
                    format(value),
                    Point::new(x - TICK_SIZE - TICK_PADDING, y + TICK_FONT_SIZE as f64 * 0.32),
                    Anchor::End,
                    style,
                );
                Some(Tick {
                    value,
                    position: y,
                    mark: Segment::horizontal(y, x - TICK_SIZE, x),
                    label: Some(label),
                })
            })
            .collect();
        Self { orient: Orient::Left, domain, ticks }
    }

    /// Tick labels in axis order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.ticks.iter().filter_map(|t| t.label.as_ref()).map(|l| l.text.as_str())
    }
}
