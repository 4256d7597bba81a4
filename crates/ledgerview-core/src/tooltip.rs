// File: crates/ledgerview-core/src/tooltip.rs
// Summary: Hover tracking over scatter points and the floating label it drives.

use serde::Serialize;

use crate::format;
use crate::geometry::Point;
use crate::scene::{PointMark, Scene};

/// Offset of the tooltip's top-left corner from the pointer.
pub const TOOLTIP_OFFSET: (f64, f64) = (12.0, -28.0);

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Tooltip {
    pub visible: bool,
    pub lines: Vec<String>,
    /// Top-left corner in surface pixels.
    pub anchor: Point,
}

/// Text shown for a hovered point: year, revenue and expenses in millions.
pub fn point_label(mark: &PointMark) -> Vec<String> {
    vec![
        format!("Year: {}", format::integer(mark.datum.year)),
        format!("Revenue: {}", format::millions_precise(mark.datum.revenue)),
        format!("Expenses: {}", format::millions_precise(mark.datum.expenses)),
    ]
}

/// What a pointer event did to the hover state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverChange {
    None,
    Entered(usize),
    Moved(usize),
    Left(usize),
}

#[derive(Clone, Debug, Default)]
pub struct HoverTracker {
    hovered: Option<usize>,
    tooltip: Tooltip,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    /// Pointer moved to `pos` over `scene`.
    pub fn pointer_moved(&mut self, scene: &Scene, pos: Point) -> HoverChange {
        let hit = scene.point_at(pos);
        match (self.hovered, hit) {
            (Some(current), Some((idx, _))) if current == idx => {
                self.tooltip.anchor = pos.offset(TOOLTIP_OFFSET.0, TOOLTIP_OFFSET.1);
                HoverChange::Moved(idx)
            }
            (_, Some((idx, mark))) => {
                self.hovered = Some(idx);
                self.tooltip.lines = point_label(mark);
                self.tooltip.visible = true;
                self.tooltip.anchor = pos.offset(TOOLTIP_OFFSET.0, TOOLTIP_OFFSET.1);
                HoverChange::Entered(idx)
            }
            (Some(_), None) => self.pointer_left(),
            (None, None) => HoverChange::None,
        }
    }

    /// Pointer left the point (or the surface). The text is kept; only visibility changes.
    pub fn pointer_left(&mut self) -> HoverChange {
        self.tooltip.visible = false;
        match self.hovered.take() {
            Some(idx) => HoverChange::Left(idx),
            None => HoverChange::None,
        }
    }

    /// Forget everything; used when the scene under the pointer is replaced.
    pub fn reset(&mut self) {
        self.hovered = None;
        self.tooltip = Tooltip::default();
    }
}
