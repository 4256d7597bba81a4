// File: crates/ledgerview-core/src/bar.rs
// Summary: Bar variant: revenue per year as bars with value labels.

use tracing::debug;

use crate::axis::Axis;
use crate::chart::{ChartKind, ChartOptions, ChartRenderer, Frame, BAND_PADDING, NICE_COUNT, TICK_COUNT, VALUE_FONT_SIZE};
use crate::data::{Dataset, Field};
use crate::format;
use crate::geometry::{Point, RectF};
use crate::grid;
use crate::scale::{BandScale, LinearScale};
use crate::scene::{Anchor, BarMark, Scene, TextMark, TextStyle};

pub struct BarChart {
    pub options: ChartOptions,
}

impl BarChart {
    pub fn new(options: ChartOptions) -> Self {
        Self { options }
    }
}

impl Default for BarChart {
    fn default() -> Self {
        Self::new(ChartOptions::for_kind(ChartKind::Bar))
    }
}

/// Bar spanning from the zero baseline up to `value`; `None` when the geometry is not drawable.
pub(crate) fn bar_rect(x: &BandScale, y: &LinearScale, category: f64, value: f64) -> Option<RectF> {
    let left = x.position(category)?;
    let top = y.map(value);
    let height = y.map(0.0) - top;
    let rect = RectF::from_ltwh(left, top, x.bandwidth(), height);
    (rect.is_finite() && height >= 0.0).then_some(rect)
}

impl ChartRenderer for BarChart {
    fn kind(&self) -> ChartKind {
        ChartKind::Bar
    }

    fn build_scene(&self, data: &Dataset, width: u32, height: u32) -> Option<Scene> {
        if data.is_empty() {
            return None;
        }
        let frame = Frame::new(self.kind(), width, height, &self.options);
        let theme = frame.theme;
        let mut scene = frame.scene();

        let x = BandScale::new(data.iter().map(|r| r.year), (frame.left(), frame.right())).with_padding(BAND_PADDING);
        let y_max = data.max(Field::Revenue).unwrap_or(f64::NAN);
        let y = LinearScale::new((0.0, y_max), (frame.bottom(), frame.top())).nice(NICE_COUNT);

        scene.grid = grid::horizontal(&y, TICK_COUNT, frame.left(), frame.right());

        let value_style = TextStyle::new(VALUE_FONT_SIZE, theme.value_label);
        for (row, r) in data.iter().enumerate() {
            let Some(rect) = bar_rect(&x, &y, r.year, r.revenue) else {
                debug!(row, revenue = r.revenue, "bar omitted: geometry not drawable");
                continue;
            };
            scene.bars.push(BarMark { row, value: r.revenue, rect, fill: theme.bar });
            scene.value_labels.push(TextMark::new(
                format::millions(r.revenue),
                Point::new(rect.left + rect.width() / 2.0, rect.top - 6.0),
                Anchor::Middle,
                value_style,
            ));
        }

        scene.axes.push(Axis::bottom(&x, frame.bottom(), TICK_COUNT, frame.tick_style(), format::integer));
        scene.axes.push(Axis::left(&y, frame.left(), TICK_COUNT, frame.tick_style(), format::millions));

        scene.captions.push(frame.caption_x("Year"));
        scene.captions.push(frame.caption_y("Revenue (Millions)"));
        scene.title = Some(frame.title("Company Revenue by Year", 28.0));

        debug!(kind = %self.kind(), rows = data.len(), bars = scene.bars.len(), "built scene");
        Some(frame.finish(scene))
    }
}
