// File: crates/ledgerview-core/src/scatter.rs
// Summary: Scatter variant: revenue (x) against expenses (y), one point per year.

use tracing::debug;

use crate::axis::Axis;
use crate::chart::{ChartKind, ChartOptions, ChartRenderer, Frame, NICE_COUNT, TICK_COUNT};
use crate::data::{Dataset, Field};
use crate::format;
use crate::geometry::Point;
use crate::grid;
use crate::scale::LinearScale;
use crate::scene::{PointMark, Scene};

pub const POINT_RADIUS: f64 = 5.0;

pub struct ScatterPlot {
    pub options: ChartOptions,
}

impl ScatterPlot {
    pub fn new(options: ChartOptions) -> Self {
        Self { options }
    }
}

impl Default for ScatterPlot {
    fn default() -> Self {
        Self::new(ChartOptions::for_kind(ChartKind::Scatter))
    }
}

impl ChartRenderer for ScatterPlot {
    fn kind(&self) -> ChartKind {
        ChartKind::Scatter
    }

    fn build_scene(&self, data: &Dataset, width: u32, height: u32) -> Option<Scene> {
        if data.is_empty() {
            return None;
        }
        let frame = Frame::new(self.kind(), width, height, &self.options);
        let theme = frame.theme;
        let mut scene = frame.scene();

        let x_dom = data.extent(Field::Revenue).unwrap_or((f64::NAN, f64::NAN));
        let y_dom = data.extent(Field::Expenses).unwrap_or((f64::NAN, f64::NAN));
        let x = LinearScale::new(x_dom, (frame.left(), frame.right())).nice(NICE_COUNT);
        let y = LinearScale::new(y_dom, (frame.bottom(), frame.top())).nice(NICE_COUNT);

        scene.grid = grid::vertical(&x, TICK_COUNT, frame.bottom(), frame.top());
        scene.grid.extend(grid::horizontal(&y, TICK_COUNT, frame.left(), frame.right()));

        for (row, r) in data.iter().enumerate() {
            let center = Point::new(x.map(r.revenue), y.map(r.expenses));
            if !center.is_finite() {
                debug!(row, revenue = r.revenue, expenses = r.expenses, "point omitted: position not finite");
                continue;
            }
            scene.points.push(PointMark {
                row,
                datum: *r,
                center,
                radius: POINT_RADIUS,
                fill: theme.point_fill,
                stroke: theme.point_stroke,
                stroke_width: 1.0,
            });
        }

        scene.axes.push(Axis::bottom(&x, frame.bottom(), TICK_COUNT, frame.tick_style(), format::millions));
        scene.axes.push(Axis::left(&y, frame.left(), TICK_COUNT, frame.tick_style(), format::millions));

        scene.captions.push(frame.caption_x("Revenue (Millions)"));
        scene.captions.push(frame.caption_y("Expenses (Millions)"));
        scene.title = Some(frame.title("Revenue vs Expenses (Scatter)", 26.0));

        debug!(kind = %self.kind(), rows = data.len(), points = scene.points.len(), "built scene");
        Some(frame.finish(scene))
    }
}
