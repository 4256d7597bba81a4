// File: crates/ledgerview-core/src/multi_series.rs
// Summary: Multi-series variant: revenue bars and a smoothed profit line on one shared scale.

use tracing::debug;

use crate::axis::Axis;
use crate::bar::bar_rect;
use crate::chart::{
    ChartKind, ChartOptions, ChartRenderer, Frame, BAND_PADDING, LEGEND_FONT_SIZE, NICE_COUNT, TICK_COUNT,
};
use crate::curve;
use crate::data::Dataset;
use crate::format;
use crate::geometry::{Point, RectF, Segment};
use crate::grid;
use crate::scale::{BandScale, LinearScale};
use crate::scene::{Anchor, BarMark, Legend, LegendEntry, LineMark, PointMark, Scene, Swatch, TextMark, TextStyle};

pub const MARKER_RADIUS: f64 = 3.5;
pub const LINE_WIDTH: f64 = 2.5;
/// Legend origin; entries are laid out relative to it.
const LEGEND_ORIGIN: Point = Point::new(110.0, 16.0);

pub struct MultiSeriesChart {
    pub options: ChartOptions,
}

impl MultiSeriesChart {
    pub fn new(options: ChartOptions) -> Self {
        Self { options }
    }
}

impl Default for MultiSeriesChart {
    fn default() -> Self {
        Self::new(ChartOptions::for_kind(ChartKind::MultiSeries))
    }
}

// NaN if either side is NaN, so a row with a broken value drops out of the max.
fn max_or_nan(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { a.max(b) }
}

impl ChartRenderer for MultiSeriesChart {
    fn kind(&self) -> ChartKind {
        ChartKind::MultiSeries
    }

    fn build_scene(&self, data: &Dataset, width: u32, height: u32) -> Option<Scene> {
        if data.is_empty() {
            return None;
        }
        let frame = Frame::new(self.kind(), width, height, &self.options);
        let theme = frame.theme;
        let mut scene = frame.scene();

        let x = BandScale::new(data.iter().map(|r| r.year), (frame.left(), frame.right())).with_padding(BAND_PADDING);
        let y_max = data.max_by(|r| max_or_nan(r.revenue, r.profit)).unwrap_or(f64::NAN);
        let y = LinearScale::new((0.0, y_max), (frame.bottom(), frame.top())).nice(NICE_COUNT);

        scene.grid = grid::horizontal(&y, TICK_COUNT, frame.left(), frame.right());

        for (row, r) in data.iter().enumerate() {
            match bar_rect(&x, &y, r.year, r.revenue) {
                Some(rect) => scene.bars.push(BarMark { row, value: r.revenue, rect, fill: theme.bar }),
                None => debug!(row, revenue = r.revenue, "bar omitted: geometry not drawable"),
            }
        }

        // Profit line in row order; broken vertices split the path.
        let positions: Vec<Point> = data
            .iter()
            .map(|r| Point::new(x.center(r.year).unwrap_or(f64::NAN), y.map(r.profit)))
            .collect();
        scene.lines.push(LineMark {
            vertices: positions.iter().copied().filter(Point::is_finite).collect(),
            path: curve::monotone_x(&positions),
            stroke: theme.line_stroke,
            stroke_width: LINE_WIDTH,
        });
        for (row, (r, center)) in data.iter().zip(&positions).enumerate() {
            if !center.is_finite() {
                debug!(row, profit = r.profit, "marker omitted: position not finite");
                continue;
            }
            scene.points.push(PointMark {
                row,
                datum: *r,
                center: *center,
                radius: MARKER_RADIUS,
                fill: theme.point_fill,
                stroke: theme.point_stroke,
                stroke_width: 1.0,
            });
        }

        scene.axes.push(Axis::bottom(&x, frame.bottom(), TICK_COUNT, frame.tick_style(), format::integer));
        scene.axes.push(Axis::left(&y, frame.left(), TICK_COUNT, frame.tick_style(), format::millions));

        scene.captions.push(frame.caption_x("Year"));
        scene.captions.push(frame.caption_y("Amount (Millions)"));
        scene.legend = Some(legend(&frame));
        scene.title = Some(frame.title("Revenue (Bars) + Profit (Line)", 26.0));

        debug!(kind = %self.kind(), rows = data.len(), bars = scene.bars.len(), "built scene");
        Some(frame.finish(scene))
    }
}

fn legend(frame: &Frame) -> Legend {
    let theme = frame.theme;
    let (ox, oy) = (LEGEND_ORIGIN.x, LEGEND_ORIGIN.y);
    let style = TextStyle::new(LEGEND_FONT_SIZE, theme.axis_label);
    Legend {
        frame: RectF::from_ltwh(-12.0, -10.0, 230.0, 24.0).translate(ox, oy),
        fill: theme.legend_fill,
        stroke: theme.legend_stroke,
        entries: vec![
            LegendEntry {
                swatch: Swatch::Fill(RectF::from_ltwh(0.0, -6.0, 14.0, 14.0).translate(ox, oy), theme.bar),
                label: TextMark::new("Revenue (bars)", LEGEND_ORIGIN.offset(20.0, 6.0), Anchor::Start, style),
            },
            LegendEntry {
                swatch: Swatch::Stroke(
                    Segment::horizontal(oy, ox + 128.0, ox + 160.0),
                    theme.line_stroke,
                    3.0,
                ),
                label: TextMark::new("Profit (line)", LEGEND_ORIGIN.offset(166.0, 6.0), Anchor::Start, style),
            },
        ],
    }
}
