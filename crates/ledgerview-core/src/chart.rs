// File: crates/ledgerview-core/src/chart.rs
// Summary: Chart variants, the renderer trait and the frame (margins, titles, captions) they share.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::bar::BarChart;
use crate::data::Dataset;
use crate::geometry::{Point, RectF};
use crate::multi_series::MultiSeriesChart;
use crate::scatter::ScatterPlot;
use crate::scene::{Anchor, Scene, TextMark, TextStyle};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, MULTI_HEIGHT, WIDTH};

/// Tick count requested from linear scales.
pub const TICK_COUNT: usize = 6;
/// Tick count used when nice-rounding a linear domain.
pub const NICE_COUNT: usize = 10;
/// Padding between (and around) category bands, as a fraction of the step.
pub const BAND_PADDING: f64 = 0.2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum ChartKind {
    #[default]
    Bar,
    Scatter,
    MultiSeries,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Bar, ChartKind::Scatter, ChartKind::MultiSeries];

    /// Tab caption.
    pub const fn label(self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar",
            ChartKind::Scatter => "Scatter",
            ChartKind::MultiSeries => "Multi-series",
        }
    }

    /// Card header shown above the chart.
    pub const fn header(self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar chart",
            ChartKind::Scatter => "Scatter plot",
            ChartKind::MultiSeries => "Multi-series chart",
        }
    }

    /// Short name used on the command line and in file names.
    pub const fn slug(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Scatter => "scatter",
            ChartKind::MultiSeries => "multi",
        }
    }

    /// Default surface size in pixels.
    pub const fn default_size(self) -> (u32, u32) {
        match self {
            ChartKind::Bar | ChartKind::Scatter => (WIDTH, HEIGHT),
            ChartKind::MultiSeries => (WIDTH, MULTI_HEIGHT),
        }
    }

    pub const fn default_insets(self) -> Insets {
        match self {
            ChartKind::Bar | ChartKind::Scatter => Insets::new(72, 24, 50, 64),
            ChartKind::MultiSeries => Insets::multi_series(),
        }
    }

    /// Next tab in display order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            ChartKind::Bar => ChartKind::Scatter,
            ChartKind::Scatter => ChartKind::MultiSeries,
            ChartKind::MultiSeries => ChartKind::Bar,
        }
    }

    /// Renderer for this variant with default margins.
    pub fn renderer(self, theme: Theme) -> Box<dyn ChartRenderer> {
        let options = ChartOptions::for_kind(self).with_theme(theme);
        match self {
            ChartKind::Bar => Box::new(BarChart::new(options)),
            ChartKind::Scatter => Box::new(ScatterPlot::new(options)),
            ChartKind::MultiSeries => Box::new(MultiSeriesChart::new(options)),
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ChartKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bar" => Ok(ChartKind::Bar),
            "scatter" => Ok(ChartKind::Scatter),
            "multi" | "multi-series" | "multiseries" => Ok(ChartKind::MultiSeries),
            other => Err(format!("unknown chart kind '{other}' (expected bar, scatter or multi)")),
        }
    }
}

/// Maps a dataset to a fresh scene. `None` means "nothing to draw" (empty dataset).
pub trait ChartRenderer {
    fn kind(&self) -> ChartKind;
    fn build_scene(&self, dataset: &Dataset, width: u32, height: u32) -> Option<Scene>;
}

/// Per-variant configuration: margins, colors, and whether text is emitted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartOptions {
    pub insets: Insets,
    pub theme: Theme,
    /// When false, no text marks are produced (deterministic raster snapshots).
    pub draw_labels: bool,
}

impl ChartOptions {
    pub fn for_kind(kind: ChartKind) -> Self {
        Self { insets: kind.default_insets(), theme: Theme::dark(), draw_labels: true }
    }
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
    pub fn with_labels(mut self, draw_labels: bool) -> Self {
        self.draw_labels = draw_labels;
        self
    }
}

/// Full render request: surface size plus chart options.
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub chart: ChartOptions,
}

impl RenderOptions {
    pub fn for_kind(kind: ChartKind) -> Self {
        let (width, height) = kind.default_size();
        Self { width, height, chart: ChartOptions::for_kind(kind) }
    }
}

/// Build the scene of `kind` for `dataset` with explicit options.
pub fn build_scene(kind: ChartKind, dataset: &Dataset, opts: &RenderOptions) -> Option<Scene> {
    match kind {
        ChartKind::Bar => BarChart::new(opts.chart).build_scene(dataset, opts.width, opts.height),
        ChartKind::Scatter => ScatterPlot::new(opts.chart).build_scene(dataset, opts.width, opts.height),
        ChartKind::MultiSeries => MultiSeriesChart::new(opts.chart).build_scene(dataset, opts.width, opts.height),
    }
}

// ---- shared frame -----------------------------------------------------------

pub(crate) const TITLE_FONT_SIZE: f32 = 18.0;
pub(crate) const CAPTION_FONT_SIZE: f32 = 13.0;
pub(crate) const VALUE_FONT_SIZE: f32 = 11.0;
pub(crate) const LEGEND_FONT_SIZE: f32 = 12.0;

/// Margin reservation and the text every variant places around its plot.
pub(crate) struct Frame {
    pub kind: ChartKind,
    pub width: f64,
    pub height: f64,
    pub insets: Insets,
    pub theme: Theme,
    pub draw_labels: bool,
}

impl Frame {
    pub fn new(kind: ChartKind, width: u32, height: u32, opts: &ChartOptions) -> Self {
        Self {
            kind,
            width: width as f64,
            height: height as f64,
            insets: opts.insets,
            theme: opts.theme,
            draw_labels: opts.draw_labels,
        }
    }

    pub fn left(&self) -> f64 { self.insets.left as f64 }
    pub fn right(&self) -> f64 { self.width - self.insets.right as f64 }
    pub fn top(&self) -> f64 { self.insets.top as f64 }
    pub fn bottom(&self) -> f64 { self.height - self.insets.bottom as f64 }

    pub fn plot(&self) -> RectF {
        RectF::from_ltrb(self.left(), self.top(), self.right(), self.bottom())
    }

    pub fn scene(&self) -> Scene {
        Scene::new(self.kind, self.width as u32, self.height as u32, self.theme, self.plot())
    }

    pub fn tick_style(&self) -> TextStyle {
        TextStyle::new(crate::axis::TICK_FONT_SIZE, self.theme.tick_label)
    }

    pub fn caption_style(&self) -> TextStyle {
        TextStyle::new(CAPTION_FONT_SIZE, self.theme.axis_label)
    }

    /// Horizontal caption centred under the bottom axis.
    pub fn caption_x(&self, text: &str) -> TextMark {
        TextMark::new(text, Point::new(self.width / 2.0, self.height - 20.0), Anchor::Middle, self.caption_style())
    }

    /// Vertical caption centred along the left edge.
    pub fn caption_y(&self, text: &str) -> TextMark {
        TextMark::new(text, Point::new(18.0, self.height / 2.0), Anchor::Middle, self.caption_style()).rotated(-90.0)
    }

    pub fn title(&self, text: &str, baseline: f64) -> TextMark {
        let style = TextStyle::new(TITLE_FONT_SIZE, self.theme.title).bold();
        TextMark::new(text, Point::new(self.width / 2.0, baseline), Anchor::Middle, style)
    }

    pub fn finish(&self, scene: Scene) -> Scene {
        if self.draw_labels { scene } else { scene.without_labels() }
    }
}
