// File: crates/ledgerview-core/src/scene.rs
// Summary: Owned scene graph produced by one render pass, plus the surface that holds it.
// Notes:
// - A scene is a pure value: backends (SVG, Skia) only read it.
// - Replacing the scene on a surface drops the previous geometry; nothing is patched.

use serde::Serialize;

use crate::axis::Axis;
use crate::chart::{ChartKind, ChartRenderer};
use crate::data::{Dataset, Row};
use crate::geometry::{Point, RectF, Segment};
use crate::theme::{Color, Theme};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TextStyle {
    pub size: f32,
    pub bold: bool,
    pub color: Color,
}

impl TextStyle {
    pub const fn new(size: f32, color: Color) -> Self {
        Self { size, bold: false, color }
    }
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// Text placed with its baseline at `at`, optionally rotated (degrees) around `at`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextMark {
    pub text: String,
    pub at: Point,
    pub anchor: Anchor,
    pub style: TextStyle,
    pub rotation: f64,
}

impl TextMark {
    pub fn new(text: impl Into<String>, at: Point, anchor: Anchor, style: TextStyle) -> Self {
        Self { text: text.into(), at, anchor, style, rotation: 0.0 }
    }
    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }
}

/// One bar; `row` indexes the dataset the scene was built from.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BarMark {
    pub row: usize,
    pub value: f64,
    pub rect: RectF,
    pub fill: Color,
}

/// One point marker. Carries its row so hover handling needs only the scene.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PointMark {
    pub row: usize,
    pub datum: Row,
    pub center: Point,
    pub radius: f64,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
}

impl PointMark {
    pub fn contains(&self, p: Point) -> bool {
        self.center.distance(p) <= self.radius
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum PathCmd {
    MoveTo(Point),
    LineTo(Point),
    CubicTo(Point, Point, Point),
}

/// Connected series line. `vertices` are the data positions; `path` is what gets stroked.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LineMark {
    pub vertices: Vec<Point>,
    pub path: Vec<PathCmd>,
    pub stroke: Color,
    pub stroke_width: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Swatch {
    Fill(RectF, Color),
    Stroke(Segment, Color, f64),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LegendEntry {
    pub swatch: Swatch,
    pub label: TextMark,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Legend {
    pub frame: RectF,
    pub fill: Color,
    pub stroke: Color,
    pub entries: Vec<LegendEntry>,
}

/// Everything one render pass draws, in back-to-front order by field.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scene {
    pub kind: ChartKind,
    pub width: u32,
    pub height: u32,
    pub theme: Theme,
    /// Plot area inside the margins.
    pub plot: RectF,
    pub grid: Vec<Segment>,
    pub bars: Vec<BarMark>,
    pub lines: Vec<LineMark>,
    pub points: Vec<PointMark>,
    pub value_labels: Vec<TextMark>,
    pub axes: Vec<Axis>,
    pub captions: Vec<TextMark>,
    pub legend: Option<Legend>,
    pub title: Option<TextMark>,
}

impl Scene {
    pub fn new(kind: ChartKind, width: u32, height: u32, theme: Theme, plot: RectF) -> Self {
        Self {
            kind,
            width,
            height,
            theme,
            plot,
            grid: Vec::new(),
            bars: Vec::new(),
            lines: Vec::new(),
            points: Vec::new(),
            value_labels: Vec::new(),
            axes: Vec::new(),
            captions: Vec::new(),
            legend: None,
            title: None,
        }
    }

    /// Data marks: bars, points and line vertices.
    pub fn mark_count(&self) -> usize {
        self.bars.len() + self.points.len() + self.lines.iter().map(|l| l.vertices.len()).sum::<usize>()
    }

    /// Topmost point under `p` (points drawn later sit on top).
    pub fn point_at(&self, p: Point) -> Option<(usize, &PointMark)> {
        self.points.iter().enumerate().rev().find(|(_, m)| m.contains(p))
    }

    /// Strip text marks (tick labels, captions, title, value labels, legend text).
    pub fn without_labels(mut self) -> Self {
        self.value_labels.clear();
        self.captions.clear();
        self.title = None;
        for axis in &mut self.axes {
            for tick in &mut axis.ticks {
                tick.label = None;
            }
        }
        if let Some(legend) = &mut self.legend {
            for entry in &mut legend.entries {
                entry.label.text.clear();
            }
        }
        self
    }
}

/// Drawing target owned by one mounted chart variant.
#[derive(Debug, Default)]
pub struct Surface {
    scene: Option<Scene>,
    passes: u64,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `renderer` and replace the held scene. An empty dataset leaves the surface untouched.
    pub fn render(&mut self, renderer: &dyn ChartRenderer, dataset: &Dataset, width: u32, height: u32) -> bool {
        match renderer.build_scene(dataset, width, height) {
            Some(scene) => {
                self.scene = Some(scene);
                self.passes += 1;
                true
            }
            None => false,
        }
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    /// Number of completed render passes.
    pub fn passes(&self) -> u64 {
        self.passes
    }
}
