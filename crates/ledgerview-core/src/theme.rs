// File: crates/ledgerview-core/src/theme.rs
// Summary: Color type and theme presets used by chart scenes and backends.

use serde::Serialize;

/// Straight-alpha RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(255, r, g, b)
    }
    /// `0xRRGGBB`, fully opaque.
    pub const fn from_hex(rgb: u32) -> Self {
        Self::from_rgb(((rgb >> 16) & 0xff) as u8, ((rgb >> 8) & 0xff) as u8, (rgb & 0xff) as u8)
    }
    /// CSS hex notation (`#rrggbb`); alpha is emitted separately as an opacity.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
    pub fn opacity(&self) -> f64 {
        self.a as f64 / 255.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub tick_label: Color,
    pub title: Color,
    pub bar: Color,
    pub value_label: Color,
    pub point_fill: Color,
    pub point_stroke: Color,
    pub line_stroke: Color,
    pub legend_fill: Color,
    pub legend_stroke: Color,
    pub tooltip_background: Color,
    pub tooltip_text: Color,
}

impl Theme {
    /// Navy palette the charts were designed around.
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_hex(0x0b1020),
            grid: Color::from_hex(0x2a3a66),
            axis_line: Color::from_hex(0x6f88b9),
            axis_label: Color::from_hex(0xffffff),
            tick_label: Color::from_hex(0xffffff),
            title: Color::from_hex(0xffffff),
            bar: Color::from_hex(0x5fa8ff),
            value_label: Color::from_hex(0xcfe3ff),
            point_fill: Color::from_hex(0xffd166),
            point_stroke: Color::from_hex(0x0b1020),
            line_stroke: Color::from_hex(0xeea94b),
            legend_fill: Color::from_hex(0x0f1732),
            legend_stroke: Color::from_hex(0x2a3a66),
            tooltip_background: Color::from_hex(0x111827),
            tooltip_text: Color::from_hex(0xf9fafb),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_rgb(250, 250, 252),
            grid: Color::from_rgb(230, 230, 235),
            axis_line: Color::from_rgb(60, 60, 70),
            axis_label: Color::from_rgb(20, 20, 30),
            tick_label: Color::from_rgb(60, 60, 70),
            title: Color::from_rgb(20, 20, 30),
            bar: Color::from_rgb(32, 120, 200),
            value_label: Color::from_rgb(30, 60, 110),
            point_fill: Color::from_rgb(230, 150, 20),
            point_stroke: Color::from_rgb(250, 250, 252),
            line_stroke: Color::from_rgb(200, 90, 40),
            legend_fill: Color::from_rgb(240, 240, 245),
            legend_stroke: Color::from_rgb(200, 200, 210),
            tooltip_background: Color::from_hex(0x111827),
            tooltip_text: Color::from_hex(0xf9fafb),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Color::from_hex(0x000000),
            grid: Color::from_hex(0x222222),
            axis_line: Color::from_hex(0xffffff),
            axis_label: Color::from_hex(0xffffff),
            tick_label: Color::from_hex(0xcccccc),
            title: Color::from_hex(0xffffff),
            bar: Color::from_hex(0x00aaff),
            value_label: Color::from_hex(0xffffff),
            point_fill: Color::from_hex(0xffff00),
            point_stroke: Color::from_hex(0x000000),
            line_stroke: Color::from_hex(0xff8800),
            legend_fill: Color::from_hex(0x000000),
            legend_stroke: Color::from_hex(0xffffff),
            tooltip_background: Color::from_hex(0x222222),
            tooltip_text: Color::from_hex(0xffffff),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::dark()
}
