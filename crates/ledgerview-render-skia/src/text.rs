// File: crates/ledgerview-render-skia/src/text.rs
// Summary: Text shaping with Skia textlayout; places scene text marks by baseline and anchor.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

use ledgerview_core::scene::{Anchor, TextMark};

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, bold: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        if bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, bold: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color, bold));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, bold: bool) -> f32 {
        self.layout(text, size, skia::Color::TRANSPARENT, bold).longest_line()
    }

    /// Line height for `size`, used to stack multi-line blocks.
    pub fn line_height(&self, size: f32) -> f32 {
        self.layout("Mg", size, skia::Color::TRANSPARENT, false).height()
    }

    /// Draw `text` with its top-left corner at `(x, y)`.
    pub fn draw_top_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        self.layout(text, size, color, false).paint(canvas, (x, y));
    }

    /// Draw a scene text mark: baseline at `mark.at`, shifted by its anchor, rotated around `mark.at`.
    pub fn draw_mark(&self, canvas: &skia::Canvas, mark: &TextMark, color: skia::Color) {
        if mark.text.is_empty() {
            return;
        }
        let p = self.layout(&mark.text, mark.style.size, color, mark.style.bold);
        let width = p.longest_line();
        let dx = match mark.anchor {
            Anchor::Start => 0.0,
            Anchor::Middle => -width / 2.0,
            Anchor::End => -width,
        };
        let dy = -p.alphabetic_baseline();

        canvas.save();
        canvas.translate((mark.at.x as f32, mark.at.y as f32));
        if mark.rotation != 0.0 {
            canvas.rotate(mark.rotation as f32, None);
        }
        p.paint(canvas, (dx, dy));
        canvas.restore();
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
