// File: crates/ledgerview-render-skia/src/paint.rs
// Summary: Paint a scene onto a Skia canvas in back-to-front order, plus the hover tooltip overlay.

use skia_safe as skia;

use ledgerview_core::axis::Axis;
use ledgerview_core::geometry::{clamp, RectF, Segment};
use ledgerview_core::scene::{LineMark, PathCmd, Scene, Swatch, TextMark};
use ledgerview_core::theme::{Color, Theme};
use ledgerview_core::tooltip::Tooltip;

use crate::text::TextShaper;

const TOOLTIP_FONT_SIZE: f32 = 12.0;
const TOOLTIP_PADDING: f32 = 8.0;
const TOOLTIP_RADIUS: f32 = 6.0;

fn sk(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn rect(r: &RectF) -> skia::Rect {
    skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
}

fn fill_paint(c: Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(sk(c));
    paint
}

fn stroke_paint(c: Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(sk(c));
    paint
}

fn draw_segment(canvas: &skia::Canvas, seg: &Segment, paint: &skia::Paint) {
    canvas.draw_line(
        (seg.from.x as f32, seg.from.y as f32),
        (seg.to.x as f32, seg.to.y as f32),
        paint,
    );
}

fn draw_text(canvas: &skia::Canvas, shaper: &TextShaper, mark: &TextMark) {
    shaper.draw_mark(canvas, mark, sk(mark.style.color));
}

pub(crate) fn scene(canvas: &skia::Canvas, shaper: &TextShaper, scene: &Scene) {
    let theme = &scene.theme;
    canvas.clear(sk(theme.background));

    let grid = stroke_paint(theme.grid, 1.0);
    for seg in &scene.grid {
        draw_segment(canvas, seg, &grid);
    }

    for bar in &scene.bars {
        canvas.draw_rect(rect(&bar.rect), &fill_paint(bar.fill));
    }

    for line in &scene.lines {
        draw_line(canvas, line);
    }

    for p in &scene.points {
        let center = (p.center.x as f32, p.center.y as f32);
        canvas.draw_circle(center, p.radius as f32, &fill_paint(p.fill));
        if p.stroke_width > 0.0 {
            canvas.draw_circle(center, p.radius as f32, &stroke_paint(p.stroke, p.stroke_width as f32));
        }
    }

    for label in &scene.value_labels {
        draw_text(canvas, shaper, label);
    }

    for axis in &scene.axes {
        draw_axis(canvas, shaper, axis, theme.axis_line);
    }

    for caption in &scene.captions {
        draw_text(canvas, shaper, caption);
    }

    if let Some(legend) = &scene.legend {
        let frame = rect(&legend.frame);
        canvas.draw_rect(frame, &fill_paint(legend.fill));
        canvas.draw_rect(frame, &stroke_paint(legend.stroke, 1.0));
        for entry in &legend.entries {
            match &entry.swatch {
                Swatch::Fill(r, c) => {
                    canvas.draw_rect(rect(r), &fill_paint(*c));
                }
                Swatch::Stroke(seg, c, w) => draw_segment(canvas, seg, &stroke_paint(*c, *w as f32)),
            }
            draw_text(canvas, shaper, &entry.label);
        }
    }

    if let Some(title) = &scene.title {
        draw_text(canvas, shaper, title);
    }
}

fn draw_line(canvas: &skia::Canvas, line: &LineMark) {
    if line.path.is_empty() {
        return;
    }
    let mut path = skia::Path::new();
    for cmd in &line.path {
        match cmd {
            PathCmd::MoveTo(p) => {
                path.move_to((p.x as f32, p.y as f32));
            }
            PathCmd::LineTo(p) => {
                path.line_to((p.x as f32, p.y as f32));
            }
            PathCmd::CubicTo(c1, c2, p) => {
                path.cubic_to((c1.x as f32, c1.y as f32), (c2.x as f32, c2.y as f32), (p.x as f32, p.y as f32));
            }
        }
    }
    let mut stroke = stroke_paint(line.stroke, line.stroke_width as f32);
    stroke.set_stroke_join(skia::paint::Join::Round);
    stroke.set_stroke_cap(skia::paint::Cap::Round);
    canvas.draw_path(&path, &stroke);
}

fn draw_axis(canvas: &skia::Canvas, shaper: &TextShaper, axis: &Axis, color: Color) {
    let paint = stroke_paint(color, 1.0);
    for pair in axis.domain.windows(2) {
        draw_segment(canvas, &Segment::new(pair[0], pair[1]), &paint);
    }
    for tick in &axis.ticks {
        draw_segment(canvas, &tick.mark, &paint);
        if let Some(label) = &tick.label {
            draw_text(canvas, shaper, label);
        }
    }
}

/// Floating label box; kept inside the surface when the pointer nears an edge.
pub(crate) fn tooltip(canvas: &skia::Canvas, shaper: &TextShaper, tip: &Tooltip, theme: &Theme, bounds: (f32, f32)) {
    if tip.lines.is_empty() {
        return;
    }
    let line_h = shaper.line_height(TOOLTIP_FONT_SIZE);
    let text_w = tip
        .lines
        .iter()
        .map(|l| shaper.measure_width(l, TOOLTIP_FONT_SIZE, false))
        .fold(0.0f32, f32::max);
    let box_w = text_w + TOOLTIP_PADDING * 2.0;
    let box_h = line_h * tip.lines.len() as f32 + TOOLTIP_PADDING * 2.0;

    let x = clamp(tip.anchor.x as f32, 0.0, (bounds.0 - box_w).max(0.0));
    let y = clamp(tip.anchor.y as f32, 0.0, (bounds.1 - box_h).max(0.0));

    let bg = skia::Rect::from_xywh(x, y, box_w, box_h);
    let rrect = skia::RRect::new_rect_xy(bg, TOOLTIP_RADIUS, TOOLTIP_RADIUS);
    canvas.draw_rrect(rrect, &fill_paint(theme.tooltip_background));

    for (i, line) in tip.lines.iter().enumerate() {
        let ty = y + TOOLTIP_PADDING + line_h * i as f32;
        shaper.draw_top_left(canvas, line, x + TOOLTIP_PADDING, ty, TOOLTIP_FONT_SIZE, sk(theme.tooltip_text));
    }
}
