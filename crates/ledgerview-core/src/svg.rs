// File: crates/ledgerview-core/src/svg.rs
// Summary: Serialize a scene as standalone SVG markup.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};

use crate::axis::Axis;
use crate::scene::{Anchor, PathCmd, Scene, Swatch, TextMark};
use crate::theme::Color;

/// Render `scene` to an SVG document.
pub fn to_svg(scene: &Scene) -> String {
    let theme = &scene.theme;
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"sans-serif\">",
        w = scene.width,
        h = scene.height,
    );
    let _ = writeln!(svg, "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>", theme.background.to_hex());

    let _ = writeln!(svg, "  <g class=\"grid\" stroke=\"{}\">", theme.grid.to_hex());
    for seg in &scene.grid {
        let _ = writeln!(
            svg,
            "    <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"/>",
            num(seg.from.x), num(seg.from.y), num(seg.to.x), num(seg.to.y)
        );
    }
    let _ = writeln!(svg, "  </g>");

    for bar in &scene.bars {
        let _ = writeln!(
            svg,
            "  <rect class=\"bar\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{}/>",
            num(bar.rect.left), num(bar.rect.top), num(bar.rect.width()), num(bar.rect.height()), fill(bar.fill)
        );
    }

    for line in &scene.lines {
        let _ = writeln!(
            svg,
            "  <path class=\"line\" d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
            path_data(&line.path), line.stroke.to_hex(), num(line.stroke_width)
        );
    }

    for p in &scene.points {
        let _ = writeln!(
            svg,
            "  <circle class=\"dot\" cx=\"{}\" cy=\"{}\" r=\"{}\"{} stroke=\"{}\" stroke-width=\"{}\"/>",
            num(p.center.x), num(p.center.y), num(p.radius), fill(p.fill), p.stroke.to_hex(), num(p.stroke_width)
        );
    }

    for label in &scene.value_labels {
        write_text(&mut svg, "val", label);
    }

    for axis in &scene.axes {
        write_axis(&mut svg, axis, theme.axis_line);
    }

    for caption in &scene.captions {
        write_text(&mut svg, "axis-label", caption);
    }

    if let Some(legend) = &scene.legend {
        let _ = writeln!(svg, "  <g class=\"legend\">");
        let _ = writeln!(
            svg,
            "    <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{} stroke=\"{}\"/>",
            num(legend.frame.left), num(legend.frame.top), num(legend.frame.width()), num(legend.frame.height()),
            fill(legend.fill), legend.stroke.to_hex()
        );
        for entry in &legend.entries {
            match &entry.swatch {
                Swatch::Fill(r, c) => {
                    let _ = writeln!(
                        svg,
                        "    <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{}/>",
                        num(r.left), num(r.top), num(r.width()), num(r.height()), fill(*c)
                    );
                }
                Swatch::Stroke(seg, c, w) => {
                    let _ = writeln!(
                        svg,
                        "    <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
                        num(seg.from.x), num(seg.from.y), num(seg.to.x), num(seg.to.y), c.to_hex(), num(*w)
                    );
                }
            }
            if !entry.label.text.is_empty() {
                svg.push_str("  ");
                write_text(&mut svg, "legend-label", &entry.label);
            }
        }
        let _ = writeln!(svg, "  </g>");
    }

    if let Some(title) = &scene.title {
        write_text(&mut svg, "title-text", title);
    }

    svg.push_str("</svg>\n");
    svg
}

/// Write `scene` as SVG to `path`, creating parent directories.
pub fn write_svg(scene: &Scene, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, to_svg(scene)).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// SVG path data for a list of commands.
pub fn path_data(cmds: &[PathCmd]) -> String {
    let mut d = String::new();
    for cmd in cmds {
        let _ = match cmd {
            PathCmd::MoveTo(p) => write!(d, "M{},{}", num(p.x), num(p.y)),
            PathCmd::LineTo(p) => write!(d, "L{},{}", num(p.x), num(p.y)),
            PathCmd::CubicTo(c1, c2, p) => write!(
                d,
                "C{},{},{},{},{},{}",
                num(c1.x), num(c1.y), num(c2.x), num(c2.y), num(p.x), num(p.y)
            ),
        };
    }
    d
}

fn write_axis(svg: &mut String, axis: &Axis, stroke: Color) {
    let _ = writeln!(svg, "  <g class=\"axis\" stroke=\"{}\">", stroke.to_hex());
    let points = axis
        .domain
        .iter()
        .map(|p| format!("{},{}", num(p.x), num(p.y)))
        .collect::<Vec<_>>()
        .join(" ");
    let _ = writeln!(svg, "    <polyline class=\"domain\" points=\"{points}\" fill=\"none\"/>");
    for tick in &axis.ticks {
        let _ = writeln!(
            svg,
            "    <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"/>",
            num(tick.mark.from.x), num(tick.mark.from.y), num(tick.mark.to.x), num(tick.mark.to.y)
        );
        if let Some(label) = &tick.label {
            svg.push_str("  ");
            write_text(svg, "tick", label);
        }
    }
    let _ = writeln!(svg, "  </g>");
}

fn write_text(svg: &mut String, class: &str, text: &TextMark) {
    let anchor = match text.anchor {
        Anchor::Start => "start",
        Anchor::Middle => "middle",
        Anchor::End => "end",
    };
    let weight = if text.style.bold { " font-weight=\"700\"" } else { "" };
    let transform = if text.rotation != 0.0 {
        format!(" transform=\"rotate({} {} {})\"", num(text.rotation), num(text.at.x), num(text.at.y))
    } else {
        String::new()
    };
    let _ = writeln!(
        svg,
        "  <text class=\"{class}\" x=\"{}\" y=\"{}\" text-anchor=\"{anchor}\" font-size=\"{}\"{weight}{}{transform} stroke=\"none\">{}</text>",
        num(text.at.x),
        num(text.at.y),
        num(text.style.size as f64),
        fill(text.style.color),
        escape(&text.text),
    );
}

fn fill(c: Color) -> String {
    if c.a == 255 {
        format!(" fill=\"{}\"", c.to_hex())
    } else {
        format!(" fill=\"{}\" fill-opacity=\"{}\"", c.to_hex(), num(c.opacity()))
    }
}

/// Compact number: at most two decimals, no trailing zeros.
fn num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
