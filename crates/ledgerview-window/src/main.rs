// File: crates/ledgerview-window/src/main.rs
// Summary: Windowed dashboard: renders the active tab via Skia RGBA blit into a softbuffer surface.
// Notes:
// - The CSV is fetched once on a worker thread; the result comes back as a user event.
// - Keys 1/2/3 (or B/S/M) pick a tab, Tab cycles, Esc closes.

use std::io;
use std::num::NonZeroU32;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{ArgAction, Parser, ValueHint};
use ledgerview_core::geometry::Point;
use ledgerview_core::{theme, ChartKind, Coercion, CsvSource, DataSource, Dataset, HoverChange, LoadError, ViewShell};
use ledgerview_core::DEFAULT_DATA_PATH;
use ledgerview_render_skia::SkiaRenderer;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::EventLoopBuilder;
use winit::window::{Window, WindowBuilder};

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive company growth dashboard", long_about = None)]
struct Cli {
    /// CSV with Year, Revenue, Expenses, Profit, Employees columns
    #[arg(long, default_value = DEFAULT_DATA_PATH, value_hint = ValueHint::FilePath)]
    data: PathBuf,

    /// Theme preset: dark, light, high-contrast-dark
    #[arg(long, default_value = "dark")]
    theme: String,

    /// Fail on non-numeric cells or missing columns instead of reading NaN
    #[arg(long, action = ArgAction::SetTrue)]
    strict: bool,

    /// Debug-level logging
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

#[derive(Debug)]
enum AppEvent {
    Loaded(Result<Dataset, LoadError>),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let event_loop = EventLoopBuilder::<AppEvent>::with_user_event().build();
    let (w0, h0) = ChartKind::default().default_size();
    let window = WindowBuilder::new()
        .with_title(title(ChartKind::default()))
        .with_inner_size(LogicalSize::new(w0 as f64, h0 as f64))
        .build(&event_loop)?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let mut shell = ViewShell::new(theme::find(&cli.theme));
    let size = window.inner_size();
    shell.resize(size.width.max(1), size.height.max(1));

    // Single fetch, off the event loop thread.
    shell.begin_load();
    let coercion = if cli.strict { Coercion::Strict } else { Coercion::Lenient };
    let source = CsvSource::new(cli.data).with_coercion(coercion);
    let proxy = event_loop.create_proxy();
    std::thread::spawn(move || {
        info!(source = %source.describe(), "loading dataset");
        let result = source.fetch();
        if proxy.send_event(AppEvent::Loaded(result)).is_err() {
            debug!("event loop closed before the dataset arrived");
        }
    });

    let renderer = SkiaRenderer::new();

    event_loop.run(move |event, _, control_flow| {
        control_flow.set_wait();
        match event {
            Event::UserEvent(AppEvent::Loaded(result)) => {
                shell.complete_load(result);
                window.request_redraw();
            }
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => control_flow.set_exit(),
                WindowEvent::Resized(size) => {
                    shell.resize(size.width.max(1), size.height.max(1));
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput {
                    input: KeyboardInput { state: ElementState::Pressed, virtual_keycode: Some(key), .. },
                    ..
                } => {
                    if key == VirtualKeyCode::Escape {
                        control_flow.set_exit();
                    } else if let Some(kind) = tab_for_key(key, shell.active_tab()) {
                        shell.select_tab(kind);
                        window.set_title(&title(kind));
                        window.request_redraw();
                    }
                }
                WindowEvent::CursorMoved { position, .. } => {
                    if shell.pointer_moved(Point::new(position.x, position.y)) != HoverChange::None {
                        window.request_redraw();
                    }
                }
                WindowEvent::CursorLeft { .. } => {
                    if shell.pointer_left() != HoverChange::None {
                        window.request_redraw();
                    }
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                if let Err(err) = present(&window, &mut surface, &renderer, &shell) {
                    error!(error = %err, "present failed");
                }
            }
            _ => {}
        }
    })
}

fn title(kind: ChartKind) -> String {
    format!("Ledgerview: {}", kind.header())
}

/// Tab selected by `key`, given the active tab (Tab cycles).
fn tab_for_key(key: VirtualKeyCode, active: ChartKind) -> Option<ChartKind> {
    match key {
        VirtualKeyCode::Key1 | VirtualKeyCode::Numpad1 | VirtualKeyCode::B => Some(ChartKind::Bar),
        VirtualKeyCode::Key2 | VirtualKeyCode::Numpad2 | VirtualKeyCode::S => Some(ChartKind::Scatter),
        VirtualKeyCode::Key3 | VirtualKeyCode::Numpad3 | VirtualKeyCode::M => Some(ChartKind::MultiSeries),
        VirtualKeyCode::Tab => Some(active.next()),
        _ => None,
    }
}

fn present(
    window: &Window,
    surface: &mut softbuffer::Surface,
    renderer: &SkiaRenderer,
    shell: &ViewShell,
) -> Result<()> {
    let size = window.inner_size();
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        return Ok(());
    };
    surface.resize(w, h).map_err(|e| anyhow!("resize: {e}"))?;
    let mut frame = surface.buffer_mut().map_err(|e| anyhow!("frame: {e}"))?;
    let (w, h) = (w.get() as usize, h.get() as usize);

    match shell.scene() {
        Some(scene) => {
            let (rgba, fw, fh, stride) = renderer.render_rgba8(scene, Some(shell.tooltip()))?;
            let (cols, rows) = (w.min(fw as usize), h.min(fh as usize));
            frame.fill(pack(shell.theme().background.r, shell.theme().background.g, shell.theme().background.b));
            for y in 0..rows {
                let src = &rgba[y * stride..y * stride + cols * 4];
                for (x, px) in src.chunks_exact(4).enumerate() {
                    frame[y * w + x] = pack(px[0], px[1], px[2]);
                }
            }
        }
        None => {
            // Nothing loaded yet (or the load failed): plain background.
            let bg = shell.theme().background;
            frame.fill(pack(bg.r, bg.g, bg.b));
        }
    }
    frame.present().map_err(|e| anyhow!("present: {e}"))?;
    Ok(())
}

// softbuffer pixels are 0RGB.
#[inline]
fn pack(r: u8, g: u8, b: u8) -> u32 {
    (r as u32) << 16 | (g as u32) << 8 | b as u32
}
