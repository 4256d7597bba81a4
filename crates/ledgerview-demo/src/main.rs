// File: crates/ledgerview-demo/src/main.rs
// Summary: Demo loads the company CSV once and writes each chart tab to SVG, PNG and JSON files.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, ValueEnum, ValueHint};
use ledgerview_core::theme;
use ledgerview_core::{svg, ChartKind, Coercion, CsvSource, LoadState, Scene, ViewShell, DEFAULT_DATA_PATH};
use ledgerview_render_skia::SkiaRenderer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render the company growth dashboard charts to files", long_about = None)]
struct Cli {
    /// CSV with Year, Revenue, Expenses, Profit, Employees columns
    #[arg(long, default_value = DEFAULT_DATA_PATH, value_hint = ValueHint::FilePath)]
    data: PathBuf,

    /// Which tab(s) to render
    #[arg(long, value_enum, default_value_t = ChartArg::All)]
    chart: ChartArg,

    /// Output directory
    #[arg(long, default_value = "target/out", value_hint = ValueHint::DirPath)]
    out: PathBuf,

    /// Output format(s)
    #[arg(long, value_enum, default_value_t = FormatArg::All)]
    format: FormatArg,

    /// Surface width in pixels (defaults per chart)
    #[arg(long)]
    width: Option<u32>,

    /// Surface height in pixels (defaults per chart)
    #[arg(long)]
    height: Option<u32>,

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

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ChartArg {
    Bar,
    Scatter,
    Multi,
    All,
}

impl ChartArg {
    fn kinds(self) -> Vec<ChartKind> {
        match self {
            ChartArg::Bar => vec![ChartKind::Bar],
            ChartArg::Scatter => vec![ChartKind::Scatter],
            ChartArg::Multi => vec![ChartKind::MultiSeries],
            ChartArg::All => ChartKind::ALL.to_vec(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Svg,
    Png,
    Json,
    All,
}

impl FormatArg {
    fn svg(self) -> bool { matches!(self, FormatArg::Svg | FormatArg::All) }
    fn png(self) -> bool { matches!(self, FormatArg::Png | FormatArg::All) }
    fn json(self) -> bool { matches!(self, FormatArg::Json | FormatArg::All) }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let theme = theme::find(&cli.theme);
    if !theme.name.eq_ignore_ascii_case(&cli.theme) {
        warn!(requested = %cli.theme, using = %theme.name, "unknown theme");
    }

    let coercion = if cli.strict { Coercion::Strict } else { Coercion::Lenient };
    let source = CsvSource::new(&cli.data).with_coercion(coercion);

    let mut shell = ViewShell::new(theme);
    shell.mount(&source);
    if shell.load_state() == LoadState::Failed {
        bail!("could not load {}", cli.data.display());
    }
    if shell.dataset().is_empty() {
        bail!("no rows in {}; nothing to render", cli.data.display());
    }
    info!(rows = shell.dataset().len(), path = %cli.data.display(), "dataset loaded");

    let renderer = SkiaRenderer::new();
    for kind in cli.chart.kinds() {
        shell.select_tab(kind);
        let (dw, dh) = kind.default_size();
        shell.resize(cli.width.unwrap_or(dw), cli.height.unwrap_or(dh));
        let scene = shell
            .scene()
            .with_context(|| format!("{kind} produced no scene"))?;
        write_outputs(scene, &renderer, &cli.out, cli.format)?;
    }
    Ok(())
}

fn write_outputs(scene: &Scene, renderer: &SkiaRenderer, dir: &Path, format: FormatArg) -> Result<()> {
    let stem = format!("chart_{}", scene.kind.slug());
    if format.svg() {
        let path = dir.join(format!("{stem}.svg"));
        svg::write_svg(scene, &path)?;
        info!(path = %path.display(), "wrote svg");
    }
    if format.png() {
        let path = dir.join(format!("{stem}.png"));
        renderer.write_png(scene, &path)?;
        info!(path = %path.display(), "wrote png");
    }
    if format.json() {
        let path = dir.join(format!("{stem}.json"));
        std::fs::create_dir_all(dir)?;
        let json = serde_json::to_string_pretty(scene)?;
        std::fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "wrote json");
    }
    Ok(())
}
