// File: crates/ledgerview-core/src/lib.rs
// Summary: Core library entry point; exports data loading, chart scene construction and the view shell.

pub mod axis;
pub mod bar;
pub mod chart;
pub mod curve;
pub mod data;
pub mod error;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod multi_series;
pub mod scale;
pub mod scatter;
pub mod scene;
pub mod shell;
pub mod svg;
pub mod theme;
pub mod tooltip;
pub mod types;

pub use bar::BarChart;
pub use chart::{build_scene, ChartKind, ChartOptions, ChartRenderer, RenderOptions};
pub use data::{load, Coercion, CsvSource, DataSource, Dataset, Field, Row, DEFAULT_DATA_PATH};
pub use error::LoadError;
pub use multi_series::MultiSeriesChart;
pub use scale::{BandScale, LinearScale};
pub use scatter::ScatterPlot;
pub use scene::{Scene, Surface};
pub use shell::{LoadState, ViewShell};
pub use theme::Theme;
pub use tooltip::{HoverChange, HoverTracker, Tooltip};
