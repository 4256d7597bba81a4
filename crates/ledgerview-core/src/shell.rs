// File: crates/ledgerview-core/src/shell.rs
// Summary: View shell: session state (active tab, dataset) that drives the active chart variant.
// Notes:
// - The dataset is loaded at most once per shell; switching tabs never re-fetches.
// - Load failures are logged and leave the empty dataset in place.
// - Each tab switch mounts a fresh surface; the previous variant's scene is dropped.

use tracing::{debug, error, info};

use crate::chart::{ChartKind, ChartRenderer};
use crate::data::{DataSource, Dataset};
use crate::error::LoadError;
use crate::geometry::Point;
use crate::scene::{Scene, Surface};
use crate::theme::Theme;
use crate::tooltip::{HoverChange, HoverTracker, Tooltip};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Pending,
    Loaded,
    Failed,
}

pub struct ViewShell {
    tab: ChartKind,
    dataset: Dataset,
    load_state: LoadState,
    theme: Theme,
    viewport: Option<(u32, u32)>,
    renderer: Box<dyn ChartRenderer>,
    surface: Surface,
    hover: HoverTracker,
}

impl ViewShell {
    pub fn new(theme: Theme) -> Self {
        let tab = ChartKind::default();
        Self {
            tab,
            dataset: Dataset::empty(),
            load_state: LoadState::Idle,
            theme,
            viewport: None,
            renderer: tab.renderer(theme),
            surface: Surface::new(),
            hover: HoverTracker::new(),
        }
    }

    /// Use a fixed viewport instead of each variant's default size.
    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport = Some((width, height));
        self
    }

    /// Load the dataset synchronously. Only the first call fetches; returns whether it did.
    pub fn mount(&mut self, source: &dyn DataSource) -> bool {
        if !self.begin_load() {
            debug!("mount ignored: dataset already requested");
            return false;
        }
        info!(source = %source.describe(), "loading dataset");
        let result = source.fetch();
        self.complete_load(result);
        true
    }

    /// Mark the load as started. Returns `false` when a load was already started.
    pub fn begin_load(&mut self) -> bool {
        if self.load_state != LoadState::Idle {
            return false;
        }
        self.load_state = LoadState::Pending;
        true
    }

    /// Store the outcome of a load started with [`ViewShell::begin_load`].
    pub fn complete_load(&mut self, result: Result<Dataset, LoadError>) {
        match result {
            Ok(dataset) => {
                info!(rows = dataset.len(), "dataset ready");
                self.load_state = LoadState::Loaded;
                self.replace_dataset(dataset);
            }
            Err(err) => {
                error!(error = %err, "CSV load failed");
                self.load_state = LoadState::Failed;
            }
        }
    }

    /// Swap in a new dataset wholesale and redraw the active variant.
    pub fn replace_dataset(&mut self, dataset: Dataset) {
        self.dataset = dataset;
        self.render();
    }

    /// Activate `kind`; mounts a fresh surface and renders the held dataset into it.
    pub fn select_tab(&mut self, kind: ChartKind) {
        if kind == self.tab {
            return;
        }
        debug!(from = %self.tab, to = %kind, "switching tab");
        self.tab = kind;
        self.renderer = kind.renderer(self.theme);
        self.surface = Surface::new();
        self.render();
    }

    /// Viewport change; the active variant is redrawn at the new size.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.viewport == Some((width, height)) {
            return;
        }
        self.viewport = Some((width, height));
        self.render();
    }

    /// Surface size for the active variant.
    pub fn size(&self) -> (u32, u32) {
        self.viewport.unwrap_or_else(|| self.tab.default_size())
    }

    fn render(&mut self) {
        let (width, height) = self.size();
        self.hover.reset();
        if self.surface.render(self.renderer.as_ref(), &self.dataset, width, height) {
            debug!(tab = %self.tab, width, height, passes = self.surface.passes(), "rendered");
        }
    }

    /// Pointer moved over the surface. Only the scatter variant reacts.
    pub fn pointer_moved(&mut self, pos: Point) -> HoverChange {
        if self.tab != ChartKind::Scatter {
            return HoverChange::None;
        }
        match self.surface.scene() {
            Some(scene) => self.hover.pointer_moved(scene, pos),
            None => HoverChange::None,
        }
    }

    /// Pointer left the surface.
    pub fn pointer_left(&mut self) -> HoverChange {
        self.hover.pointer_left()
    }

    pub fn active_tab(&self) -> ChartKind { self.tab }
    pub fn dataset(&self) -> &Dataset { &self.dataset }
    pub fn load_state(&self) -> LoadState { self.load_state }
    pub fn theme(&self) -> Theme { self.theme }
    pub fn scene(&self) -> Option<&Scene> { self.surface.scene() }
    pub fn surface(&self) -> &Surface { &self.surface }
    pub fn tooltip(&self) -> &Tooltip { self.hover.tooltip() }
}

impl Default for ViewShell {
    fn default() -> Self {
        Self::new(Theme::dark())
    }
}
