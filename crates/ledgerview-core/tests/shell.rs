// File: crates/ledgerview-core/tests/shell.rs
// Purpose: View shell lifecycle: single load, tab switching, resize and scatter hover.

use std::cell::Cell;

use approx::assert_relative_eq;
use ledgerview_core::geometry::Point;
use ledgerview_core::{ChartKind, DataSource, Dataset, HoverChange, LoadError, LoadState, Row, Theme, ViewShell};

struct CountingSource {
    fetches: Cell<usize>,
    rows: Vec<Row>,
}

impl CountingSource {
    fn new(rows: Vec<Row>) -> Self {
        Self { fetches: Cell::new(0), rows }
    }
}

impl DataSource for CountingSource {
    fn fetch(&self) -> Result<Dataset, LoadError> {
        self.fetches.set(self.fetches.get() + 1);
        Ok(Dataset::new(self.rows.clone()))
    }
    fn describe(&self) -> String {
        "counting".to_string()
    }
}

struct MissingSource;

impl DataSource for MissingSource {
    fn fetch(&self) -> Result<Dataset, LoadError> {
        Err(LoadError::NotFound("nowhere.csv".into()))
    }
    fn describe(&self) -> String {
        "missing".to_string()
    }
}

fn two_years() -> Vec<Row> {
    vec![
        Row::new(2020.0, 100.0, 80.0, 20.0, 50.0),
        Row::new(2021.0, 150.0, 90.0, 60.0, 60.0),
    ]
}

#[test]
fn starts_on_bar_with_nothing_drawn() {
    let shell = ViewShell::default();
    assert_eq!(shell.active_tab(), ChartKind::Bar);
    assert_eq!(shell.load_state(), LoadState::Idle);
    assert!(shell.dataset().is_empty());
    assert!(shell.scene().is_none());
}

#[test]
fn mount_loads_once_across_tab_switches() {
    let source = CountingSource::new(two_years());
    let mut shell = ViewShell::new(Theme::dark());
    assert!(shell.mount(&source));
    assert!(!shell.mount(&source));
    assert_eq!(shell.load_state(), LoadState::Loaded);
    assert_eq!(shell.scene().map(|s| s.kind), Some(ChartKind::Bar));

    for kind in [ChartKind::Scatter, ChartKind::MultiSeries, ChartKind::Bar, ChartKind::Scatter] {
        shell.select_tab(kind);
        assert_eq!(shell.active_tab(), kind);
        assert_eq!(shell.scene().map(|s| s.kind), Some(kind));
        assert_eq!(shell.dataset().len(), 2);
    }
    assert_eq!(source.fetches.get(), 1);
}

#[test]
fn tab_switch_mounts_a_fresh_surface() {
    let mut shell = ViewShell::default();
    shell.mount(&CountingSource::new(two_years()));
    shell.resize(800, 400);
    shell.resize(820, 410);
    assert_eq!(shell.surface().passes(), 3);

    shell.select_tab(ChartKind::MultiSeries);
    assert_eq!(shell.surface().passes(), 1);

    // reselecting the active tab is a no-op
    shell.select_tab(ChartKind::MultiSeries);
    assert_eq!(shell.surface().passes(), 1);
}

#[test]
fn failed_load_keeps_empty_dataset() {
    let mut shell = ViewShell::default();
    assert!(shell.mount(&MissingSource));
    assert_eq!(shell.load_state(), LoadState::Failed);
    assert!(shell.dataset().is_empty());
    assert!(shell.scene().is_none());

    shell.select_tab(ChartKind::Scatter);
    assert!(shell.scene().is_none());
    assert!(!shell.mount(&CountingSource::new(two_years())), "no retry after a failure");
}

#[test]
fn background_load_completes_later() {
    let mut shell = ViewShell::default();
    assert!(shell.begin_load());
    assert!(!shell.begin_load());
    assert_eq!(shell.load_state(), LoadState::Pending);
    shell.select_tab(ChartKind::Scatter);
    assert!(shell.scene().is_none());

    shell.complete_load(Ok(Dataset::new(two_years())));
    assert_eq!(shell.load_state(), LoadState::Loaded);
    assert_eq!(shell.scene().map(|s| s.points.len()), Some(2));
}

#[test]
fn resize_redraws_at_new_size() {
    let mut shell = ViewShell::default();
    shell.mount(&CountingSource::new(two_years()));
    assert_eq!(shell.size(), (900, 480));

    shell.resize(640, 360);
    let scene = shell.scene().expect("scene");
    assert_eq!((scene.width, scene.height), (640, 360));

    shell.select_tab(ChartKind::MultiSeries);
    assert_eq!(shell.size(), (640, 360), "viewport outlives the tab");
}

#[test]
fn multi_series_uses_its_own_default_height() {
    let mut shell = ViewShell::default();
    shell.mount(&CountingSource::new(two_years()));
    shell.select_tab(ChartKind::MultiSeries);
    assert_eq!(shell.size(), (900, 500));
}

#[test]
fn scatter_hover_shows_and_hides_tooltip() {
    let mut shell = ViewShell::default();
    shell.mount(&CountingSource::new(two_years()));
    shell.select_tab(ChartKind::Scatter);

    // first row sits at the bottom-left corner of the plot
    let over = Point::new(73.0, 415.0);
    assert_eq!(shell.pointer_moved(over), HoverChange::Entered(0));
    let tip = shell.tooltip();
    assert!(tip.visible);
    assert_eq!(tip.lines, ["Year: 2020", "Revenue: 100.0 M", "Expenses: 80.0 M"]);
    assert_relative_eq!(tip.anchor.x, 85.0);
    assert_relative_eq!(tip.anchor.y, 387.0);

    assert_eq!(shell.pointer_moved(Point::new(74.0, 416.0)), HoverChange::Moved(0));
    assert_relative_eq!(shell.tooltip().anchor.x, 86.0);

    assert_eq!(shell.pointer_moved(Point::new(876.0, 50.0)), HoverChange::Entered(1));
    assert_eq!(shell.tooltip().lines[0], "Year: 2021");

    assert_eq!(shell.pointer_moved(Point::new(500.0, 200.0)), HoverChange::Left(1));
    assert!(!shell.tooltip().visible);
    assert_eq!(shell.tooltip().lines[0], "Year: 2021", "text survives hiding");

    assert_eq!(shell.pointer_moved(Point::new(500.0, 200.0)), HoverChange::None);
}

#[test]
fn pointer_leaving_the_surface_hides_tooltip() {
    let mut shell = ViewShell::default();
    shell.mount(&CountingSource::new(two_years()));
    shell.select_tab(ChartKind::Scatter);
    shell.pointer_moved(Point::new(72.0, 416.0));
    assert_eq!(shell.pointer_left(), HoverChange::Left(0));
    assert!(!shell.tooltip().visible);
    assert_eq!(shell.pointer_left(), HoverChange::None);
}

#[test]
fn other_tabs_ignore_the_pointer() {
    let mut shell = ViewShell::default();
    shell.mount(&CountingSource::new(two_years()));
    assert_eq!(shell.pointer_moved(Point::new(72.0, 416.0)), HoverChange::None);

    // multi-series markers are not interactive
    shell.select_tab(ChartKind::MultiSeries);
    let marker = shell.scene().map(|s| s.points[0].center).expect("marker");
    assert_eq!(shell.pointer_moved(marker), HoverChange::None);
    assert!(!shell.tooltip().visible);
}

#[test]
fn replacing_the_dataset_redraws_and_resets_hover() {
    let mut shell = ViewShell::default();
    shell.mount(&CountingSource::new(two_years()));
    shell.select_tab(ChartKind::Scatter);
    shell.pointer_moved(Point::new(72.0, 416.0));
    assert!(shell.tooltip().visible);

    let mut rows = two_years();
    rows.push(Row::new(2022.0, 170.0, 95.0, 75.0, 65.0));
    shell.replace_dataset(Dataset::new(rows));
    assert_eq!(shell.scene().map(|s| s.points.len()), Some(3));
    assert!(!shell.tooltip().visible);
}
