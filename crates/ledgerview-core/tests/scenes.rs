// File: crates/ledgerview-core/tests/scenes.rs
// Purpose: Scene geometry for the three chart variants on small hand-checked datasets.

use approx::assert_relative_eq;
use ledgerview_core::scene::PathCmd;
use ledgerview_core::{
    build_scene, BarChart, ChartKind, ChartOptions, ChartRenderer, Dataset, MultiSeriesChart, RenderOptions, Row,
    ScatterPlot, Surface,
};

fn two_years() -> Dataset {
    Dataset::new(vec![
        Row::new(2020.0, 100.0, 80.0, 20.0, 50.0),
        Row::new(2021.0, 150.0, 90.0, 60.0, 60.0),
    ])
}

fn labels(axis: &ledgerview_core::axis::Axis) -> Vec<String> {
    axis.labels().map(str::to_owned).collect()
}

#[test]
fn bar_heights_are_proportional_to_revenue() {
    let scene = BarChart::default().build_scene(&two_years(), 900, 480).expect("scene");
    assert_eq!(scene.kind, ChartKind::Bar);
    assert_eq!(scene.bars.len(), 2);

    // y domain nices from [0, 150] to [0, 160] over the 366px plot height
    let (a, b) = (scene.bars[0].rect, scene.bars[1].rect);
    assert_relative_eq!(a.height(), 100.0 / 160.0 * 366.0, epsilon = 1e-9);
    assert_relative_eq!(b.height(), 150.0 / 160.0 * 366.0, epsilon = 1e-9);
    assert_relative_eq!(b.height() / a.height(), 1.5, epsilon = 1e-9);

    // every bar sits on the zero baseline
    for bar in &scene.bars {
        assert_relative_eq!(bar.rect.bottom, 416.0, epsilon = 1e-9);
    }
    assert!(a.left < b.left, "bars follow row order");
    assert_relative_eq!(a.width(), b.width());
}

#[test]
fn bar_band_layout_matches_padding() {
    let scene = BarChart::default().build_scene(&two_years(), 900, 480).expect("scene");
    let step = 804.0 / 2.2;
    let first = 72.0 + (804.0 - step * 1.8) / 2.0;
    assert_relative_eq!(scene.bars[0].rect.left, first, epsilon = 1e-9);
    assert_relative_eq!(scene.bars[1].rect.left, first + step, epsilon = 1e-9);
    assert_relative_eq!(scene.bars[0].rect.width(), step * 0.8, epsilon = 1e-9);
}

#[test]
fn bar_scene_labels_and_text() {
    let scene = BarChart::default().build_scene(&two_years(), 900, 480).expect("scene");
    let texts: Vec<&str> = scene.value_labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, ["100 M", "150 M"]);
    assert_relative_eq!(scene.value_labels[0].at.y, scene.bars[0].rect.top - 6.0);

    assert_eq!(labels(&scene.axes[0]), ["2020", "2021"]);
    assert_eq!(
        labels(&scene.axes[1]),
        ["0 M", "20 M", "40 M", "60 M", "80 M", "100 M", "120 M", "140 M", "160 M"]
    );
    assert_eq!(scene.grid.len(), 9);
    assert_eq!(scene.title.as_ref().map(|t| t.text.as_str()), Some("Company Revenue by Year"));
    let captions: Vec<&str> = scene.captions.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(captions, ["Year", "Revenue (Millions)"]);
    assert_eq!(scene.captions[1].rotation, -90.0);
}

#[test]
fn multi_series_line_follows_profit() {
    let scene = MultiSeriesChart::default().build_scene(&two_years(), 900, 500).expect("scene");
    assert_eq!(scene.bars.len(), 2);
    assert_eq!(scene.lines.len(), 1);
    assert_eq!(scene.points.len(), 2);

    // shared domain [0, 160]; plot spans y 56..436
    let line = &scene.lines[0];
    assert_eq!(line.vertices.len(), 2);
    assert_relative_eq!(line.vertices[0].y, 436.0 - 20.0 / 160.0 * 380.0, epsilon = 1e-9);
    assert_relative_eq!(line.vertices[1].y, 436.0 - 60.0 / 160.0 * 380.0, epsilon = 1e-9);

    // markers sit on the band centres
    for (bar, vertex) in scene.bars.iter().zip(&line.vertices) {
        assert_relative_eq!(vertex.x, bar.rect.left + bar.rect.width() / 2.0, epsilon = 1e-9);
    }
    // two vertices: straight segment
    assert!(matches!(line.path.as_slice(), [PathCmd::MoveTo(_), PathCmd::LineTo(_)]));
    assert!(scene.legend.is_some());
    assert!(scene.value_labels.is_empty());
}

#[test]
fn multi_series_shares_scale_with_profit_above_revenue() {
    let data = Dataset::new(vec![
        Row::new(2020.0, 10.0, 5.0, 40.0, 1.0),
        Row::new(2021.0, 20.0, 5.0, 45.0, 1.0),
    ]);
    let scene = MultiSeriesChart::default().build_scene(&data, 900, 500).expect("scene");
    // domain nices to [0, 45]: the peak profit touches the top of the plot
    let line = &scene.lines[0];
    assert_relative_eq!(line.vertices[1].y, scene.plot.top, epsilon = 1e-9);
    for vertex in &line.vertices {
        assert!(vertex.y >= scene.plot.top - 1e-9);
    }
    for bar in &scene.bars {
        assert!(bar.rect.top > line.vertices[1].y);
    }
}

#[test]
fn scatter_points_span_the_niced_extents() {
    let scene = ScatterPlot::default().build_scene(&two_years(), 900, 480).expect("scene");
    assert_eq!(scene.points.len(), 2);
    let (p0, p1) = (scene.points[0].center, scene.points[1].center);
    assert_relative_eq!(p0.x, 72.0, epsilon = 1e-9);
    assert_relative_eq!(p0.y, 416.0, epsilon = 1e-9);
    assert_relative_eq!(p1.x, 876.0, epsilon = 1e-9);
    assert_relative_eq!(p1.y, 50.0, epsilon = 1e-9);
    assert_eq!(scene.points[1].datum.year, 2021.0);
    assert!(scene.bars.is_empty() && scene.lines.is_empty());
}

#[test]
fn scatter_single_row_lands_mid_plot() {
    let data = Dataset::new(vec![Row::new(2020.0, 100.0, 80.0, 20.0, 50.0)]);
    let scene = ScatterPlot::default().build_scene(&data, 900, 480).expect("scene");
    let p = scene.points[0].center;
    assert_relative_eq!(p.x, (72.0 + 876.0) / 2.0, epsilon = 1e-9);
    assert_relative_eq!(p.y, (50.0 + 416.0) / 2.0, epsilon = 1e-9);
}

#[test]
fn empty_dataset_draws_nothing() {
    let empty = Dataset::empty();
    for kind in ChartKind::ALL {
        assert!(build_scene(kind, &empty, &RenderOptions::for_kind(kind)).is_none(), "{kind}");
    }

    let mut surface = Surface::new();
    assert!(!surface.render(&BarChart::default(), &empty, 900, 480));
    assert!(surface.scene().is_none());
    assert_eq!(surface.passes(), 0);
}

#[test]
fn nan_revenue_drops_only_that_bar() {
    let data = Dataset::new(vec![
        Row::new(2020.0, 100.0, 80.0, 20.0, 50.0),
        Row::new(2021.0, f64::NAN, 90.0, 60.0, 60.0),
        Row::new(2022.0, 120.0, 95.0, 25.0, 70.0),
    ]);
    let scene = BarChart::default().build_scene(&data, 900, 480).expect("scene");
    let rows: Vec<usize> = scene.bars.iter().map(|b| b.row).collect();
    assert_eq!(rows, [0, 2]);
    assert_eq!(labels(&scene.axes[0]), ["2020", "2021", "2022"]);

    let multi = MultiSeriesChart::default().build_scene(&data, 900, 500).expect("scene");
    assert_eq!(multi.bars.len(), 2);
    assert_eq!(multi.lines[0].vertices.len(), 3);
}

#[test]
fn nan_profit_splits_the_line() {
    let data = Dataset::new(vec![
        Row::new(2019.0, 90.0, 70.0, 10.0, 40.0),
        Row::new(2020.0, 100.0, 80.0, 20.0, 50.0),
        Row::new(2021.0, 150.0, 90.0, f64::NAN, 60.0),
        Row::new(2022.0, 160.0, 95.0, 65.0, 70.0),
        Row::new(2023.0, 170.0, 99.0, 70.0, 75.0),
    ]);
    let scene = MultiSeriesChart::default().build_scene(&data, 900, 500).expect("scene");
    let line = &scene.lines[0];
    assert_eq!(line.vertices.len(), 4);
    assert_eq!(scene.points.len(), 4);
    assert_eq!(scene.bars.len(), 5);
    let moves = line.path.iter().filter(|c| matches!(c, PathCmd::MoveTo(_))).count();
    assert_eq!(moves, 2, "one run either side of the gap");
}

#[test]
fn all_nan_column_degrades_without_panicking() {
    let data = Dataset::new(vec![
        Row::new(2020.0, f64::NAN, f64::NAN, f64::NAN, f64::NAN),
        Row::new(2021.0, f64::NAN, f64::NAN, f64::NAN, f64::NAN),
    ]);
    for kind in ChartKind::ALL {
        let scene = build_scene(kind, &data, &RenderOptions::for_kind(kind)).expect("scene");
        assert_eq!(scene.bars.len() + scene.points.len(), 0, "{kind}");
        assert!(scene.title.is_some());
    }
}

#[test]
fn labels_can_be_switched_off() {
    let opts = ChartOptions::for_kind(ChartKind::MultiSeries).with_labels(false);
    let scene = MultiSeriesChart::new(opts).build_scene(&two_years(), 900, 500).expect("scene");
    assert!(scene.title.is_none());
    assert!(scene.captions.is_empty());
    assert!(scene.axes.iter().all(|a| a.labels().next().is_none()));
    assert_eq!(scene.bars.len(), 2, "marks survive");
}

#[test]
fn scene_follows_requested_size() {
    let scene = BarChart::default().build_scene(&two_years(), 600, 300).expect("scene");
    assert_eq!((scene.width, scene.height), (600, 300));
    assert_relative_eq!(scene.plot.right, 600.0 - 24.0);
    assert_relative_eq!(scene.plot.bottom, 300.0 - 64.0);
}

#[test]
fn scene_serializes_to_json() {
    let scene = ScatterPlot::default().build_scene(&two_years(), 900, 480).expect("scene");
    let json = serde_json::to_value(&scene).expect("json");
    assert_eq!(json["kind"], "Scatter");
    assert_eq!(json["points"].as_array().map(Vec::len), Some(2));
}
