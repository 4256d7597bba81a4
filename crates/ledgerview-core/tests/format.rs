// File: crates/ledgerview-core/tests/format.rs
// Purpose: Label formatting and the monotone line interpolation.

use ledgerview_core::curve::monotone_x;
use ledgerview_core::format::{fixed, integer, millions, millions_precise};
use ledgerview_core::geometry::Point;
use ledgerview_core::scene::PathCmd;

#[test]
fn fixed_rounds_ties_away_from_zero() {
    assert_eq!(fixed(2.5, 0), "3");
    assert_eq!(fixed(0.25, 1), "0.3");
    assert_eq!(fixed(1.005, 2), "1.00"); // 1.005 is stored just below the tie
    assert_eq!(fixed(1234.5678, 1), "1234.6");
    assert_eq!(fixed(100.0, 1), "100.0");
}

#[test]
fn fixed_sign_handling() {
    assert_eq!(fixed(-1.5, 0), "\u{2212}2");
    assert_eq!(fixed(-12.34, 1), "\u{2212}12.3");
    assert_eq!(fixed(-0.4, 0), "0");
    assert_eq!(fixed(-0.0, 1), "0.0");
    assert_eq!(fixed(f64::NAN, 1), "NaN");
    assert_eq!(fixed(f64::NEG_INFINITY, 0), "\u{2212}Infinity");
}

#[test]
fn integer_rounds_half_up() {
    assert_eq!(integer(2020.0), "2020");
    assert_eq!(integer(2020.5), "2021");
    assert_eq!(integer(-2.5), "\u{2212}2");
    assert_eq!(integer(-0.2), "0");
    assert_eq!(integer(f64::NAN), "NaN");
}

#[test]
fn millions_suffix() {
    assert_eq!(millions(120.0), "120 M");
    assert_eq!(millions(119.6), "120 M");
    assert_eq!(millions(f64::NAN), "NaN M");
    assert_eq!(millions_precise(100.0), "100.0 M");
    assert_eq!(millions_precise(87.25), "87.3 M");
}

fn pts(v: &[(f64, f64)]) -> Vec<Point> {
    v.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[test]
fn monotone_short_inputs() {
    assert!(monotone_x(&[]).is_empty());
    assert_eq!(monotone_x(&pts(&[(1.0, 2.0)])), [PathCmd::MoveTo(Point::new(1.0, 2.0))]);
    assert_eq!(
        monotone_x(&pts(&[(0.0, 0.0), (3.0, 3.0)])),
        [PathCmd::MoveTo(Point::new(0.0, 0.0)), PathCmd::LineTo(Point::new(3.0, 3.0))]
    );
}

#[test]
fn monotone_collinear_points_stay_straight() {
    let path = monotone_x(&pts(&[(0.0, 0.0), (3.0, 3.0), (6.0, 6.0)]));
    assert_eq!(path.len(), 3);
    assert_eq!(
        path[1],
        PathCmd::CubicTo(Point::new(1.0, 1.0), Point::new(2.0, 2.0), Point::new(3.0, 3.0))
    );
    assert_eq!(
        path[2],
        PathCmd::CubicTo(Point::new(4.0, 4.0), Point::new(5.0, 5.0), Point::new(6.0, 6.0))
    );
}

#[test]
fn monotone_never_overshoots_a_plateau() {
    let path = monotone_x(&pts(&[(0.0, 0.0), (1.0, 10.0), (2.0, 10.0), (3.0, 0.0)]));
    for cmd in &path {
        if let PathCmd::CubicTo(c1, c2, _) = cmd {
            assert!(c1.y <= 10.0 && c2.y <= 10.0, "control point above plateau: {cmd:?}");
            assert!(c1.y >= 0.0 && c2.y >= 0.0);
        }
    }
}

#[test]
fn monotone_splits_on_gaps_and_skips_repeats() {
    let path = monotone_x(&pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, f64::NAN), (3.0, 1.0), (4.0, 2.0)]));
    let moves: Vec<&PathCmd> = path.iter().filter(|c| matches!(c, PathCmd::MoveTo(_))).collect();
    assert_eq!(moves.len(), 2);
    assert_eq!(path.len(), 4);

    let repeated = monotone_x(&pts(&[(0.0, 0.0), (0.0, 0.0), (5.0, 5.0)]));
    assert_eq!(repeated.len(), 2);
}
