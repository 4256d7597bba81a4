// File: crates/ledgerview-core/src/curve.rs
// Summary: Monotone-in-x cubic interpolation for smoothed series lines.
// Notes:
// - Tangents follow Steffen's method, so the curve never overshoots between vertices.
// - Non-finite vertices split the line into separate runs, each starting with a MoveTo.

use crate::geometry::Point;
use crate::scene::PathCmd;

/// Build path commands through `points`.
pub fn monotone_x(points: &[Point]) -> Vec<PathCmd> {
    let mut out = Vec::new();
    for run in points.split(|p| !p.is_finite()) {
        if !run.is_empty() {
            MonotoneRun::new(&mut out).trace(run);
        }
    }
    out
}

struct MonotoneRun<'a> {
    out: &'a mut Vec<PathCmd>,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    t0: f64,
    state: u8,
}

impl<'a> MonotoneRun<'a> {
    fn new(out: &'a mut Vec<PathCmd>) -> Self {
        Self { out, x0: f64::NAN, y0: f64::NAN, x1: f64::NAN, y1: f64::NAN, t0: f64::NAN, state: 0 }
    }

    fn trace(mut self, run: &[Point]) {
        for p in run {
            self.point(p.x, p.y);
        }
        match self.state {
            2 => self.out.push(PathCmd::LineTo(Point::new(self.x1, self.y1))),
            3 => {
                let t1 = self.slope2(self.t0);
                self.bezier(self.t0, t1);
            }
            _ => {}
        }
    }

    fn point(&mut self, x: f64, y: f64) {
        // coincident vertices add nothing
        if x == self.x1 && y == self.y1 {
            return;
        }
        let mut t1 = f64::NAN;
        match self.state {
            0 => {
                self.state = 1;
                self.out.push(PathCmd::MoveTo(Point::new(x, y)));
            }
            1 => self.state = 2,
            2 => {
                self.state = 3;
                t1 = self.slope3(x, y);
                let t0 = self.slope2(t1);
                self.bezier(t0, t1);
            }
            _ => {
                t1 = self.slope3(x, y);
                self.bezier(self.t0, t1);
            }
        }
        self.x0 = self.x1;
        self.x1 = x;
        self.y0 = self.y1;
        self.y1 = y;
        self.t0 = t1;
    }

    // Tangent at (x1, y1) from its neighbours.
    fn slope3(&self, x2: f64, y2: f64) -> f64 {
        let h0 = self.x1 - self.x0;
        let h1 = x2 - self.x1;
        let s0 = (self.y1 - self.y0) / nonzero(h0, h1);
        let s1 = (y2 - self.y1) / nonzero(h1, h0);
        let p = (s0 * h1 + s1 * h0) / (h0 + h1);
        let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
        if t.is_nan() { 0.0 } else { t }
    }

    // One-sided tangent at an end vertex.
    fn slope2(&self, t: f64) -> f64 {
        let h = self.x1 - self.x0;
        if h != 0.0 { (3.0 * (self.y1 - self.y0) / h - t) / 2.0 } else { t }
    }

    fn bezier(&mut self, t0: f64, t1: f64) {
        let dx = (self.x1 - self.x0) / 3.0;
        self.out.push(PathCmd::CubicTo(
            Point::new(self.x0 + dx, self.y0 + dx * t0),
            Point::new(self.x1 - dx, self.y1 - dx * t1),
            Point::new(self.x1, self.y1),
        ));
    }
}

#[inline]
fn sign(v: f64) -> f64 {
    if v < 0.0 { -1.0 } else { 1.0 }
}

// A zero interval borrows the sign of its neighbour so the slope stays signed infinity.
#[inline]
fn nonzero(h: f64, other: f64) -> f64 {
    if h != 0.0 {
        h
    } else if other < 0.0 {
        -0.0
    } else {
        0.0
    }
}
