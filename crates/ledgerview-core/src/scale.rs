// File: crates/ledgerview-core/src/scale.rs
// Summary: Linear (value) and band (category) scales with nice-rounding and tick generation.

use indexmap::IndexSet;
use ordered_float::OrderedFloat;

/// Value on a domain axis (revenue, expenses, year, ...).
pub type Value = f64;

/// What an axis needs from a scale: tick values and where they land in pixels.
pub trait AxisScale {
    /// Tick values for roughly `count` ticks (band scales ignore `count`).
    fn tick_values(&self, count: usize) -> Vec<Value>;
    /// Pixel position of a tick (band scales use the band centre).
    fn tick_position(&self, value: Value) -> Option<f64>;
    /// Output range `(start, end)` in pixels.
    fn range(&self) -> (f64, f64);
}

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// `(i1, i2, inc)`: ticks are `i * inc` when `inc > 0`, `i / -inc` otherwise.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 { 10.0 } else if error >= E5 { 5.0 } else if error >= E2 { 2.0 } else { 1.0 };
    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let m = 10f64.powf(-power) / factor;
        i1 = js_round(start * m);
        i2 = js_round(stop * m);
        if i1 / m < start { i1 += 1.0; }
        if i2 / m > stop { i2 -= 1.0; }
        inc = -m;
    } else {
        let m = 10f64.powf(power) * factor;
        i1 = js_round(start / m);
        i2 = js_round(stop / m);
        if i1 * m < start { i1 += 1.0; }
        if i2 * m > stop { i2 -= 1.0; }
        inc = m;
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

#[inline]
fn js_round(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Signed tick increment between `start` and `stop` (negative means "divide by").
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    tick_spec(start, stop, count as f64).2
}

/// Round tick values covering `[start, stop]` (either order), about `count` of them.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || start.is_nan() || stop.is_nan() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (i1, i2, inc) = if reverse {
        tick_spec(stop, start, count as f64)
    } else {
        tick_spec(start, stop, count as f64)
    };
    if !(i2 >= i1) {
        return Vec::new();
    }
    let n = (i2 - i1 + 1.0) as usize;
    let at = |k: f64| if inc < 0.0 { k / -inc } else { k * inc };
    let mut out: Vec<f64> = (0..n).map(|i| at(i1 + i as f64)).collect();
    if reverse {
        out.reverse();
    }
    out
}

/// Continuous linear mapping from a value domain onto a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub d0: Value,
    pub d1: Value,
    pub r0: f64,
    pub r1: f64,
}

impl LinearScale {
    pub fn new(domain: (Value, Value), range: (f64, f64)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 }
    }

    pub fn domain(&self) -> (Value, Value) {
        (self.d0, self.d1)
    }

    /// Expand the domain outward to round tick boundaries.
    pub fn nice(mut self, count: usize) -> Self {
        let reverse = self.d1 < self.d0;
        let (mut start, mut stop) = if reverse { (self.d1, self.d0) } else { (self.d0, self.d1) };
        let mut prestep: Option<f64> = None;
        // The domain only changes once the increment is stable; a degenerate
        // (zero-width or non-finite) domain never stabilises and is left untouched.
        for _ in 0..10 {
            let step = tick_increment(start, stop, count);
            if prestep == Some(step) {
                if reverse {
                    self.d0 = stop;
                    self.d1 = start;
                } else {
                    self.d0 = start;
                    self.d1 = stop;
                }
                return self;
            } else if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prestep = Some(step);
        }
        self
    }

    /// Map a domain value to pixels. A zero-width domain maps to the middle of the range.
    #[inline]
    pub fn map(&self, v: Value) -> f64 {
        let span = self.d1 - self.d0;
        let t = if span != 0.0 {
            (v - self.d0) / span
        } else if span.is_nan() {
            f64::NAN
        } else {
            0.5
        };
        self.r0 + t * (self.r1 - self.r0)
    }

    #[inline]
    pub fn invert(&self, px: f64) -> Value {
        let span = self.r1 - self.r0;
        let t = if span != 0.0 { (px - self.r0) / span } else { 0.5 };
        self.d0 + t * (self.d1 - self.d0)
    }

    pub fn ticks(&self, count: usize) -> Vec<Value> {
        ticks(self.d0, self.d1, count)
    }
}

impl AxisScale for LinearScale {
    fn tick_values(&self, count: usize) -> Vec<Value> {
        self.ticks(count)
    }
    fn tick_position(&self, value: Value) -> Option<f64> {
        let px = self.map(value);
        px.is_finite().then_some(px)
    }
    fn range(&self) -> (f64, f64) {
        (self.r0, self.r1)
    }
}

/// Ordinal scale dividing a pixel range into uniform bands, one per distinct value.
#[derive(Clone, Debug)]
pub struct BandScale {
    domain: IndexSet<OrderedFloat<f64>>,
    r0: f64,
    r1: f64,
    padding_inner: f64,
    padding_outer: f64,
    align: f64,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// Distinct values keep first-seen order; NaN equals NaN.
    pub fn new(values: impl IntoIterator<Item = Value>, range: (f64, f64)) -> Self {
        let domain = values.into_iter().map(OrderedFloat).collect();
        let mut s = Self {
            domain,
            r0: range.0,
            r1: range.1,
            padding_inner: 0.0,
            padding_outer: 0.0,
            align: 0.5,
            start: range.0,
            step: 0.0,
            bandwidth: 0.0,
        };
        s.rescale();
        s
    }

    /// Same padding between bands and at both ends, clamped to `[0, 1]`.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding_inner = padding.clamp(0.0, 1.0);
        self.padding_outer = padding.clamp(0.0, 1.0);
        self.rescale();
        self
    }

    fn rescale(&mut self) {
        let n = self.domain.len() as f64;
        let reverse = self.r1 < self.r0;
        let (start, stop) = if reverse { (self.r1, self.r0) } else { (self.r0, self.r1) };
        let step = (stop - start) / (n - self.padding_inner + self.padding_outer * 2.0).max(1.0);
        let first = start + (stop - start - step * (n - self.padding_inner)) * self.align;
        self.step = step;
        self.bandwidth = step * (1.0 - self.padding_inner);
        self.start = if reverse { first + step * (n - 1.0).max(0.0) } else { first };
        if reverse {
            self.step = -step;
        }
    }

    pub fn domain(&self) -> impl Iterator<Item = Value> + '_ {
        self.domain.iter().map(|v| v.0)
    }
    pub fn len(&self) -> usize { self.domain.len() }
    pub fn is_empty(&self) -> bool { self.domain.is_empty() }
    pub fn bandwidth(&self) -> f64 { self.bandwidth }
    pub fn step(&self) -> f64 { self.step.abs() }

    /// Left edge of the band for `value`; `None` when the value is not in the domain.
    pub fn position(&self, value: Value) -> Option<f64> {
        let i = self.domain.get_index_of(&OrderedFloat(value))?;
        Some(self.start + self.step * i as f64)
    }

    pub fn center(&self, value: Value) -> Option<f64> {
        self.position(value).map(|x| x + self.bandwidth / 2.0)
    }
}

impl AxisScale for BandScale {
    fn tick_values(&self, _count: usize) -> Vec<Value> {
        self.domain().collect()
    }
    fn tick_position(&self, value: Value) -> Option<f64> {
        self.center(value)
    }
    fn range(&self) -> (f64, f64) {
        (self.r0, self.r1)
    }
}
