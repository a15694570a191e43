//! Bin bounds: round-numbered ranges + terminal size plumbing.
//!
//! The tick heuristic follows D3's `tickIncrement`: pick a step of
//! 1, 2, 5 or 10 times a power of ten close to `span / n`.  Steps below 1
//! are kept as their reciprocal ([`Increment::Reciprocal`]) so that snapping
//! multiplies by an integer instead of dividing by an inexact decimal.

use terminal_size::{Height, Width, terminal_size};

use crate::core::constants::{
    BORDER_WIDTH, BRAILLE_HORIZONTAL_RESOLUTION as HR, LABEL_GUTTER, MIN_GRAPH_HEIGHT,
    MIN_GRAPH_WIDTH,
};

/// Distance between two adjacent ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Increment {
    /// The step itself (always ≥ 1).
    Direct(f64),
    /// The step is `1 / r`.
    Reciprocal(f64),
}

impl Increment {
    /// The step as a plain float.
    #[inline]
    #[must_use]
    pub fn step(self) -> f64 {
        match self {
            Self::Direct(s) => s,
            Self::Reciprocal(r) => 1.0 / r,
        }
    }

    /// Largest tick ≤ `x`.
    #[inline]
    fn snap_down(self, x: f64) -> f64 {
        match self {
            Self::Direct(s) => (x / s).floor() * s,
            Self::Reciprocal(r) => (x * r).floor() / r,
        }
    }

    /// Smallest tick ≥ `x`, moved up by `extra` further ticks.
    #[inline]
    fn snap_up(self, x: f64, extra: f64) -> f64 {
        match self {
            Self::Direct(s) => ((x / s).ceil() + extra) * s,
            Self::Reciprocal(r) => ((x * r).ceil() + extra) / r,
        }
    }

    /// Is `x` exactly on a tick?
    #[inline]
    fn on_tick(self, x: f64) -> bool {
        match self {
            Self::Direct(s) => x % s == 0.0,
            Self::Reciprocal(r) => (x * r) % 1.0 == 0.0,
        }
    }

    /// How many steps fit in `[low, high]` (not rounded).
    #[inline]
    fn steps_between(self, low: f64, high: f64) -> f64 {
        match self {
            Self::Direct(s) => (high - low) / s,
            Self::Reciprocal(r) => (high - low) * r,
        }
    }
}

/// Adjusted histogram domain.  `bin_count` is what will actually be used,
/// which may differ from what was requested.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NiceRange {
    pub start: f64,
    pub stop: f64,
    pub bin_count: usize,
}

impl NiceRange {
    /// Width of one bin.
    #[inline]
    #[must_use]
    pub fn bin_width(&self) -> f64 {
        (self.stop - self.start) / self.bin_count as f64
    }

    /// Finite bounds with `start < stop`.  Bounds snapped past `f64::MAX`
    /// fail this.
    #[inline]
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.start.is_finite() && self.stop.is_finite() && self.start < self.stop
    }

    /// `bin_count + 1` evenly spaced edges; the last one is exactly `stop`.
    #[must_use]
    pub fn edges(&self) -> Vec<f64> {
        let width = self.bin_width();
        let mut edges: Vec<f64> = (0..=self.bin_count)
            .map(|i| self.start + i as f64 * width)
            .collect();
        if let Some(last) = edges.last_mut() {
            *last = self.stop;
        }
        edges
    }
}

/// Round step for splitting `[start, stop]` into about `n` pieces.
///
/// `start < stop` is assumed; `n` of 0 is treated as 1.
#[must_use]
pub fn tick_increment(start: f64, stop: f64, n: usize) -> Increment {
    let step = (stop - start) / n.max(1) as f64;
    let power = step.log10().floor() as i32;
    let error = step / 10f64.powi(power);

    let multiplier = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    if power >= 0 {
        Increment::Direct(multiplier * 10f64.powi(power))
    } else {
        // a step that underflows to zero saturates instead of overflowing
        Increment::Reciprocal(10f64.powi(power.saturating_neg()) / multiplier)
    }
}

/// Widen a zero-width domain to one unit around the value.
#[inline]
fn widen(low: f64, high: f64) -> (f64, f64) {
    if low == high {
        (low - 0.5, high + 0.5)
    } else {
        (low, high)
    }
}

/// Most bins `[start, stop]` can hold while neighbouring edges stay
/// distinct floats.
#[inline]
fn resolvable_bins(start: f64, stop: f64) -> f64 {
    let ulp = start.abs().max(stop.abs()) * f64::EPSILON;
    ((stop - start) / (4.0 * ulp)).floor()
}

/// Two-pass refinement shared by [`compute_range`] and [`nice_range`].
///
/// `quantized` decides, given the first increment, whether the two
/// largest values need an extra bin to stay apart.
fn refine(low: f64, high: f64, n: usize, quantized: impl Fn(Increment) -> bool) -> NiceRange {
    let (low, high) = widen(low, high);

    let first = tick_increment(low, high, n);
    let extra = if quantized(first) { 1.0 } else { 0.0 };

    // snapping can shift the span enough that a better step exists
    let inc = tick_increment(first.snap_down(low), first.snap_up(high, 0.0), n);

    let start = inc.snap_down(low);
    let stop = inc.snap_up(high, extra);
    let bin_count = inc
        .steps_between(start, stop)
        .round()
        .min(resolvable_bins(start, stop))
        .max(1.0) as usize;

    NiceRange {
        start,
        stop,
        bin_count,
    }
}

/// Round-numbered `(start, stop, bin_count)` covering `[min, max]`.
///
/// Feeding the result back in with the same `requested_bins` returns it
/// unchanged.  `min == max` is widened by ±0.5 first.
#[must_use]
pub fn compute_range(min: f64, max: f64, requested_bins: usize) -> NiceRange {
    refine(min, max, requested_bins, |_| false)
}

/// Like [`compute_range`] over the extrema of `sample`, plus one extra bin
/// when every value already sits on a tick (quantized data such as die
/// rolls), so the two largest values don't share the last bin.
///
/// An empty sample falls back to the domain `(0, 1)`.
#[must_use]
pub fn nice_range(sample: &[f64], requested_bins: usize) -> NiceRange {
    let (mut low, mut high) = (f64::INFINITY, f64::NEG_INFINITY);
    for &v in sample {
        low = low.min(v);
        high = high.max(v);
    }
    if !low.is_finite() || !high.is_finite() {
        return compute_range(0.0, 1.0, requested_bins);
    }

    refine(low, high, requested_bins, |inc| {
        sample.iter().all(|&v| inc.on_tick(v))
    })
}

/// Current terminal geometry (80×30 fallback).
#[inline]
#[must_use]
pub fn terminal_geometry() -> (Width, Height) {
    terminal_size().unwrap_or((Width(80), Height(30)))
}

/// Convert terminal dimensions + bin count to graph char grid.
/// Leaves space for borders, the count labels and the edge axis.
#[inline]
#[must_use]
pub fn graph_dims((w, h): (Width, Height), bins: usize, label_width: usize) -> (usize, usize) {
    let available = usize::from(w.0).saturating_sub(BORDER_WIDTH + LABEL_GUTTER + label_width + 1);
    // no need for more than one half-column per bin once every bin is 4 dots wide
    let x_chars = available.min(bins.saturating_mul(HR * 2)).max(MIN_GRAPH_WIDTH);
    let y_chars = usize::from(h.0).saturating_sub(8).max(MIN_GRAPH_HEIGHT);
    (x_chars, y_chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: f64, stop: f64, bin_count: usize) -> NiceRange {
        NiceRange {
            start,
            stop,
            bin_count,
        }
    }

    #[test]
    fn increment_picks_round_steps() {
        assert_eq!(tick_increment(0.0, 10.0, 10), Increment::Direct(1.0));
        assert_eq!(tick_increment(0.0, 100.0, 4), Increment::Direct(20.0));
        assert_eq!(tick_increment(-8.0, 22.0, 4), Increment::Direct(10.0));
        assert_eq!(tick_increment(0.0, 1.0, 10), Increment::Reciprocal(10.0));
        assert_eq!(tick_increment(1.0, 6.0, 10), Increment::Reciprocal(2.0));
        assert_eq!(tick_increment(0.1, 0.41, 16), Increment::Reciprocal(50.0));
        assert_eq!(Increment::Reciprocal(4.0).step(), 0.25);
    }

    #[test]
    fn big_numbers() {
        assert_eq!(compute_range(240.0, 12314.0, 13), range(0.0, 13000.0, 13));
        assert_eq!(
            nice_range(&[240.0, 333.3, 12314.0], 13),
            range(0.0, 13000.0, 13)
        );
    }

    #[test]
    fn across_zero() {
        assert_eq!(compute_range(-8.0, 22.0, 4), range(-10.0, 30.0, 4));
    }

    #[test]
    fn small_numbers() {
        assert_eq!(nice_range(&[0.1, 0.41], 16), range(0.1, 0.42, 16));
    }

    #[test]
    fn small_numbers_across_zero() {
        assert_eq!(compute_range(-0.04, 0.8, 9), range(-0.1, 0.8, 9));
    }

    #[test]
    fn suggests_fewer_bins() {
        assert_eq!(compute_range(-0.04, 0.8, 10), range(-0.1, 0.8, 9));
    }

    #[test]
    fn die_rolls_get_an_extra_bin() {
        let die = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        for n in [5, 6, 7] {
            assert_eq!(nice_range(&die, n), range(1.0, 7.0, 6), "n = {n}");
        }
    }

    #[test]
    fn die_rolls_with_half_bins() {
        let die = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        for n in [10, 11, 12] {
            assert_eq!(nice_range(&die, n), range(1.0, 6.5, 11), "n = {n}");
        }
    }

    #[test]
    fn compute_range_is_a_fixed_point() {
        for (min, max, n) in [
            (240.0, 12314.0, 13),
            (-8.0, 22.0, 4),
            (-0.04, 0.8, 10),
            (0.1, 0.41, 16),
            (1.0, 6.0, 6),
        ] {
            let once = compute_range(min, max, n);
            let twice = compute_range(once.start, once.stop, n);
            assert_eq!(once, twice, "({min}, {max}, {n})");
        }
    }

    #[test]
    fn equal_bounds_are_widened() {
        let r = compute_range(3.0, 3.0, 2);
        assert!(r.start < 3.0 && r.stop > 3.0);
        assert!(r.bin_count >= 1);
        assert_eq!(r, range(2.5, 3.5, 2));
    }

    #[test]
    fn empty_sample_falls_back_to_unit_domain() {
        assert_eq!(nice_range(&[], 10), range(0.0, 1.0, 10));
    }

    #[test]
    fn underflowing_step_does_not_panic() {
        assert!(!tick_increment(0.0, 5e-324, 2).step().is_normal());
    }

    #[test]
    fn overflowing_stop_is_not_bounded() {
        let r = nice_range(&[0.0, 1.7e308], 2);
        assert!(!r.is_bounded());
        assert!(compute_range(-8.0, 22.0, 4).is_bounded());
    }

    #[test]
    fn bins_narrower_than_an_ulp_are_merged() {
        let r = nice_range(&[1e16, 1e16 + 2.0], 500);
        assert!(r.bin_count >= 1);
        let edges = r.edges();
        assert!(edges.windows(2).all(|w| w[0] < w[1]), "{edges:?}");
        assert_eq!(edges[0], 1e16);
        assert_eq!(edges[edges.len() - 1], 1e16 + 2.0);
    }

    #[test]
    fn edges_end_exactly_at_stop() {
        let edges = range(0.0, 1.0, 10).edges();
        assert_eq!(edges.len(), 11);
        assert_eq!(edges[0], 0.0);
        assert_eq!(edges[10], 1.0);
        assert!(edges.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn graph_dims_respects_minimums() {
        let (x, y) = graph_dims((Width(10), Height(5)), 20, 3);
        assert_eq!((x, y), (MIN_GRAPH_WIDTH, MIN_GRAPH_HEIGHT));
        let (x, _) = graph_dims((Width(200), Height(40)), 5, 3);
        assert_eq!(x, 20);
    }
}
