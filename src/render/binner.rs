//! Fixed-width binning over a [`NiceRange`].
//!
//! Every bin is half-open, `[edges[i], edges[i + 1])`, except the last one,
//! which also takes values equal to the top edge so the sample maximum is
//! counted.  Values outside `[start, stop]` are ignored.
//!
//! ```rust
//! use nice_histogram::render::binner::histogram;
//!
//! let h = histogram(&[0.0, 1.8, 1.1, 2.0], 2);
//! assert_eq!(h.counts, vec![1, 3]);
//! assert_eq!(h.edges, vec![0.0, 1.0, 2.0]);
//! ```

use crate::core::bounds::{NiceRange, nice_range};

/// Counts and edges produced together; `edges.len() == counts.len() + 1`.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    pub counts: Vec<usize>,
    pub edges: Vec<f64>,
}

/// One bar of the chart: `[min, max)` holding `n` values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BinRecord {
    pub min: f64,
    pub max: f64,
    pub n: usize,
}

impl Histogram {
    /// Count `sample` into the bins of `range`.
    #[must_use]
    pub fn over(sample: &[f64], range: &NiceRange) -> Self {
        let bins = range.bin_count;
        let edges = range.edges();
        let mut counts = vec![0usize; bins];
        let scale = bins as f64 / (range.stop - range.start);

        for &v in sample {
            if v < range.start || v > range.stop {
                continue;
            }
            // first guess from the offset, then correct against the real
            // edges, which carry their own rounding
            let mut i = (((v - range.start) * scale) as usize).min(bins - 1);
            if i > 0 && v < edges[i] {
                i -= 1;
            }
            if i + 1 < bins && v >= edges[i + 1] {
                i += 1;
            }
            counts[i] += 1;
        }

        Self { counts, edges }
    }

    #[inline]
    #[must_use]
    pub fn bin_count(&self) -> usize {
        self.counts.len()
    }

    /// Number of values that landed in some bin.
    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Largest bin.
    #[inline]
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// `{min, max, n}` per bin, in order.
    pub fn records(&self) -> impl Iterator<Item = BinRecord> + '_ {
        self.counts
            .iter()
            .zip(self.edges.windows(2))
            .map(|(&n, w)| BinRecord {
                min: w[0],
                max: w[1],
                n,
            })
    }
}

/// Bin `sample` into roughly `requested_bins` round-numbered bins.
///
/// The actual bin count comes from [`nice_range`] and may differ from the
/// request.
#[must_use]
pub fn histogram(sample: &[f64], requested_bins: usize) -> Histogram {
    let range = nice_range(sample, requested_bins);
    log::debug!(
        "nice range [{}, {}] with {} bins (asked for {requested_bins})",
        range.start,
        range.stop,
        range.bin_count
    );
    Histogram::over(sample, &range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::Lcg;

    #[test]
    fn basic() {
        let h = histogram(&[0.0, 1.8, 1.1, 2.0], 2);
        assert_eq!(h.counts, vec![1, 3]);
        assert_eq!(h.edges, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn uses_nice_range() {
        let h = histogram(&[0.1, 1.8, 1.1, 1.9], 2);
        assert_eq!(h.counts, vec![1, 3]);
        assert_eq!(h.edges, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn uses_nice_bin_count() {
        // 10 bins instead of 12 keeps the edges on tenths
        let h = histogram(&[0.01, 0.95], 12);
        assert_eq!(h.counts, vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 1]);
        let tenths: Vec<i64> = h.edges.iter().map(|x| (x * 10.0).round() as i64).collect();
        assert_eq!(tenths, (0..=10).collect::<Vec<_>>());
    }

    #[test]
    fn die_rolls_each_get_a_bin() {
        let h = histogram(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 6.0], 6);
        assert_eq!(h.counts, vec![1, 1, 1, 1, 1, 2]);
        assert_eq!(h.edges.first(), Some(&1.0));
        assert_eq!(h.edges.last(), Some(&7.0));
    }

    #[test]
    fn top_edge_lands_in_last_bin() {
        let range = NiceRange {
            start: 0.0,
            stop: 1.0,
            bin_count: 4,
        };
        let h = Histogram::over(&[1.0, 0.0, 0.25, 2.0, -1.0], &range);
        assert_eq!(h.counts, vec![1, 1, 0, 1]);
    }

    #[test]
    fn records_pair_counts_with_edges() {
        let h = histogram(&[0.0, 1.8, 1.1, 2.0], 2);
        let records: Vec<BinRecord> = h.records().collect();
        assert_eq!(
            records,
            vec![
                BinRecord {
                    min: 0.0,
                    max: 1.0,
                    n: 1
                },
                BinRecord {
                    min: 1.0,
                    max: 2.0,
                    n: 3
                },
            ]
        );
        assert_eq!(h.max_count(), 3);
    }

    #[test]
    fn nothing_lost_on_random_samples() {
        let mut rng = Lcg::seed(7);
        for bins in [2, 3, 10, 17, 500] {
            let sample: Vec<f64> = (0..2_000).map(|_| rng.randn() * 40.0 + 3.0).collect();
            let h = histogram(&sample, bins);
            assert_eq!(h.edges.len(), h.bin_count() + 1);
            assert_eq!(h.total(), sample.len(), "bins = {bins}");
            assert!(h.edges.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
