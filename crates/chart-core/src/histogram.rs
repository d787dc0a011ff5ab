// File: crates/chart-core/src/histogram.rs
// Summary: Fixed-count equal-width binning over an observed sample range.

use serde::Serialize;

use crate::error::{ChartError, Result};

/// Bin count used by the gallery's grayscale histogram.
pub const DEFAULT_BIN_COUNT: usize = 20;

/// One half-open interval `[start, end)` and the number of samples in it.
/// The last bin also holds samples equal to the series maximum.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
    pub label: i64,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Histogram {
    pub bins: Vec<Bin>,
    pub min: f64,
    pub max: f64,
    pub bin_width: f64,
}

impl Histogram {
    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|b| b.count).collect()
    }

    pub fn labels(&self) -> Vec<i64> {
        self.bins.iter().map(|b| b.label).collect()
    }

    /// Sum of all counts; equals the length of the binned series.
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// All samples were identical, so everything sits in bin 0.
    pub fn is_degenerate(&self) -> bool {
        self.bin_width == 0.0
    }
}

/// Round half up, matching the usual label rounding for bin starts.
#[inline]
fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

/// Partition `samples` into `bin_count` equal-width bins over `[min, max]`.
///
/// When every sample is equal the width is zero and all samples are counted
/// in bin 0 instead of dividing by zero. A range too wide for `f64` is an
/// `InvalidArgument`.
pub fn compute_histogram<T>(samples: &[T], bin_count: usize) -> Result<Histogram>
where
    T: Copy + Into<f64>,
{
    if samples.is_empty() {
        return Err(ChartError::InvalidArgument("sample series is empty".into()));
    }
    if bin_count == 0 {
        return Err(ChartError::InvalidArgument("bin count must be positive".into()));
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &s in samples {
        let v: f64 = s.into();
        if !v.is_finite() {
            return Err(ChartError::InvalidArgument(format!("non-finite sample {v}")));
        }
        min = min.min(v);
        max = max.max(v);
    }

    let span = max - min;
    if !span.is_finite() {
        return Err(ChartError::InvalidArgument(format!("sample range [{min}, {max}] overflows f64")));
    }
    let bin_width = if max > min { span / bin_count as f64 } else { 0.0 };

    let mut counts = vec![0usize; bin_count];
    for &s in samples {
        let idx = if bin_width == 0.0 {
            0
        } else {
            let v: f64 = s.into();
            (((v - min) / bin_width).floor() as usize).min(bin_count - 1)
        };
        counts[idx] += 1;
    }

    let bins = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let start = min + i as f64 * bin_width;
            Bin { start, end: start + bin_width, label: round_half_up(start), count }
        })
        .collect();

    tracing::debug!(min, max, bin_width, bin_count, "binned {} samples", samples.len());

    Ok(Histogram { bins, min, max, bin_width })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_is_rejected() {
        let err = compute_histogram::<u8>(&[], DEFAULT_BIN_COUNT).unwrap_err();
        assert!(matches!(err, ChartError::InvalidArgument(_)));
    }

    #[test]
    fn zero_bins_is_rejected() {
        let err = compute_histogram(&[1u8, 2, 3], 0).unwrap_err();
        assert!(matches!(err, ChartError::InvalidArgument(_)));
    }

    #[test]
    fn nan_is_rejected() {
        let err = compute_histogram(&[1.0f64, f64::NAN], 4).unwrap_err();
        assert!(matches!(err, ChartError::InvalidArgument(_)));
    }

    #[test]
    fn range_wider_than_f64_is_rejected() {
        let err = compute_histogram(&[f64::MAX, -f64::MAX], 4).unwrap_err();
        assert!(matches!(err, ChartError::InvalidArgument(_)));
        // half the range still fits
        let h = compute_histogram(&[f64::MAX, 0.0], 4).unwrap();
        assert_eq!(h.counts(), vec![1, 0, 0, 1]);
    }

    #[test]
    fn identical_samples_land_in_first_bin() {
        let h = compute_histogram(&[5u8, 5, 5], DEFAULT_BIN_COUNT).unwrap();
        assert!(h.is_degenerate());
        assert_eq!(h.bins.len(), DEFAULT_BIN_COUNT);
        assert_eq!(h.bins[0].count, 3);
        assert_eq!(h.total(), 3);
        assert!(h.labels().iter().all(|&l| l == 5));
    }

    #[test]
    fn maximum_goes_into_last_bin() {
        let h = compute_histogram(&[0u8, 10, 20, 30, 40], 4).unwrap();
        assert_eq!(h.bin_width, 10.0);
        assert_eq!(h.counts(), vec![1, 1, 1, 2]);
        assert_eq!(h.labels(), vec![0, 10, 20, 30]);
    }

    #[test]
    fn float_samples_bin_like_integers() {
        let h = compute_histogram(&[-1.0f64, 2.0, 2.1, 4.0], 2).unwrap();
        assert_eq!(h.min, -1.0);
        assert_eq!(h.max, 4.0);
        assert_eq!(h.counts(), vec![1, 3]);
        // -1 + 2.5 = 1.5 rounds half up to 2
        assert_eq!(h.labels(), vec![-1, 2]);
    }

    #[test]
    fn bins_are_contiguous() {
        let data: Vec<u8> = (0..=255).collect();
        let h = compute_histogram(&data, 7).unwrap();
        for pair in h.bins.windows(2) {
            assert!((pair[0].end - pair[1].start).abs() < 1e-9);
        }
        assert_eq!(h.total(), 256);
    }
}
