// File: crates/chart-core/tests/histogram_properties.rs
// Purpose: End-to-end properties of the fixed grayscale series and its 20-bin histogram.

use chart_core::{compute_histogram, generate_samples, ChartError, DEFAULT_BIN_COUNT};

#[test]
fn series_is_fixed_and_in_range() {
    let a = generate_samples();
    let b = generate_samples();
    assert_eq!(a.len(), 10_000);
    assert_eq!(a, b, "generator must be deterministic across calls");
    assert_eq!(&a[..10], &[91, 69, 163, 122, 0, 154, 36, 196, 87, 42]);
    // clamping reaches both ends with this many draws
    assert_eq!(a.iter().min().copied(), Some(0));
    assert_eq!(a.iter().max().copied(), Some(255));
}

#[test]
fn histogram_accounts_for_every_sample() {
    let samples = generate_samples();
    let h = compute_histogram(&samples, DEFAULT_BIN_COUNT).expect("histogram");
    assert_eq!(h.bins.len(), DEFAULT_BIN_COUNT);
    assert_eq!(h.total(), samples.len());
    assert_eq!(h.bin_width, 12.75);
    assert_eq!(
        h.labels(),
        vec![0, 13, 26, 38, 51, 64, 77, 89, 102, 115, 128, 140, 153, 166, 179, 191, 204, 217, 230, 242]
    );
    for w in h.bins.windows(2) {
        assert_eq!(w[0].end, w[1].start);
    }
}

#[test]
fn histogram_peaks_near_the_mean() {
    let h = compute_histogram(&generate_samples(), DEFAULT_BIN_COUNT).expect("histogram");
    let counts = h.counts();
    let peak = counts.iter().enumerate().max_by_key(|(_, c)| **c).map(|(i, _)| i).unwrap();
    assert!((8..=12).contains(&peak), "peak bin {peak} should sit around 128");
    // tails are much thinner than the centre
    assert!(counts[1] < counts[peak] / 4);
    assert!(counts[18] < counts[peak] / 4);
}

#[test]
fn degenerate_and_empty_inputs() {
    let h = compute_histogram(&[5u8, 5, 5], DEFAULT_BIN_COUNT).expect("histogram");
    assert_eq!(h.bins[0].count, 3);
    assert_eq!(h.total(), 3);
    assert!(h.is_degenerate());

    let err = compute_histogram::<u8>(&[], DEFAULT_BIN_COUNT).unwrap_err();
    assert!(matches!(err, ChartError::InvalidArgument(_)));
}
