// File: crates/chart-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Round `x` to a "nice" 1/2/5 x 10^k value; `round` picks nearest, else ceiling.
pub fn nice_number(x: f64, round: bool) -> f64 {
    if x <= 0.0 || !x.is_finite() { return 1.0; }
    let exp = x.log10().floor();
    let base = 10f64.powf(exp);
    let f = x / base;
    let nf = if round {
        if f < 1.5 { 1.0 } else if f < 3.0 { 2.0 } else if f < 7.0 { 5.0 } else { 10.0 }
    } else if f <= 1.0 { 1.0 } else if f <= 2.0 { 2.0 } else if f <= 5.0 { 5.0 } else { 10.0 };
    nf * base
}

/// Expand `[min, max]` to nice bounds and return the tick values covering it.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let (min, max) = if (max - min).abs() < 1e-12 { (min - 1.0, max + 1.0) } else { (min, max) };
    let target = target.max(2);
    let range = nice_number(max - min, false);
    let step = nice_number(range / (target as f64 - 1.0), true);
    let lo = (min / step).floor() * step;
    let hi = (max / step).ceil() * step;
    let n = ((hi - lo) / step).round() as usize;
    (0..=n).map(|i| lo + step * i as f64).collect()
}

/// Smallest nice value `>= v` (used for radar indicator maxima).
pub fn nice_ceil(v: f64) -> f64 {
    if v <= 0.0 { return 1.0; }
    let step = nice_number(v, true) / 10.0;
    (v / step).ceil() * step
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_endpoints() {
        let v = linspace(0.0, 10.0, 6);
        assert_eq!(v, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn ticks_cover_range() {
        let t = nice_ticks(0.0, 173.8, 6);
        assert_eq!(t.first().copied(), Some(0.0));
        assert!(*t.last().unwrap() >= 173.8);
        assert!(t.len() >= 3 && t.len() <= 10, "{t:?}");
    }

    #[test]
    fn ticks_handle_flat_range() {
        let t = nice_ticks(5.0, 5.0, 5);
        assert!(t.first().unwrap() < &5.0 && t.last().unwrap() > &5.0);
    }

    #[test]
    fn nice_ceil_is_not_below_input() {
        for v in [0.3, 2.75, 16.72, 308.55, 79.75] {
            let c = nice_ceil(v);
            assert!(c >= v && c <= v * 1.2, "{v} -> {c}");
        }
    }
}
