// File: crates/chart-core/src/synthetic.rs
// Summary: Deterministic grayscale sample generator (sine-hash uniforms + Box-Muller).
// Notes:
// - The seed is fixed; every call starts a fresh counter so output never depends
//   on earlier calls.
// - Each sample consumes its own uniform draws: the counter moves past every `n`
//   used, so consecutive samples never share generator state.

use std::f64::consts::PI;

/// A simulated grayscale pixel intensity; `u8` keeps it inside [0, 255].
pub type Sample = u8;

/// Fixed generator seed.
pub const SEED: i64 = 19_680_801;
/// Number of samples produced per call.
pub const SAMPLE_COUNT: usize = 10_000;
/// Target distribution mean (mid gray).
pub const MEAN: f64 = 128.0;
/// Target distribution standard deviation.
pub const STD_DEV: f64 = 50.0;

/// Attempts before a zero draw is replaced by the smallest positive float.
const MAX_ZERO_RETRIES: usize = 8;

/// Uniform source over (0, 1) driven by `frac(sin(n) * 10000)`.
#[derive(Clone, Debug)]
pub struct SineUniform {
    counter: i64,
    hash: fn(i64) -> f64,
}

impl SineUniform {
    pub fn new(seed: i64) -> Self {
        Self::with_hash(seed, sine_fraction)
    }

    /// Source over a custom `n -> [0, 1)` hash instead of the sine hash.
    pub fn with_hash(seed: i64, hash: fn(i64) -> f64) -> Self {
        Self { counter: seed, hash }
    }

    /// Next `n` the source will hash.
    pub fn counter(&self) -> i64 {
        self.counter
    }

    /// Next uniform in (0, 1). Exact zeros are skipped so `ln(u)` stays finite.
    pub fn next_uniform(&mut self) -> f64 {
        for _ in 0..MAX_ZERO_RETRIES {
            let u = (self.hash)(self.counter);
            self.counter += 1;
            if u != 0.0 {
                return u;
            }
        }
        f64::MIN_POSITIVE
    }

    /// One standard-normal value from two uniforms.
    pub fn next_normal(&mut self) -> f64 {
        let u = self.next_uniform();
        let v = self.next_uniform();
        (-2.0 * u.ln()).sqrt() * (2.0 * PI * v).cos()
    }
}

/// `frac(sin(n) * 10000)`, always in [0, 1).
#[inline]
pub fn sine_fraction(n: i64) -> f64 {
    let x = (n as f64).sin() * 10_000.0;
    x - x.floor()
}

/// Map a standard-normal value onto a grayscale sample.
#[inline]
pub fn to_sample(normal: f64) -> Sample {
    let value = normal * STD_DEV + MEAN;
    value.clamp(0.0, 255.0).round() as Sample
}

/// The first `count` raw standard-normal values for the fixed seed, before scaling.
pub fn raw_normals(count: usize) -> Vec<f64> {
    let mut source = SineUniform::new(SEED);
    (0..count).map(|_| source.next_normal()).collect()
}

/// Generate the fixed 10,000-sample grayscale series.
pub fn generate_samples() -> Vec<Sample> {
    let mut source = SineUniform::new(SEED);
    let samples: Vec<Sample> = (0..SAMPLE_COUNT)
        .map(|_| to_sample(source.next_normal()))
        .collect();
    tracing::debug!(
        count = samples.len(),
        draws = source.counter() - SEED,
        "generated grayscale samples"
    );
    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sine_fraction_stays_in_unit_interval() {
        for n in [-5_i64, 0, 1, 2, SEED, SEED + 17, i32::MAX as i64] {
            let f = sine_fraction(n);
            assert!((0.0..1.0).contains(&f), "n={n} gave {f}");
        }
    }

    #[test]
    fn zero_draw_is_skipped() {
        // sin(0) == 0, so the first draw from n=0 must be discarded.
        let mut src = SineUniform::new(0);
        let u = src.next_uniform();
        assert!(u > 0.0);
        assert_eq!(src.counter(), 2);
        assert_eq!(u, sine_fraction(1));
    }

    #[test]
    fn all_zero_draws_fall_back_to_min_positive() {
        let mut src = SineUniform::with_hash(100, |_| 0.0);
        let u = src.next_uniform();
        assert_eq!(u, f64::MIN_POSITIVE);
        assert_eq!(src.counter(), 100 + MAX_ZERO_RETRIES as i64);

        let mut src = SineUniform::with_hash(0, |_| 0.0);
        let n = src.next_normal();
        assert!(n.is_finite(), "got {n}");
        assert_eq!(src.counter(), 2 * MAX_ZERO_RETRIES as i64);
    }

    #[test]
    fn each_normal_consumes_at_least_two_draws() {
        let mut src = SineUniform::new(SEED);
        src.next_normal();
        assert_eq!(src.counter(), SEED + 2);
        src.next_normal();
        assert_eq!(src.counter(), SEED + 4);
    }

    #[test]
    fn to_sample_clamps_and_rounds() {
        assert_eq!(to_sample(0.0), 128);
        assert_eq!(to_sample(-10.0), 0);
        assert_eq!(to_sample(10.0), 255);
        assert_eq!(to_sample(0.01), 129); // 128.5 rounds up
    }

    #[test]
    fn first_raw_normal_is_pinned() {
        let first = raw_normals(1)[0];
        assert!((first - (-0.7494734120181297)).abs() < 1e-9, "got {first}");
    }
}
