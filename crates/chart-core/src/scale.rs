// File: crates/chart-core/src/scale.rs
// Summary: Value (linear) and band (categorical) scales mapping data to pixels.

/// Value coordinate (e.g., a bar height or a fuel economy figure).
pub type Value = f64;

/// Linear scale mapping `[vmin, vmax]` onto `[start_px, end_px]`.
/// `end_px` may be smaller than `start_px` (screen Y grows downward).
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub start_px: f32,
    pub end_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new(start_px: f32, end_px: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { start_px, end_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
    #[inline]
    pub fn to_px(&self, v: Value) -> f32 {
        let t = (v - self.vmin) / (self.vmax - self.vmin);
        self.start_px + t as f32 * (self.end_px - self.start_px)
    }
}

/// Evenly divides `[start_px, end_px]` into `count` bands, one per category.
#[derive(Clone, Copy, Debug)]
pub struct BandScale {
    pub start_px: f32,
    pub end_px: f32,
    pub count: usize,
}

impl BandScale {
    pub fn new(start_px: f32, end_px: f32, count: usize) -> Self {
        Self { start_px, end_px, count: count.max(1) }
    }
    /// Signed band size in pixels.
    #[inline]
    pub fn band(&self) -> f32 {
        (self.end_px - self.start_px) / self.count as f32
    }
    /// Center of band `i`.
    #[inline]
    pub fn center(&self, i: usize) -> f32 {
        self.start_px + self.band() * (i as f32 + 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_scale_flips_screen_y() {
        let s = ValueScale::new(500.0, 100.0, 0.0, 200.0);
        assert_eq!(s.to_px(0.0), 500.0);
        assert_eq!(s.to_px(200.0), 100.0);
    }

    #[test]
    fn flat_value_scale_does_not_divide_by_zero() {
        let s = ValueScale::new(0.0, 100.0, 3.0, 3.0);
        assert!(s.to_px(3.0).is_finite());
    }

    #[test]
    fn band_centers() {
        let b = BandScale::new(0.0, 300.0, 3);
        assert_eq!(b.center(0), 50.0);
        assert_eq!(b.center(2), 250.0);
    }
}
