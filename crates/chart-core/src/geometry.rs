// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::types::Insets;

/// Plot area in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotRect {
    /// Surface of `width` x `height` minus `insets`; never inverted.
    pub fn inset(width: f32, height: f32, insets: &Insets) -> Self {
        let left = insets.left as f32;
        let top = insets.top as f32;
        let right = (width - insets.right as f32).max(left + 1.0);
        let bottom = (height - insets.bottom as f32).max(top + 1.0);
        Self { left, top, right, bottom }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
    pub fn center(&self) -> (f32, f32) {
        ((self.left + self.right) * 0.5, (self.top + self.bottom) * 0.5)
    }
    /// Half of the shorter side.
    pub fn half_extent(&self) -> f32 {
        self.width().min(self.height()) * 0.5
    }
}

/// Point at `radius` from `center`, `angle_deg` clockwise from 12 o'clock.
#[inline]
pub fn polar(center: (f32, f32), radius: f32, angle_deg: f32) -> (f32, f32) {
    let a = (angle_deg - 90.0).to_radians();
    (center.0 + radius * a.cos(), center.1 + radius * a.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_never_inverts() {
        let r = PlotRect::inset(50.0, 50.0, &Insets::default());
        assert!(r.width() > 0.0 && r.height() > 0.0);
    }

    #[test]
    fn polar_zero_is_up() {
        let (x, y) = polar((100.0, 100.0), 10.0, 0.0);
        assert!((x - 100.0).abs() < 1e-4);
        assert!((y - 90.0).abs() < 1e-4);
        let (x, _) = polar((100.0, 100.0), 10.0, 90.0);
        assert!((x - 110.0).abs() < 1e-4);
    }
}
