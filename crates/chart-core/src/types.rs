// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, colors, paddings).

use serde::{Serialize, Serializer};
use skia_safe as skia;

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        // room for title + legend on top, tick labels left/bottom
        Self::new(80, 40, 84, 64)
    }
}

/// Renderer-independent RGBA color; serializes as a CSS color string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub fn to_skia(self) -> skia::Color {
        skia::Color::from_argb(self.a, self.r, self.g, self.b)
    }
}

impl From<skia::Color> for Rgba {
    fn from(c: skia::Color) -> Self {
        Self::new(c.r(), c.g(), c.b(), c.a())
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&crate::theme::css_color(self.to_skia()))
    }
}
