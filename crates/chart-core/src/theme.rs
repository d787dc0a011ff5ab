// File: crates/chart-core/src/theme.rs
// Summary: Color schemes for the gallery (red-green default plus vibrant/pastel/dark presets).

use skia_safe as skia;

fn hex(rgb: u32) -> skia::Color {
    skia::Color::from_argb(255, ((rgb >> 16) & 0xff) as u8, ((rgb >> 8) & 0xff) as u8, (rgb & 0xff) as u8)
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub title: skia::Color,
    pub text: skia::Color,
    pub grid: skia::Color,
    /// Category axis line (x on most charts).
    pub axis_category: skia::Color,
    /// Value axis line.
    pub axis_value: skia::Color,
    /// Two-stop gradient used by bars, histogram and scatter points.
    pub primary: [skia::Color; 2],
    /// Ten-step palette; series pick entries by index the way each chart defines.
    pub gradient: [skia::Color; 10],
    /// Alternating radar web bands.
    pub split_area: [skia::Color; 2],
    pub slice_border: skia::Color,
}

impl Theme {
    pub fn red_green() -> Self {
        Self {
            name: "red-green",
            background: hex(0xffffff),
            title: hex(0x2c3e50),
            text: hex(0x2c3e50),
            grid: hex(0xe6e9ec),
            axis_category: hex(0x90ee90),
            axis_value: hex(0xff6b6b),
            primary: [hex(0x90ee90), hex(0xff6b6b)],
            gradient: [
                hex(0x90ee90), hex(0x7cc47c), hex(0x68b968), hex(0x54ae54), hex(0x40a340),
                hex(0xff6b6b), hex(0xff5252), hex(0xff3838), hex(0xff1f1f), hex(0xff0505),
            ],
            split_area: [
                skia::Color::from_argb(26, 144, 238, 144),
                skia::Color::from_argb(26, 255, 107, 107),
            ],
            slice_border: hex(0xffffff),
        }
    }

    pub fn vibrant() -> Self {
        Self {
            name: "vibrant",
            primary: [hex(0x32cd32), hex(0xdc143c)],
            gradient: [
                hex(0x32cd32), hex(0x228b22), hex(0x2eb82e), hex(0x1f7a1f), hex(0x196619),
                hex(0xdc143c), hex(0xb22222), hex(0xc41e3a), hex(0x9b111e), hex(0x800000),
            ],
            axis_category: hex(0x32cd32),
            axis_value: hex(0xdc143c),
            ..Self::red_green()
        }
    }

    pub fn pastel() -> Self {
        Self {
            name: "pastel",
            primary: [hex(0xd4f1d4), hex(0xf4d4d4)],
            gradient: [
                hex(0xb8e6b8), hex(0xc6ecc6), hex(0xd4f1d4), hex(0xe0f5e0), hex(0xe8f5e8),
                hex(0xf0c2c2), hex(0xf4d4d4), hex(0xf6dede), hex(0xf8e8e8), hex(0xfaf0f0),
            ],
            axis_category: hex(0xa8d8a8),
            axis_value: hex(0xe8a8a8),
            ..Self::red_green()
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            title: skia::Color::from_argb(255, 235, 235, 245),
            text: skia::Color::from_argb(255, 210, 210, 220),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            slice_border: skia::Color::from_argb(255, 18, 18, 20),
            split_area: [
                skia::Color::from_argb(40, 144, 238, 144),
                skia::Color::from_argb(40, 255, 107, 107),
            ],
            ..Self::red_green()
        }
    }

    /// Gradient entry by index, wrapping around the palette.
    pub fn gradient_at(&self, i: usize) -> skia::Color {
        self.gradient[i % self.gradient.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::red_green()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::red_green(), Theme::vibrant(), Theme::pastel(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to red-green.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::red_green()
}

/// `#rrggbb`, or `rgba(r, g, b, a)` when not opaque.
pub fn css_color(c: skia::Color) -> String {
    if c.a() == 255 {
        format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b())
    } else {
        format!("rgba({}, {}, {}, {:.2})", c.r(), c.g(), c.b(), c.a() as f32 / 255.0)
    }
}
