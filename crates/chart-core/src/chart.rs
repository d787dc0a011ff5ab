// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline using Skia CPU raster surfaces.

use std::io::Cursor;
use std::path::Path;

use skia_safe as skia;

use crate::error::{ChartError, Result};
use crate::geometry::PlotRect;
use crate::option::{ChartOption, SeriesOption};
use crate::render;
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    /// Logical size; the surface is `width * pixel_ratio` by `height * pixel_ratio`.
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub pixel_ratio: f32,
    /// Overrides the theme background (downloads use white).
    pub background: Option<skia::Color>,
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            pixel_ratio: 1.0,
            background: None,
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    /// Settings for a "download": doubled pixel ratio on a white background.
    pub fn download() -> Self {
        Self { pixel_ratio: 2.0, background: Some(skia::Color::WHITE), ..Self::default() }
    }

    /// Physical surface size in pixels.
    pub fn surface_size(&self) -> (i32, i32) {
        let r = self.pixel_ratio.max(0.1);
        (
            ((self.width.max(1) as f32) * r).round() as i32,
            ((self.height.max(1) as f32) * r).round() as i32,
        )
    }
}

/// Decoded RGBA8 pixels: `(pixels, width, height, stride)`.
pub type Rgba8 = (Vec<u8>, u32, u32, usize);

pub struct Chart {
    pub option: ChartOption,
    pub theme: Theme,
}

impl Chart {
    pub fn new(option: ChartOption, theme: Theme) -> Self {
        Self { option, theme }
    }

    /// Render the chart to a PNG at `output_png_path`.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &bytes)?;
        tracing::info!(kind = %self.option.kind, path = %path.display(), bytes = bytes.len(), "wrote chart");
        Ok(())
    }

    /// Render the chart and encode it as PNG in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (px, w, h, _) = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(w, h, px)
            .ok_or_else(|| ChartError::Render("pixel buffer does not match surface size".into()))?;
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png)
            .map_err(|e| ChartError::Render(format!("encode PNG failed: {e}")))?;
        Ok(out.into_inner())
    }

    /// Render into an unpremultiplied RGBA8 buffer (row-major, no padding).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<Rgba8> {
        let (w, h) = opts.surface_size();
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| ChartError::Render("failed to create raster surface".into()))?;

        self.draw(surface.canvas(), opts);

        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            return Err(ChartError::Render("read_pixels failed".into()));
        }
        Ok((px, w as u32, h as u32, stride))
    }

    /// Draw onto any canvas in logical coordinates.
    pub fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let ratio = opts.pixel_ratio.max(0.1);
        canvas.clear(opts.background.unwrap_or(self.theme.background));
        canvas.save();
        canvas.scale((ratio, ratio));

        let width = opts.width.max(1) as f32;
        let height = opts.height.max(1) as f32;
        let plot = PlotRect::inset(width, height, &opts.insets);
        let text = opts.draw_labels.then(TextShaper::new);

        if let Some(shaper) = &text {
            shaper.draw(canvas, &self.option.title, width * 0.5, 32.0, 20.0, self.theme.title, Anchor::Center, true);
        }
        if self.option.legend.show {
            draw_legend(canvas, &self.option, &self.theme, width, plot, text.as_ref());
        }

        render::draw_body(canvas, &self.option, &self.theme, plot, text.as_ref());
        canvas.restore();
    }
}

// ---- helpers ----------------------------------------------------------------

/// Legend entries: slices for pie, entries for radar, otherwise one per series.
fn legend_items(option: &ChartOption) -> Vec<(String, skia::Color)> {
    let mut items = Vec::new();
    for s in &option.series {
        match s {
            SeriesOption::Pie { slices, .. } => {
                items.extend(slices.iter().map(|sl| (sl.name.clone(), sl.color.to_skia())));
            }
            SeriesOption::Radar { entries, .. } => {
                items.extend(entries.iter().map(|e| (e.name.clone(), e.color.to_skia())));
            }
            other => items.push((other.name().to_string(), other.swatch().to_skia())),
        }
    }
    items
}

fn draw_legend(
    canvas: &skia::Canvas,
    option: &ChartOption,
    theme: &Theme,
    width: f32,
    plot: PlotRect,
    text: Option<&TextShaper>,
) {
    let items = legend_items(option);
    if items.is_empty() {
        return;
    }
    let mut swatch = skia::Paint::default();
    swatch.set_anti_alias(true);
    let size = 12.0;

    // Entry widths; without text the swatches sit in fixed slots.
    let widths: Vec<f32> = items
        .iter()
        .map(|(name, _)| text.map(|t| t.measure_width(name, size)).unwrap_or(0.0) + 30.0)
        .collect();

    if option.legend.vertical {
        let x = 16.0;
        let mut y = plot.top;
        for (name, color) in &items {
            swatch.set_color(*color);
            canvas.draw_round_rect(skia::Rect::from_xywh(x, y - 9.0, 20.0, 12.0), 3.0, 3.0, &swatch);
            if let Some(t) = text {
                t.draw(canvas, name, x + 26.0, y + 2.0, size, theme.text, Anchor::Left, false);
            }
            y += 22.0;
        }
    } else {
        let total: f32 = widths.iter().sum();
        let mut x = (width - total).max(0.0) * 0.5;
        let y = 62.0;
        for ((name, color), w) in items.iter().zip(&widths) {
            swatch.set_color(*color);
            canvas.draw_round_rect(skia::Rect::from_xywh(x, y - 9.0, 20.0, 12.0), 3.0, 3.0, &swatch);
            if let Some(t) = text {
                t.draw(canvas, name, x + 24.0, y + 2.0, size, theme.text, Anchor::Left, false);
            }
            x += w;
        }
    }
}
