// File: crates/chart-core/src/render.rs
// Summary: Per-kind drawing of chart bodies (cartesian frame, bars, lines, pie, radar...).

use skia_safe as skia;

use crate::axis::Axis;
use crate::geometry::{polar, PlotRect};
use crate::grid::linspace;
use crate::option::{AxisOption, ChartOption, Fill, RadarIndicator, SeriesOption};
use crate::scale::{BandScale, ValueScale};
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::types::Rgba;

const TICK_SIZE: f32 = 11.0;
const RADAR_LEVELS: usize = 5;

/// Resolved coordinate system for cartesian charts.
struct Frame {
    plot: PlotRect,
    /// Category bands along x (vertical charts) or y (horizontal bars).
    bands: Option<BandScale>,
    /// Scale for the value axis.
    value: ValueScale,
    value_axis: Axis,
    /// Second value scale on x, for scatter.
    x_value: Option<(ValueScale, Axis)>,
    horizontal: bool,
}

impl Frame {
    fn resolve(option: &ChartOption, plot: PlotRect) -> Self {
        let (lo, hi) = option.value_extent();
        let horizontal = option.is_horizontal();
        let value_axis_opt = if horizontal { option.x_axis.as_ref() } else { option.y_axis.as_ref() };
        let value_name = value_axis_opt.and_then(AxisOption::name).unwrap_or_default();
        let value_axis = Axis::nice(value_name, lo, hi);

        let value = if horizontal {
            ValueScale::new(plot.left, plot.right, value_axis.min, value_axis.max)
        } else {
            ValueScale::new(plot.bottom, plot.top, value_axis.min, value_axis.max)
        };

        let count = option.category_count();
        let bands = (count > 0).then(|| {
            if horizontal {
                BandScale::new(plot.top, plot.bottom, count)
            } else {
                BandScale::new(plot.left, plot.right, count)
            }
        });

        let x_value = match option.x_axis.as_ref() {
            Some(AxisOption::Value { name, .. }) if !horizontal => {
                let (xl, xh) = option.x_extent();
                let axis = Axis::nice(name.clone().unwrap_or_default(), xl, xh);
                Some((ValueScale::new(plot.left, plot.right, axis.min, axis.max), axis))
            }
            _ => None,
        };

        Self { plot, bands, value, value_axis, x_value, horizontal }
    }

    /// Screen point for (category position or x value, data value).
    fn point(&self, along: f32, v: f64) -> (f32, f32) {
        if self.horizontal { (self.value.to_px(v), along) } else { (along, self.value.to_px(v)) }
    }
}

pub(crate) fn draw_body(
    canvas: &skia::Canvas,
    option: &ChartOption,
    theme: &Theme,
    plot: PlotRect,
    text: Option<&TextShaper>,
) {
    if !option.kind.has_axes() {
        for s in &option.series {
            match s {
                SeriesOption::Pie { .. } => draw_pie(canvas, s, option, theme, plot, text),
                SeriesOption::Radar { entries, .. } => {
                    let indicators = option.radar.as_deref().unwrap_or_default();
                    draw_radar_web(canvas, indicators, theme, plot, text);
                    for e in entries {
                        draw_radar_entry(canvas, indicators, &e.values, e.color, e.fill, plot);
                    }
                }
                _ => {}
            }
        }
        return;
    }

    let frame = Frame::resolve(option, plot);
    draw_frame(canvas, option, theme, &frame, text);

    let bar_count = option.series.iter().filter(|s| matches!(s, SeriesOption::Bar { .. })).count();
    let error_count = option.series.iter().filter(|s| matches!(s, SeriesOption::ErrorBar { .. })).count();
    let mut bar_slot = 0usize;
    let mut error_slot = 0usize;
    let mut stacks: Vec<(String, Vec<f64>)> = Vec::new();

    for s in &option.series {
        match s {
            SeriesOption::Bar { data, fill, .. } => {
                draw_bars(canvas, &frame, data, *fill, bar_slot, bar_count, option.show_data_labels, theme, text);
                bar_slot += 1;
            }
            SeriesOption::Line { data, smooth, stack, stroke, point, line_width, area, .. } => {
                let base = match stack {
                    Some(key) => {
                        let idx = match stacks.iter().position(|(k, _)| k == key) {
                            Some(i) => i,
                            None => {
                                stacks.push((key.clone(), vec![0.0; data.len()]));
                                stacks.len() - 1
                            }
                        };
                        let below = stacks[idx].1.clone();
                        for (acc, v) in stacks[idx].1.iter_mut().zip(data) { *acc += v; }
                        Some(below)
                    }
                    None => None,
                };
                let top: Vec<f64> = match &base {
                    Some(b) => b.iter().zip(data).map(|(b, v)| b + v).collect(),
                    None => data.clone(),
                };
                draw_line(canvas, &frame, &top, base.as_deref(), *smooth, *stroke, *point, *line_width, *area);
            }
            SeriesOption::Scatter { points, symbol_size, fill, .. } => {
                draw_scatter(canvas, &frame, points, *symbol_size, *fill);
            }
            SeriesOption::BoxPlot { boxes, fill, border, .. } => {
                draw_boxes(canvas, &frame, boxes, *fill, *border);
            }
            SeriesOption::ErrorBar { values, errors, point, whisker, .. } => {
                draw_error_bars(canvas, &frame, values, errors, *point, *whisker, error_slot, error_count);
                error_slot += 1;
            }
            SeriesOption::Pie { .. } | SeriesOption::Radar { .. } => {}
        }
    }
}

// ---- cartesian ----------------------------------------------------------------

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Stroke);
    p.set_stroke_width(width);
    p.set_color(color);
    p
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Fill);
    p.set_color(color);
    p
}

/// Fill paint with a linear gradient from `a` (fill.from) to `b` (fill.to).
fn gradient_paint(fill: Fill, a: (f32, f32), b: (f32, f32)) -> skia::Paint {
    let mut p = fill_paint(fill.from.to_skia());
    if fill.from != fill.to {
        let colors = [fill.from.to_skia(), fill.to.to_skia()];
        let shader = skia::Shader::linear_gradient((a, b), &colors[..], None, skia::TileMode::Clamp, None, None);
        if let Some(shader) = shader {
            p.set_shader(shader);
        }
    }
    p
}

fn draw_frame(canvas: &skia::Canvas, option: &ChartOption, theme: &Theme, f: &Frame, text: Option<&TextShaper>) {
    let p = f.plot;
    let grid = stroke_paint(theme.grid, 1.0);

    // value grid lines
    if option.show_grid {
        for &t in &f.value_axis.ticks {
            let v = f.value.to_px(t);
            if f.horizontal {
                canvas.draw_line((v, p.top), (v, p.bottom), &grid);
            } else {
                canvas.draw_line((p.left, v), (p.right, v), &grid);
            }
        }
        if let Some((xs, xa)) = &f.x_value {
            for &t in &xa.ticks {
                let x = xs.to_px(t);
                canvas.draw_line((x, p.top), (x, p.bottom), &grid);
            }
        }
    }

    let x_line = option.x_axis.as_ref().map(AxisOption::line).unwrap_or(Rgba::from(theme.text));
    let y_line = option.y_axis.as_ref().map(AxisOption::line).unwrap_or(Rgba::from(theme.text));
    canvas.draw_line((p.left, p.bottom), (p.right, p.bottom), &stroke_paint(x_line.to_skia(), 1.5));
    canvas.draw_line((p.left, p.top), (p.left, p.bottom), &stroke_paint(y_line.to_skia(), 1.5));

    let Some(t) = text else { return };

    // value tick labels
    for &tick in &f.value_axis.ticks {
        let label = Axis::format_tick(tick);
        let v = f.value.to_px(tick);
        if f.horizontal {
            t.draw(canvas, &label, v, p.bottom + 18.0, TICK_SIZE, theme.text, Anchor::Center, false);
        } else {
            t.draw(canvas, &label, p.left - 8.0, v + 4.0, TICK_SIZE, theme.text, Anchor::Right, false);
        }
    }
    if let Some((xs, xa)) = &f.x_value {
        for &tick in &xa.ticks {
            let label = Axis::format_tick(tick);
            t.draw(canvas, &label, xs.to_px(tick), p.bottom + 18.0, TICK_SIZE, theme.text, Anchor::Center, false);
        }
        if !xa.label.is_empty() {
            t.draw(canvas, &xa.label, p.right, p.bottom + 40.0, 12.0, theme.text, Anchor::Right, false);
        }
    }

    // category labels
    let cat_axis = if f.horizontal { option.y_axis.as_ref() } else { option.x_axis.as_ref() };
    if let (Some(AxisOption::Category { labels, name, .. }), Some(bands)) = (cat_axis, f.bands) {
        // thin out crowded labels
        let stride = if f.horizontal { 1 } else { ((labels.len() as f32 * 48.0) / p.width()).ceil().max(1.0) as usize };
        for (i, label) in labels.iter().enumerate().step_by(stride) {
            let c = bands.center(i);
            if f.horizontal {
                t.draw(canvas, label, p.left - 8.0, c + 4.0, TICK_SIZE, theme.text, Anchor::Right, false);
            } else {
                t.draw(canvas, label, c, p.bottom + 18.0, TICK_SIZE, theme.text, Anchor::Center, false);
            }
        }
        if let Some(name) = name {
            t.draw(canvas, name, p.right, p.bottom + 40.0, 12.0, theme.text, Anchor::Right, false);
        }
    }

    // value axis name
    if !f.value_axis.label.is_empty() {
        if f.horizontal {
            t.draw(canvas, &f.value_axis.label, p.right, p.bottom + 40.0, 12.0, theme.text, Anchor::Right, false);
        } else {
            t.draw(canvas, &f.value_axis.label, p.left, p.top - 10.0, 12.0, theme.text, Anchor::Left, false);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_bars(
    canvas: &skia::Canvas,
    f: &Frame,
    data: &[f64],
    fill: Fill,
    slot: usize,
    slots: usize,
    labels: bool,
    theme: &Theme,
    text: Option<&TextShaper>,
) {
    let Some(bands) = f.bands else { return };
    let group = bands.band().abs() * 0.7;
    let bar = group / slots.max(1) as f32;
    let zero = f.value.to_px(0.0_f64.clamp(f.value_axis.min, f.value_axis.max));

    for (i, &v) in data.iter().enumerate() {
        let start = bands.center(i) - group * 0.5 * bands.band().signum() + bar * slot as f32 * bands.band().signum();
        let end = start + bar * bands.band().signum() * 0.92;
        let vpx = f.value.to_px(v);
        let (rect, from, to) = if f.horizontal {
            (
                skia::Rect::from_ltrb(zero.min(vpx), start.min(end), zero.max(vpx), start.max(end)),
                (vpx, 0.0),
                (zero, 0.0),
            )
        } else {
            (
                skia::Rect::from_ltrb(start.min(end), zero.min(vpx), start.max(end), zero.max(vpx)),
                (0.0, vpx),
                (0.0, zero),
            )
        };
        canvas.draw_rect(rect, &gradient_paint(fill, from, to));

        if labels {
            if let Some(t) = text {
                let label = Axis::format_tick(v);
                if f.horizontal {
                    t.draw(canvas, &label, rect.right() + 4.0, rect.center_y() + 4.0, 10.0, theme.text, Anchor::Left, false);
                } else {
                    t.draw(canvas, &label, rect.center_x(), rect.top() - 4.0, 10.0, theme.text, Anchor::Center, false);
                }
            }
        }
    }
}

/// Path through `pts`; smoothing uses horizontal-tangent cubic segments.
fn polyline(pts: &[(f32, f32)], smooth: bool) -> skia::Path {
    let mut path = skia::Path::new();
    let Some(&first) = pts.first() else { return path };
    path.move_to(first);
    for w in pts.windows(2) {
        let (a, b) = (w[0], w[1]);
        if smooth {
            let mx = (a.0 + b.0) * 0.5;
            path.cubic_to((mx, a.1), (mx, b.1), b);
        } else {
            path.line_to(b);
        }
    }
    path
}

#[allow(clippy::too_many_arguments)]
fn draw_line(
    canvas: &skia::Canvas,
    f: &Frame,
    top: &[f64],
    base: Option<&[f64]>,
    smooth: bool,
    stroke: Rgba,
    point: Rgba,
    line_width: f32,
    area: Option<Fill>,
) {
    let Some(bands) = f.bands else { return };
    let pts: Vec<(f32, f32)> = top.iter().enumerate().map(|(i, &v)| f.point(bands.center(i), v)).collect();
    if pts.is_empty() {
        return;
    }

    if let Some(fill) = area {
        let mut path = polyline(&pts, smooth);
        let floor: Vec<(f32, f32)> = match base {
            Some(b) => b.iter().enumerate().map(|(i, &v)| f.point(bands.center(i), v)).rev().collect(),
            None => {
                let zero = f.value_axis.min.max(0.0).min(f.value_axis.max);
                vec![f.point(bands.center(pts.len() - 1), zero), f.point(bands.center(0), zero)]
            }
        };
        for (i, p) in floor.iter().enumerate() {
            if smooth && base.is_some() && i > 0 {
                let prev = floor[i - 1];
                let mx = (prev.0 + p.0) * 0.5;
                path.cubic_to((mx, prev.1), (mx, p.1), *p);
            } else {
                path.line_to(*p);
            }
        }
        path.close();
        let (a, b) = if f.horizontal {
            ((f.plot.right, 0.0), (f.plot.left, 0.0))
        } else {
            ((0.0, f.plot.top), (0.0, f.plot.bottom))
        };
        canvas.draw_path(&path, &gradient_paint(fill, a, b));
    }

    canvas.draw_path(&polyline(&pts, smooth), &stroke_paint(stroke.to_skia(), line_width));
    let dot = fill_paint(point.to_skia());
    for &p in &pts {
        canvas.draw_circle(p, line_width + 1.0, &dot);
    }
}

fn draw_scatter(canvas: &skia::Canvas, f: &Frame, points: &[[f64; 2]], symbol_size: f32, fill: Fill) {
    let Some((xs, _)) = &f.x_value else { return };
    let r = symbol_size * 0.5;
    let outline = stroke_paint(fill.to.to_skia(), 1.5);
    for p in points {
        let c = (xs.to_px(p[0]), f.value.to_px(p[1]));
        let paint = gradient_paint(fill, (c.0 - r, c.1 - r), (c.0 + r, c.1 + r));
        canvas.draw_circle(c, r, &paint);
        canvas.draw_circle(c, r, &outline);
    }
}

fn draw_boxes(canvas: &skia::Canvas, f: &Frame, boxes: &[[f64; 5]], fill: Rgba, border: Rgba) {
    let Some(bands) = f.bands else { return };
    let half = bands.band().abs() * 0.25;
    let body = fill_paint(fill.with_alpha(200).to_skia());
    let edge = stroke_paint(border.to_skia(), 2.0);
    for (i, b) in boxes.iter().enumerate() {
        let c = bands.center(i);
        let [lo, q1, med, q3, hi] = b.map(|v| f.value.to_px(v));
        // whiskers and caps
        canvas.draw_line((c, hi), (c, q3), &edge);
        canvas.draw_line((c, q1), (c, lo), &edge);
        canvas.draw_line((c - half * 0.5, hi), (c + half * 0.5, hi), &edge);
        canvas.draw_line((c - half * 0.5, lo), (c + half * 0.5, lo), &edge);
        let rect = skia::Rect::from_ltrb(c - half, q3.min(q1), c + half, q3.max(q1));
        canvas.draw_rect(rect, &body);
        canvas.draw_rect(rect, &edge);
        canvas.draw_line((c - half, med), (c + half, med), &stroke_paint(border.to_skia(), 3.0));
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_error_bars(
    canvas: &skia::Canvas,
    f: &Frame,
    values: &[f64],
    errors: &[f64],
    point: Rgba,
    whisker: Rgba,
    slot: usize,
    slots: usize,
) {
    let Some(bands) = f.bands else { return };
    let spread = bands.band().abs() * 0.4;
    let offset = if slots > 1 { -spread * 0.5 + spread * slot as f32 / (slots - 1) as f32 } else { 0.0 };
    let line = stroke_paint(whisker.to_skia(), 2.0);
    let dot = fill_paint(point.to_skia());
    for (i, (&v, &e)) in values.iter().zip(errors).enumerate() {
        let x = bands.center(i) + offset;
        let (top, bottom) = (f.value.to_px(v + e), f.value.to_px(v - e));
        canvas.draw_line((x, top), (x, bottom), &line);
        canvas.draw_line((x - 6.0, top), (x + 6.0, top), &line);
        canvas.draw_line((x - 6.0, bottom), (x + 6.0, bottom), &line);
        canvas.draw_circle((x, f.value.to_px(v)), 5.0, &dot);
    }
}

// ---- polar ----------------------------------------------------------------

/// Start angle and sweep (degrees, clockwise from 12 o'clock) of each slice.
pub(crate) fn pie_angles(values: &[f64]) -> Vec<(f32, f32)> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = 0.0f32;
    values
        .iter()
        .map(|&v| {
            let sweep = (v.max(0.0) / total * 360.0) as f32;
            let out = (start, sweep);
            start += sweep;
            out
        })
        .collect()
}

fn draw_pie(
    canvas: &skia::Canvas,
    series: &SeriesOption,
    option: &ChartOption,
    theme: &Theme,
    plot: PlotRect,
    text: Option<&TextShaper>,
) {
    let SeriesOption::Pie { slices, inner_radius, outer_radius, border, .. } = series else { return };
    let center = plot.center();
    let outer = plot.half_extent() / 0.7 * outer_radius.clamp(0.05, 1.0) * 0.9;
    let oval = skia::Rect::from_xywh(center.0 - outer, center.1 - outer, outer * 2.0, outer * 2.0);
    let values: Vec<f64> = slices.iter().map(|s| s.value).collect();
    let total: f64 = values.iter().sum();
    let edge = stroke_paint(border.to_skia(), 2.0);

    for (slice, (start, sweep)) in slices.iter().zip(pie_angles(&values)) {
        // skia measures from 3 o'clock
        canvas.draw_arc(oval, start - 90.0, sweep, true, &fill_paint(slice.color.to_skia()));
        canvas.draw_arc(oval, start - 90.0, sweep, true, &edge);

        if let (true, Some(t)) = (option.show_data_labels, text) {
            let (lx, ly) = polar(center, outer + 18.0, start + sweep * 0.5);
            let pct = format!("{} ({:.0}%)", slice.name, slice.value / total * 100.0);
            let anchor = if lx >= center.0 { Anchor::Left } else { Anchor::Right };
            t.draw(canvas, &pct, lx, ly + 4.0, TICK_SIZE, theme.text, anchor, false);
        }
    }

    if *inner_radius > 0.0 {
        let inner = outer * (inner_radius / outer_radius).clamp(0.0, 0.95);
        canvas.draw_circle(center, inner, &fill_paint(border.to_skia()));
    }
}

fn radar_radius(plot: PlotRect) -> f32 {
    plot.half_extent() * 0.8
}

fn draw_radar_web(
    canvas: &skia::Canvas,
    indicators: &[RadarIndicator],
    theme: &Theme,
    plot: PlotRect,
    text: Option<&TextShaper>,
) {
    let n = indicators.len();
    if n < 3 {
        return;
    }
    let center = plot.center();
    let radius = radar_radius(plot);
    let levels = linspace(0.0, 1.0, RADAR_LEVELS + 1);

    // outermost band first so inner bands paint over it
    for (lvl, frac) in levels.iter().enumerate().skip(1).rev() {
        let mut path = skia::Path::new();
        for k in 0..n {
            let p = polar(center, radius * *frac as f32, 360.0 * k as f32 / n as f32);
            if k == 0 { path.move_to(p); } else { path.line_to(p); }
        }
        path.close();
        canvas.draw_path(&path, &fill_paint(theme.split_area[lvl % 2]));
        canvas.draw_path(&path, &stroke_paint(theme.grid, 1.0));
    }

    let spoke = stroke_paint(theme.grid, 1.0);
    for (k, ind) in indicators.iter().enumerate() {
        let angle = 360.0 * k as f32 / n as f32;
        canvas.draw_line(center, polar(center, radius, angle), &spoke);
        if let Some(t) = text {
            let (x, y) = polar(center, radius + 16.0, angle);
            let anchor = if (x - center.0).abs() < 1.0 { Anchor::Center } else if x > center.0 { Anchor::Left } else { Anchor::Right };
            t.draw(canvas, &ind.name, x, y + 4.0, TICK_SIZE, theme.text, anchor, false);
        }
    }
}

/// Vertices of one radar entry; values are clamped to each indicator's max.
pub(crate) fn radar_points(indicators: &[RadarIndicator], values: &[f64], center: (f32, f32), radius: f32) -> Vec<(f32, f32)> {
    let n = indicators.len();
    indicators
        .iter()
        .zip(values)
        .enumerate()
        .map(|(k, (ind, &v))| {
            let frac = if ind.max > 0.0 { (v / ind.max).clamp(0.0, 1.0) } else { 0.0 };
            polar(center, radius * frac as f32, 360.0 * k as f32 / n as f32)
        })
        .collect()
}

fn draw_radar_entry(
    canvas: &skia::Canvas,
    indicators: &[RadarIndicator],
    values: &[f64],
    color: Rgba,
    fill: Rgba,
    plot: PlotRect,
) {
    let pts = radar_points(indicators, values, plot.center(), radar_radius(plot));
    if pts.len() < 3 {
        return;
    }
    let mut path = polyline(&pts, false);
    path.close();
    canvas.draw_path(&path, &fill_paint(fill.to_skia()));
    canvas.draw_path(&path, &stroke_paint(color.to_skia(), 2.0));
    let dot = fill_paint(color.to_skia());
    for &p in &pts {
        canvas.draw_circle(p, 3.0, &dot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pie_angles_cover_full_circle() {
        let angles = pie_angles(&[28.0, 22.0, 18.0, 12.0, 8.0, 6.0, 4.0, 2.0]);
        let (start, sweep) = *angles.last().unwrap();
        assert!((start + sweep - 360.0).abs() < 1e-3);
        assert_eq!(angles[0].0, 0.0);
        assert!((angles[0].1 - 100.8).abs() < 1e-3);
    }

    #[test]
    fn pie_angles_ignore_empty_total() {
        assert!(pie_angles(&[0.0, 0.0]).is_empty());
    }

    #[test]
    fn radar_points_scale_by_indicator_max() {
        let inds = vec![
            RadarIndicator { name: "a".into(), max: 10.0 },
            RadarIndicator { name: "b".into(), max: 100.0 },
            RadarIndicator { name: "c".into(), max: 1.0 },
        ];
        let pts = radar_points(&inds, &[5.0, 100.0, 7.0], (0.0, 0.0), 10.0);
        // first spoke points up, half way out
        assert!((pts[0].1 + 5.0).abs() < 1e-4);
        // overshoot is clamped to the rim
        let r2 = (pts[2].0.powi(2) + pts[2].1.powi(2)).sqrt();
        assert!((r2 - 10.0).abs() < 1e-3);
    }
}
