// File: crates/chart-core/src/option.rs
// Summary: Declarative chart options; one builder per gallery chart kind.
// Notes:
// - Options are plain data. The renderer in `chart.rs` consumes them, and they
//   serialize to JSON for inspection or for handing to another renderer.
// - Palette indices follow the gallery's conventions: line series take
//   gradient[2i] (stroke) and gradient[2i+1] (points), stacked areas fade from
//   gradient[3i] to gradient[3i+6], pie slices cycle the gradient.

use serde::{Deserialize, Serialize};

use crate::dataset::{self, CategoryTable};
use crate::error::Result;
use crate::grid::nice_ceil;
use crate::histogram::{compute_histogram, DEFAULT_BIN_COUNT};
use crate::kind::ChartKind;
use crate::synthetic::generate_samples;
use crate::theme::Theme;
use crate::types::Rgba;

/// User-facing display switches (legend, grid, labels, animation, dataset toggles).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    pub show_legend: bool,
    pub show_grid: bool,
    pub show_data_labels: bool,
    pub animation_ms: u32,
    /// Bar chart shows the grouped table instead of the single series.
    pub multi_bar: bool,
    /// Pie chart renders as a ring.
    pub donut: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_legend: true,
            show_grid: true,
            show_data_labels: false,
            animation_ms: 1000,
            multi_bar: false,
            donut: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TooltipTrigger {
    Axis,
    Item,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
    pub show: bool,
    pub vertical: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Animation {
    pub enabled: bool,
    pub duration_ms: u32,
    pub easing: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AxisOption {
    Category {
        labels: Vec<String>,
        name: Option<String>,
        line: Rgba,
    },
    Value {
        name: Option<String>,
        line: Rgba,
    },
}

impl AxisOption {
    pub fn is_category(&self) -> bool {
        matches!(self, AxisOption::Category { .. })
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            AxisOption::Category { name, .. } | AxisOption::Value { name, .. } => name.as_deref(),
        }
    }

    pub fn line(&self) -> Rgba {
        match self {
            AxisOption::Category { line, .. } | AxisOption::Value { line, .. } => *line,
        }
    }
}

/// Two-stop linear fill, `from` at the value end, `to` at the baseline.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Fill {
    pub from: Rgba,
    pub to: Rgba,
}

impl Fill {
    pub const fn solid(c: Rgba) -> Self {
        Self { from: c, to: c }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
    pub color: Rgba,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarIndicator {
    pub name: String,
    pub max: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarEntry {
    pub name: String,
    pub values: Vec<f64>,
    pub color: Rgba,
    pub fill: Rgba,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SeriesOption {
    #[serde(rename_all = "camelCase")]
    Line {
        name: String,
        data: Vec<f64>,
        smooth: bool,
        stack: Option<String>,
        stroke: Rgba,
        point: Rgba,
        line_width: f32,
        area: Option<Fill>,
    },
    #[serde(rename_all = "camelCase")]
    Bar {
        name: String,
        data: Vec<f64>,
        fill: Fill,
    },
    #[serde(rename_all = "camelCase")]
    Pie {
        name: String,
        slices: Vec<PieSlice>,
        /// Fractions of half the plot's shorter side.
        inner_radius: f32,
        outer_radius: f32,
        border: Rgba,
    },
    #[serde(rename_all = "camelCase")]
    Scatter {
        name: String,
        points: Vec<[f64; 2]>,
        symbol_size: f32,
        fill: Fill,
    },
    #[serde(rename_all = "camelCase")]
    BoxPlot {
        name: String,
        /// `[min, q1, median, q3, max]` per category.
        boxes: Vec<[f64; 5]>,
        fill: Rgba,
        border: Rgba,
    },
    #[serde(rename_all = "camelCase")]
    Radar {
        name: String,
        entries: Vec<RadarEntry>,
    },
    #[serde(rename_all = "camelCase")]
    ErrorBar {
        name: String,
        values: Vec<f64>,
        errors: Vec<f64>,
        point: Rgba,
        whisker: Rgba,
    },
}

impl SeriesOption {
    pub fn name(&self) -> &str {
        match self {
            SeriesOption::Line { name, .. }
            | SeriesOption::Bar { name, .. }
            | SeriesOption::Pie { name, .. }
            | SeriesOption::Scatter { name, .. }
            | SeriesOption::BoxPlot { name, .. }
            | SeriesOption::Radar { name, .. }
            | SeriesOption::ErrorBar { name, .. } => name,
        }
    }

    /// Representative color for legend swatches.
    pub fn swatch(&self) -> Rgba {
        match self {
            SeriesOption::Line { stroke, .. } => *stroke,
            SeriesOption::Bar { fill, .. } | SeriesOption::Scatter { fill, .. } => fill.from,
            SeriesOption::Pie { slices, .. } => slices.first().map(|s| s.color).unwrap_or(Rgba::new(0, 0, 0, 255)),
            SeriesOption::BoxPlot { fill, .. } => *fill,
            SeriesOption::Radar { entries, .. } => entries.first().map(|e| e.color).unwrap_or(Rgba::new(0, 0, 0, 255)),
            SeriesOption::ErrorBar { point, .. } => *point,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOption {
    pub kind: ChartKind,
    pub title: String,
    pub tooltip: TooltipTrigger,
    pub legend: Legend,
    pub show_grid: bool,
    pub show_data_labels: bool,
    pub animation: Animation,
    pub x_axis: Option<AxisOption>,
    pub y_axis: Option<AxisOption>,
    pub radar: Option<Vec<RadarIndicator>>,
    pub series: Vec<SeriesOption>,
}

impl ChartOption {
    fn base(kind: ChartKind, display: &DisplayOptions) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            tooltip: TooltipTrigger::Axis,
            legend: Legend { show: display.show_legend, vertical: false },
            show_grid: display.show_grid,
            show_data_labels: display.show_data_labels,
            animation: Animation {
                enabled: display.animation_ms > 0,
                duration_ms: display.animation_ms,
                easing: "cubicOut",
            },
            x_axis: None,
            y_axis: None,
            radar: None,
            series: Vec::new(),
        }
    }

    /// Bars run left-to-right when categories sit on the y axis.
    pub fn is_horizontal(&self) -> bool {
        self.y_axis.as_ref().is_some_and(AxisOption::is_category)
    }

    /// Number of categories on whichever axis is categorical.
    pub fn category_count(&self) -> usize {
        [&self.x_axis, &self.y_axis]
            .into_iter()
            .flatten()
            .find_map(|a| match a {
                AxisOption::Category { labels, .. } => Some(labels.len()),
                AxisOption::Value { .. } => None,
            })
            .unwrap_or(0)
    }

    /// Range of the value axis implied by the series (stacks summed,
    /// error whiskers included, bars anchored at zero).
    pub fn value_extent(&self) -> (f64, f64) {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        let mut stacks: Vec<(String, Vec<f64>)> = Vec::new();
        let mut include = |v: f64| {
            lo = lo.min(v);
            hi = hi.max(v);
        };
        for s in &self.series {
            match s {
                SeriesOption::Line { data, stack: Some(key), .. } => {
                    match stacks.iter_mut().find(|(k, _)| k == key) {
                        Some((_, acc)) => {
                            for (a, v) in acc.iter_mut().zip(data) { *a += v; }
                        }
                        None => stacks.push((key.clone(), data.clone())),
                    }
                    include(0.0);
                }
                SeriesOption::Line { data, .. } => data.iter().copied().for_each(&mut include),
                SeriesOption::Bar { data, .. } => {
                    include(0.0);
                    data.iter().copied().for_each(&mut include);
                }
                SeriesOption::Scatter { points, .. } => points.iter().for_each(|p| include(p[1])),
                SeriesOption::BoxPlot { boxes, .. } => boxes.iter().for_each(|b| {
                    include(b[0]);
                    include(b[4]);
                }),
                SeriesOption::ErrorBar { values, errors, .. } => {
                    for (v, e) in values.iter().zip(errors) {
                        include(v - e);
                        include(v + e);
                    }
                }
                SeriesOption::Pie { .. } | SeriesOption::Radar { .. } => {}
            }
        }
        for (_, acc) in &stacks {
            acc.iter().copied().for_each(&mut include);
        }
        if lo.is_finite() && hi.is_finite() { (lo, hi) } else { (0.0, 1.0) }
    }

    /// X range for value-typed x axes (scatter).
    pub fn x_extent(&self) -> (f64, f64) {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for s in &self.series {
            if let SeriesOption::Scatter { points, .. } = s {
                for p in points {
                    lo = lo.min(p[0]);
                    hi = hi.max(p[0]);
                }
            }
        }
        if lo.is_finite() && hi.is_finite() { (lo, hi) } else { (0.0, 1.0) }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn rgba(c: skia_safe::Color) -> Rgba {
    Rgba::from(c)
}

fn category(labels: &[&str], name: Option<&str>, line: Rgba) -> AxisOption {
    AxisOption::Category {
        labels: labels.iter().map(|s| s.to_string()).collect(),
        name: name.map(str::to_string),
        line,
    }
}

fn value(name: Option<&str>, line: Rgba) -> AxisOption {
    AxisOption::Value { name: name.map(str::to_string), line }
}

fn vertical_fill(theme: &Theme) -> Fill {
    Fill { from: rgba(theme.primary[0]), to: rgba(theme.primary[1]) }
}

/// Build the option for `kind` under the current display switches.
pub fn build_option(kind: ChartKind, display: &DisplayOptions, theme: &Theme) -> Result<ChartOption> {
    let mut opt = ChartOption::base(kind, display);
    let cat_line = rgba(theme.axis_category);
    let val_line = rgba(theme.axis_value);

    match kind {
        ChartKind::Line => {
            let t = dataset::line();
            opt.x_axis = Some(category(&t.labels, None, cat_line));
            opt.y_axis = Some(value(Some("MPG"), val_line));
            opt.series = t
                .datasets
                .into_iter()
                .enumerate()
                .map(|(i, d)| SeriesOption::Line {
                    name: d.label.to_string(),
                    data: d.values,
                    smooth: true,
                    stack: None,
                    stroke: rgba(theme.gradient_at(i * 2)),
                    point: rgba(theme.gradient_at(i * 2 + 1)),
                    line_width: 3.0,
                    area: (i == 0).then(|| Fill {
                        from: rgba(theme.primary[0]).with_alpha(77),
                        to: rgba(theme.primary[1]).with_alpha(26),
                    }),
                })
                .collect();
        }
        ChartKind::Bar => {
            let t = if display.multi_bar { dataset::multi_bar() } else { dataset::bar() };
            opt.x_axis = Some(category(&t.labels, None, cat_line));
            opt.y_axis = Some(value(Some("Rate per 100k"), val_line));
            opt.series = bar_series(t, theme, display.multi_bar);
        }
        ChartKind::HorizontalBar => {
            let t = dataset::horizontal_bar();
            opt.x_axis = Some(value(Some("MPG"), val_line));
            opt.y_axis = Some(category(&t.labels, None, cat_line));
            opt.series = bar_series(t, theme, false);
        }
        ChartKind::Area => {
            let t = dataset::area();
            opt.x_axis = Some(category(&t.labels, None, cat_line));
            opt.y_axis = Some(value(Some("Units sold"), val_line));
            opt.series = t
                .datasets
                .into_iter()
                .enumerate()
                .map(|(i, d)| SeriesOption::Line {
                    name: d.label.to_string(),
                    data: d.values,
                    smooth: true,
                    stack: Some("total".to_string()),
                    stroke: rgba(theme.gradient_at(i * 3)),
                    point: rgba(theme.gradient_at(i * 3)),
                    line_width: 2.0,
                    area: Some(Fill {
                        from: rgba(theme.gradient_at(i * 3)),
                        to: rgba(theme.gradient_at(i * 3 + 6)),
                    }),
                })
                .collect();
        }
        ChartKind::Histogram => {
            let hist = compute_histogram(&generate_samples(), DEFAULT_BIN_COUNT)?;
            let labels: Vec<String> = hist.labels().iter().map(i64::to_string).collect();
            opt.x_axis = Some(AxisOption::Category {
                labels,
                name: Some("Gray level".to_string()),
                line: cat_line,
            });
            opt.y_axis = Some(value(Some("Frequency"), val_line));
            opt.series = vec![SeriesOption::Bar {
                name: "Frequency".to_string(),
                data: hist.counts().into_iter().map(|c| c as f64).collect(),
                fill: vertical_fill(theme),
            }];
        }
        ChartKind::Pie => {
            let t = dataset::pie();
            opt.tooltip = TooltipTrigger::Item;
            opt.legend.vertical = true;
            let inner_radius = if display.donut { 0.4 } else { 0.0 };
            let Some(d) = t.datasets.into_iter().next() else { return Ok(opt) };
            opt.series = vec![SeriesOption::Pie {
                name: d.label.to_string(),
                slices: t
                    .labels
                    .iter()
                    .zip(d.values)
                    .enumerate()
                    .map(|(i, (name, value))| PieSlice {
                        name: name.to_string(),
                        value,
                        color: rgba(theme.gradient_at(i)),
                    })
                    .collect(),
                inner_radius,
                outer_radius: 0.7,
                border: rgba(theme.slice_border),
            }];
        }
        ChartKind::Scatter => {
            let (name, points) = dataset::scatter();
            opt.x_axis = Some(value(Some("Displacement (L)"), cat_line));
            opt.y_axis = Some(value(Some("Highway MPG"), val_line));
            opt.series = vec![SeriesOption::Scatter {
                name: name.to_string(),
                points: points.into_iter().map(|(x, y)| [x, y]).collect(),
                symbol_size: 12.0,
                fill: vertical_fill(theme),
            }];
        }
        ChartKind::BoxPlot => {
            let (labels, name, boxes) = dataset::boxplot();
            opt.x_axis = Some(category(&labels, None, cat_line));
            opt.y_axis = Some(value(Some("Rate per 100k"), val_line));
            opt.series = vec![SeriesOption::BoxPlot {
                name: name.to_string(),
                boxes: boxes.iter().map(|b| b.as_array()).collect(),
                fill: rgba(theme.primary[0]),
                border: rgba(theme.primary[1]),
            }];
        }
        ChartKind::Radar => {
            let t = dataset::radar();
            opt.radar = Some(radar_indicators(&t));
            opt.series = vec![SeriesOption::Radar {
                name: "Crime profile".to_string(),
                entries: t
                    .datasets
                    .into_iter()
                    .enumerate()
                    .map(|(i, d)| RadarEntry {
                        name: d.label.to_string(),
                        values: d.values,
                        color: rgba(theme.gradient_at(i * 3)),
                        fill: rgba(theme.gradient_at(i * 3)).with_alpha(60),
                    })
                    .collect(),
            }];
        }
        ChartKind::ErrorBar => {
            let (labels, sets) = dataset::error_bar();
            opt.x_axis = Some(category(&labels, None, cat_line));
            opt.y_axis = Some(value(Some("MPG"), val_line));
            opt.series = sets
                .into_iter()
                .enumerate()
                .map(|(i, s)| SeriesOption::ErrorBar {
                    name: s.label.to_string(),
                    values: s.values,
                    errors: s.errors,
                    point: rgba(theme.gradient_at(i * 2)),
                    whisker: rgba(theme.gradient_at(i * 2 + 1)),
                })
                .collect();
        }
    }

    tracing::debug!(kind = %kind, series = opt.series.len(), "built chart option");
    Ok(opt)
}

fn bar_series(t: CategoryTable, theme: &Theme, grouped: bool) -> Vec<SeriesOption> {
    t.datasets
        .into_iter()
        .enumerate()
        .map(|(i, d)| {
            let fill = if grouped {
                Fill { from: rgba(theme.gradient_at(i * 3)), to: rgba(theme.gradient_at(i * 3 + 5)) }
            } else {
                vertical_fill(theme)
            };
            SeriesOption::Bar { name: d.label.to_string(), data: d.values, fill }
        })
        .collect()
}

/// Per-indicator maxima from the data, padded by 10% and rounded up.
fn radar_indicators(t: &CategoryTable) -> Vec<RadarIndicator> {
    t.labels
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let peak = t
                .datasets
                .iter()
                .filter_map(|d| d.values.get(i).copied())
                .fold(0.0f64, f64::max);
            RadarIndicator { name: name.to_string(), max: nice_ceil(peak * 1.1) }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(kind: ChartKind) -> ChartOption {
        build_option(kind, &DisplayOptions::default(), &Theme::default()).unwrap()
    }

    #[test]
    fn every_kind_builds() {
        for k in ChartKind::ALL {
            let opt = build(k);
            assert_eq!(opt.kind, k);
            assert!(!opt.series.is_empty(), "{k} has no series");
            assert_eq!(opt.x_axis.is_some(), k.has_axes());
        }
    }

    #[test]
    fn horizontal_bar_swaps_axes() {
        let opt = build(ChartKind::HorizontalBar);
        assert!(opt.is_horizontal());
        assert_eq!(opt.category_count(), 7);
        assert!(!build(ChartKind::Bar).is_horizontal());
    }

    #[test]
    fn multi_bar_toggle_switches_table() {
        let single = build(ChartKind::Bar);
        assert_eq!(single.series.len(), 1);
        let display = DisplayOptions { multi_bar: true, ..Default::default() };
        let grouped = build_option(ChartKind::Bar, &display, &Theme::default()).unwrap();
        assert_eq!(grouped.series.len(), 3);
    }

    #[test]
    fn donut_toggle_sets_inner_radius() {
        let pie = build(ChartKind::Pie);
        assert_eq!(pie.tooltip, TooltipTrigger::Item);
        let SeriesOption::Pie { inner_radius, .. } = &pie.series[0] else { panic!("not a pie") };
        assert_eq!(*inner_radius, 0.0);

        let display = DisplayOptions { donut: true, ..Default::default() };
        let ring = build_option(ChartKind::Pie, &display, &Theme::default()).unwrap();
        let SeriesOption::Pie { inner_radius, outer_radius, .. } = &ring.series[0] else { panic!("not a pie") };
        assert_eq!((*inner_radius, *outer_radius), (0.4, 0.7));
    }

    #[test]
    fn histogram_option_carries_twenty_bins() {
        let opt = build(ChartKind::Histogram);
        assert_eq!(opt.category_count(), DEFAULT_BIN_COUNT);
        let SeriesOption::Bar { data, .. } = &opt.series[0] else { panic!("not a bar") };
        assert_eq!(data.iter().sum::<f64>(), 10_000.0);
    }

    #[test]
    fn stacked_area_extent_sums_layers() {
        let (lo, hi) = build(ChartKind::Area).value_extent();
        assert_eq!(lo, 0.0);
        assert_eq!(hi, 230.0 + 195.0 + 165.0);
    }

    #[test]
    fn error_bar_extent_includes_whiskers() {
        let (lo, hi) = build(ChartKind::ErrorBar).value_extent();
        assert!((lo - (13.2 - 1.8)).abs() < 1e-9);
        assert!((hi - (33.5 + 1.4)).abs() < 1e-9);
    }

    #[test]
    fn radar_maxima_cover_data() {
        let opt = build(ChartKind::Radar);
        let indicators = opt.radar.as_ref().unwrap();
        assert_eq!(indicators.len(), 4);
        assert!(indicators[1].max >= 280.5);
        assert!(indicators.iter().all(|i| i.max > 0.0));
    }

    #[test]
    fn line_colors_follow_gradient_pairs() {
        let theme = Theme::default();
        let opt = build(ChartKind::Line);
        let SeriesOption::Line { stroke, point, area, .. } = &opt.series[1] else { panic!("not a line") };
        assert_eq!(*stroke, Rgba::from(theme.gradient[2]));
        assert_eq!(*point, Rgba::from(theme.gradient[3]));
        assert!(area.is_none());
    }

    #[test]
    fn display_switches_flow_through() {
        let display = DisplayOptions { show_legend: false, show_grid: false, animation_ms: 0, ..Default::default() };
        let opt = build_option(ChartKind::Scatter, &display, &Theme::default()).unwrap();
        assert!(!opt.legend.show);
        assert!(!opt.show_grid);
        assert!(!opt.animation.enabled);
    }

    #[test]
    fn json_uses_type_tags() {
        let json = build(ChartKind::BoxPlot).to_json().unwrap();
        assert!(json.contains("\"type\": \"boxPlot\""));
        assert!(json.contains("\"kind\": \"boxplot\""));
        assert!(json.contains("#90ee90"));
    }
}
