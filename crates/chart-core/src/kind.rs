// File: crates/chart-core/src/kind.rs
// Summary: The ten gallery chart kinds, their slugs, titles and descriptions.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ChartError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Line,
    Bar,
    HorizontalBar,
    Area,
    Histogram,
    Pie,
    Scatter,
    #[serde(rename = "boxplot")]
    BoxPlot,
    Radar,
    ErrorBar,
}

impl ChartKind {
    /// Navigation order.
    pub const ALL: [ChartKind; 10] = [
        ChartKind::Line,
        ChartKind::Bar,
        ChartKind::HorizontalBar,
        ChartKind::Area,
        ChartKind::Histogram,
        ChartKind::Pie,
        ChartKind::Scatter,
        ChartKind::BoxPlot,
        ChartKind::Radar,
        ChartKind::ErrorBar,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::HorizontalBar => "horizontalBar",
            ChartKind::Area => "area",
            ChartKind::Histogram => "histogram",
            ChartKind::Pie => "pie",
            ChartKind::Scatter => "scatter",
            ChartKind::BoxPlot => "boxplot",
            ChartKind::Radar => "radar",
            ChartKind::ErrorBar => "errorBar",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartKind::Line => "Fuel Economy Trend",
            ChartKind::Bar => "Crime Rate Statistics",
            ChartKind::HorizontalBar => "City Fuel Economy by Class",
            ChartKind::Area => "Sales by Vehicle Class",
            ChartKind::Histogram => "Face Image Grayscale Histogram",
            ChartKind::Pie => "Vehicle Class Share",
            ChartKind::Scatter => "Displacement vs Highway Economy",
            ChartKind::BoxPlot => "Crime Rate Distribution",
            ChartKind::Radar => "Crime Profile by State Group",
            ChartKind::ErrorBar => "Fuel Economy with Error Ranges",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ChartKind::Line => {
                "City and highway fuel economy from 1999 to 2008, showing the steady improvement of both."
            }
            ChartKind::Bar => "Average murder, assault and rape rates across US states (USArrests).",
            ChartKind::HorizontalBar => "Average city fuel economy for each vehicle class (MPG).",
            ChartKind::Area => "Stacked yearly sales of compact, midsize and SUV vehicles (MPG).",
            ChartKind::Histogram => {
                "Grayscale histogram of a simulated face image, modelled as a normal distribution of pixel intensities."
            }
            ChartKind::Pie => "Market share of each vehicle class (MPG).",
            ChartKind::Scatter => {
                "Engine displacement against highway fuel economy, showing how larger engines consume more fuel (MPG)."
            }
            ChartKind::BoxPlot => "Five-number summaries of crime rates across US states (USArrests).",
            ChartKind::Radar => {
                "Crime characteristics of low, medium and high crime-rate states compared side by side (USArrests)."
            }
            ChartKind::ErrorBar => {
                "City and highway fuel economy per vehicle class with the spread of each measurement (MPG)."
            }
        }
    }

    /// Parse a kind, falling back to `Line` for unknown names.
    pub fn from_slug_or_default(name: &str) -> Self {
        name.parse().unwrap_or(ChartKind::Line)
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|&k| k == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let n = Self::ALL.len();
        Self::ALL[(self.position() + n - 1) % n]
    }

    /// Cartesian kinds share the grid/axis frame.
    pub fn has_axes(self) -> bool {
        !matches!(self, ChartKind::Pie | ChartKind::Radar)
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    /// Accepts slugs case-insensitively, with or without `-`/`_` separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        ChartKind::ALL
            .into_iter()
            .find(|k| k.slug().eq_ignore_ascii_case(&norm))
            .ok_or_else(|| ChartError::UnknownChartKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip() {
        for k in ChartKind::ALL {
            assert_eq!(k.slug().parse::<ChartKind>().unwrap(), k);
        }
    }

    #[test]
    fn separators_and_case_are_ignored() {
        assert_eq!("horizontal-bar".parse::<ChartKind>().unwrap(), ChartKind::HorizontalBar);
        assert_eq!("ERROR_BAR".parse::<ChartKind>().unwrap(), ChartKind::ErrorBar);
        assert_eq!("box-plot".parse::<ChartKind>().unwrap(), ChartKind::BoxPlot);
    }

    #[test]
    fn unknown_falls_back_to_line() {
        assert!("donut".parse::<ChartKind>().is_err());
        assert_eq!(ChartKind::from_slug_or_default("donut"), ChartKind::Line);
    }

    #[test]
    fn navigation_wraps() {
        assert_eq!(ChartKind::ErrorBar.next(), ChartKind::Line);
        assert_eq!(ChartKind::Line.prev(), ChartKind::ErrorBar);
        assert_eq!(ChartKind::Bar.next(), ChartKind::HorizontalBar);
    }
}
