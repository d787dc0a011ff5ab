// File: crates/chart-core/src/axis.rs
// Summary: Resolved value axis (label, nice range and tick positions) used while rendering.

use crate::grid::nice_ticks;

/// Tick count the renderer aims for on value axes.
pub const TARGET_TICKS: usize = 6;

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub ticks: Vec<f64>,
}

impl Axis {
    /// Axis spanning `[lo, hi]` widened to nice tick bounds.
    pub fn nice(label: impl Into<String>, lo: f64, hi: f64) -> Self {
        let ticks = nice_ticks(lo, hi, TARGET_TICKS);
        let min = ticks.first().copied().unwrap_or(lo);
        let max = ticks.last().copied().unwrap_or(hi);
        Self { label: label.into(), min, max, ticks }
    }

    /// Tick text without trailing zeros (`50`, `2.5`).
    pub fn format_tick(v: f64) -> String {
        if (v - v.round()).abs() < 1e-9 {
            format!("{}", v.round() as i64)
        } else {
            let s = format!("{v:.2}");
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
    }
}
