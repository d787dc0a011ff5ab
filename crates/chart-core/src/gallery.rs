// File: crates/chart-core/src/gallery.rs
// Summary: Navigation state behind the gallery's menu, toggle button and keyboard shortcuts.

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::kind::ChartKind;
use crate::option::{build_option, ChartOption, DisplayOptions};
use crate::theme::Theme;

/// State of the "switch dataset" button for the current chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleButton {
    pub label: &'static str,
    pub enabled: bool,
}

impl ToggleButton {
    pub fn for_kind(kind: ChartKind) -> Self {
        match kind {
            ChartKind::Bar => Self { label: "Switch to grouped data", enabled: true },
            ChartKind::Pie => Self { label: "Switch to donut", enabled: true },
            _ => Self { label: "Switch dataset", enabled: false },
        }
    }
}

pub struct Gallery {
    current: ChartKind,
    display: DisplayOptions,
    theme: Theme,
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new(DisplayOptions::default(), Theme::default())
    }
}

impl Gallery {
    pub fn new(display: DisplayOptions, theme: Theme) -> Self {
        Self { current: ChartKind::Line, display, theme }
    }

    pub fn current(&self) -> ChartKind {
        self.current
    }

    pub fn display(&self) -> &DisplayOptions {
        &self.display
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn select(&mut self, kind: ChartKind) -> ToggleButton {
        if kind != self.current {
            tracing::debug!(from = %self.current, to = %kind, "select chart");
        }
        self.current = kind;
        ToggleButton::for_kind(kind)
    }

    pub fn next(&mut self) -> ToggleButton {
        self.select(self.current.next())
    }

    pub fn prev(&mut self) -> ToggleButton {
        self.select(self.current.prev())
    }

    /// Flip the alternate dataset of the current chart. False when it has none.
    pub fn toggle_dataset(&mut self) -> bool {
        match self.current {
            ChartKind::Bar => self.display.multi_bar = !self.display.multi_bar,
            ChartKind::Pie => self.display.donut = !self.display.donut,
            _ => return false,
        }
        tracing::debug!(
            kind = %self.current,
            multi_bar = self.display.multi_bar,
            donut = self.display.donut,
            "toggled dataset"
        );
        true
    }

    pub fn set_display(&mut self, display: DisplayOptions) {
        self.display = display;
    }

    pub fn option(&self) -> Result<ChartOption> {
        build_option(self.current, &self.display, &self.theme)
    }

    /// Title and description shown in the info panel.
    pub fn info(&self) -> (&'static str, &'static str) {
        (self.current.title(), self.current.description())
    }

    pub fn download_file_name(&self, now: DateTime<Utc>) -> String {
        format!("chart-{}-{}.png", self.current.slug(), now.timestamp_millis())
    }

    /// Apply a shortcut. Returns true when the chart needs a redraw.
    pub fn apply(&mut self, shortcut: Shortcut) -> bool {
        match shortcut {
            Shortcut::Next => {
                self.next();
                true
            }
            Shortcut::Prev => {
                self.prev();
                true
            }
            Shortcut::Select(kind) => {
                let changed = kind != self.current;
                self.select(kind);
                changed
            }
            Shortcut::ToggleDataset => self.toggle_dataset(),
            Shortcut::Download | Shortcut::Fullscreen => false,
        }
    }
}

/// Keys the gallery reacts to, independent of any windowing library.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Left,
    Right,
    F11,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    Download,
    Fullscreen,
    ToggleDataset,
    Prev,
    Next,
    Select(ChartKind),
}

pub fn shortcut_for(key: Key, ctrl: bool) -> Option<Shortcut> {
    match key {
        Key::Char(c) if ctrl => matches!(c, 's' | 'S').then_some(Shortcut::Download),
        Key::F11 => Some(Shortcut::Fullscreen),
        Key::Left => Some(Shortcut::Prev),
        Key::Right => Some(Shortcut::Next),
        Key::Char('t' | 'T') => Some(Shortcut::ToggleDataset),
        Key::Char(c) => {
            // 1..9 then 0 for the tenth chart
            let d = c.to_digit(10)? as usize;
            let idx = if d == 0 { 9 } else { d - 1 };
            ChartKind::ALL.get(idx).copied().map(Shortcut::Select)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::SeriesOption;
    use chrono::TimeZone;

    #[test]
    fn toggle_button_per_kind() {
        let mut g = Gallery::default();
        assert_eq!(g.select(ChartKind::Bar), ToggleButton { label: "Switch to grouped data", enabled: true });
        assert_eq!(g.select(ChartKind::Pie).label, "Switch to donut");
        let b = g.select(ChartKind::Radar);
        assert!(!b.enabled);
        assert_eq!(b.label, "Switch dataset");
    }

    #[test]
    fn toggle_flips_only_owning_chart() {
        let mut g = Gallery::default();
        g.select(ChartKind::Scatter);
        assert!(!g.toggle_dataset());

        g.select(ChartKind::Bar);
        assert!(g.toggle_dataset());
        assert!(g.display().multi_bar);
        assert!(!g.display().donut);
        assert_eq!(g.option().unwrap().series.len(), 3);

        g.select(ChartKind::Pie);
        assert!(g.toggle_dataset());
        assert!(g.display().donut);
        match &g.option().unwrap().series[0] {
            SeriesOption::Pie { inner_radius, .. } => assert!(*inner_radius > 0.0),
            other => panic!("unexpected series {other:?}"),
        }
        assert!(g.toggle_dataset());
        assert!(!g.display().donut);
    }

    #[test]
    fn display_switches_reach_the_option() {
        let mut g = Gallery::default();
        g.set_display(DisplayOptions { show_grid: false, show_legend: false, ..DisplayOptions::default() });
        let opt = g.option().unwrap();
        assert!(!opt.show_grid);
        assert!(!opt.legend.show);
    }

    #[test]
    fn navigation_wraps() {
        let mut g = Gallery::default();
        g.prev();
        assert_eq!(g.current(), ChartKind::ErrorBar);
        g.next();
        assert_eq!(g.current(), ChartKind::Line);
    }

    #[test]
    fn info_and_download_name() {
        let mut g = Gallery::default();
        g.select(ChartKind::BoxPlot);
        assert_eq!(g.info().0, ChartKind::BoxPlot.title());
        let now = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        assert_eq!(g.download_file_name(now), "chart-boxplot-1700000000123.png");
    }

    #[test]
    fn keyboard_shortcuts() {
        assert_eq!(shortcut_for(Key::Char('s'), true), Some(Shortcut::Download));
        assert_eq!(shortcut_for(Key::Char('s'), false), None);
        assert_eq!(shortcut_for(Key::F11, false), Some(Shortcut::Fullscreen));
        assert_eq!(shortcut_for(Key::Char('T'), false), Some(Shortcut::ToggleDataset));
        assert_eq!(shortcut_for(Key::Left, false), Some(Shortcut::Prev));
        assert_eq!(shortcut_for(Key::Char('1'), false), Some(Shortcut::Select(ChartKind::Line)));
        assert_eq!(shortcut_for(Key::Char('0'), false), Some(Shortcut::Select(ChartKind::ErrorBar)));
        assert_eq!(shortcut_for(Key::Char('x'), false), None);
    }

    #[test]
    fn apply_reports_redraws() {
        let mut g = Gallery::default();
        assert!(!g.apply(Shortcut::Select(ChartKind::Line)));
        assert!(g.apply(Shortcut::Select(ChartKind::Pie)));
        assert!(g.apply(Shortcut::ToggleDataset));
        assert!(!g.apply(Shortcut::Download));
        assert!(g.apply(Shortcut::Next));
        assert_eq!(g.current(), ChartKind::Scatter);
        assert!(g.apply(Shortcut::Prev));
        assert_eq!(g.current(), ChartKind::Pie);
    }
}
