// File: crates/demo/src/config.rs
// Summary: TOML configuration (display, render, export, log) with env/path overrides.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::{DisplayOptions, RenderOptions, Theme};
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the default config location.
pub const CONFIG_ENV: &str = "CHART_GALLERY_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_true")]
    pub show_legend: bool,
    #[serde(default = "default_true")]
    pub show_grid: bool,
    #[serde(default)]
    pub show_data_labels: bool,
    #[serde(default = "default_animation_ms")]
    pub animation_ms: u32,
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_true() -> bool {
    true
}
fn default_animation_ms() -> u32 {
    1000
}
fn default_theme() -> String {
    "red-green".into()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_legend: true,
            show_grid: true,
            show_data_labels: false,
            animation_ms: default_animation_ms(),
            theme: default_theme(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default = "default_height")]
    pub height: i32,
    #[serde(default = "default_pixel_ratio")]
    pub pixel_ratio: f32,
}

fn default_width() -> i32 {
    chart_core::types::WIDTH
}
fn default_height() -> i32 {
    chart_core::types::HEIGHT
}
fn default_pixel_ratio() -> f32 {
    1.0
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { width: default_width(), height: default_height(), pixel_ratio: default_pixel_ratio() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_output_dir() -> String {
    "target/out".into()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { output_dir: default_output_dir() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    crate::logging::DEFAULT_LEVEL.into()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: default_level() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("chart-gallery")
            .join("config.toml")
    }

    /// `explicit`, then `$CHART_GALLERY_CONFIG`, then the per-user default.
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(p) = explicit {
            return p.to_path_buf();
        }
        match std::env::var_os(CONFIG_ENV) {
            Some(p) if !p.is_empty() => PathBuf::from(p),
            _ => Self::default_path(),
        }
    }

    /// Load from the resolved path; a missing file yields defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_from(&Self::resolve_path(explicit))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let cfg: Self = toml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml()?)
            .with_context(|| format!("writing config {}", path.display()))?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("serializing config")
    }

    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            show_legend: self.display.show_legend,
            show_grid: self.display.show_grid,
            show_data_labels: self.display.show_data_labels,
            animation_ms: self.display.animation_ms,
            ..DisplayOptions::default()
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.render.width,
            height: self.render.height,
            pixel_ratio: self.render.pixel_ratio,
            ..RenderOptions::default()
        }
    }

    pub fn theme(&self) -> Theme {
        chart_core::theme::find(&self.display.theme)
    }

    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from(&self.export.output_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.render.width, 1024);
        assert!(cfg.display_options().show_legend);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[display]\nshow_grid = false\ntheme = \"dark\"\n\n[render]\npixel_ratio = 2.0\n").unwrap();
        let cfg = Config::load_from(&path).unwrap();
        assert!(!cfg.display.show_grid);
        assert!(cfg.display.show_legend);
        assert_eq!(cfg.theme().name, "dark");
        assert_eq!(cfg.render_options().pixel_ratio, 2.0);
        assert_eq!(cfg.render.height, 640);
        assert_eq!(cfg.log.level, "info");
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");
        let mut cfg = Config::default();
        cfg.export.output_dir = "shots".into();
        cfg.log.level = "debug".into();
        cfg.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[display\n").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parsing config"));
    }

    #[test]
    fn explicit_path_wins() {
        let p = Path::new("/tmp/explicit.toml");
        assert_eq!(Config::resolve_path(Some(p)), p);
    }
}
