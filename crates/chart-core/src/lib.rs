// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the chart catalog, option builder, histogram pipeline and renderer.

pub mod axis;
pub mod chart;
pub mod dataset;
pub mod error;
pub mod gallery;
pub mod geometry;
pub mod grid;
pub mod histogram;
pub mod kind;
pub mod option;
mod render;
pub mod scale;
pub mod synthetic;
pub mod text;
pub mod theme;
pub mod types;

pub use chart::{Chart, RenderOptions};
pub use error::{ChartError, Result};
pub use gallery::{Gallery, Key, Shortcut, ToggleButton};
pub use histogram::{compute_histogram, Bin, Histogram, DEFAULT_BIN_COUNT};
pub use kind::ChartKind;
pub use option::{build_option, ChartOption, DisplayOptions, SeriesOption};
pub use synthetic::{generate_samples, Sample};
pub use text::TextShaper;
pub use theme::Theme;
