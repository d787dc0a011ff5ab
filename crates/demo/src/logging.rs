// File: crates/demo/src/logging.rs
// Summary: tracing-subscriber setup; RUST_LOG wins over the configured level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when neither RUST_LOG nor the config names one.
pub const DEFAULT_LEVEL: &str = "info";

/// Filter directive for `level`, scoped so dependency noise stays at warn.
pub fn directive(level: &str) -> String {
    let level = if level.trim().is_empty() { DEFAULT_LEVEL } else { level.trim() };
    format!("warn,chart_core={level},gallery_demo={level},chart_gallery={level},gallery_window={level}")
}

/// Install the global subscriber. Safe to call twice; the second call is a no-op.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive(level)));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

/// Level implied by repeated `-v` flags, falling back to `configured`.
pub fn level_for_verbosity(verbose: u8, configured: &str) -> String {
    match verbose {
        0 => configured.to_string(),
        1 => "debug".into(),
        _ => "trace".into(),
    }
}
