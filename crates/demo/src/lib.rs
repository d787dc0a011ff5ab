// File: crates/demo/src/lib.rs
// Summary: Shared front-end plumbing: TOML configuration and tracing setup.

pub mod config;
pub mod logging;

pub use config::Config;
