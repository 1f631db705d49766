//! Config parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{DiagnosticsConfig, LgrConfigV1};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `lgr.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<LgrConfigV1> {
    let cfg: LgrConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective diagnostics policy (profile + config file + overrides).
pub fn resolve_config(cfg: LgrConfigV1, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
