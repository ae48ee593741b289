//! Config parsing and profile/preset resolution.
//!
//! This crate is IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{PropguardConfigV1, SCHEMA_CONFIG_V1, ToggleConfig, TransitionConfig};
pub use presets::{DEFAULT_PROFILE, profile_names};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `propguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<PropguardConfigV1> {
    let cfg: PropguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the policy the engine runs with (profile preset, then config, then overrides).
pub fn resolve_config(
    cfg: PropguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
