use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SCHEMA_CONFIG_V1: &str = "propguard.config.v1";

/// `propguard.toml` schema v1.
///
/// Every field is optional; an absent field keeps the profile preset's value. List fields
/// replace the preset's list rather than extending it. Unknown keys are rejected so that a
/// misspelled setting cannot silently fall back to the preset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PropguardConfigV1 {
    /// Optional schema string for tooling (`propguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Preset to start from: `eip` (default) or `strict`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Regex a proposal filename must match. The first capture group is the proposal number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename_pattern: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_sections: Option<Vec<String>>,

    /// Governance-process documents whose author list is not enforced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_documents: Option<Vec<String>>,

    /// Logins whose content-pinned approval can override editor-overridable errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editors: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_transitions: Option<Vec<TransitionConfig>>,

    /// Map of check root -> config.
    #[serde(default)]
    pub checks: BTreeMap<String, ToggleConfig>,

    /// Map of exemption id -> config.
    #[serde(default)]
    pub exemptions: BTreeMap<String, ToggleConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ToggleConfig {
    /// Override preset enable/disable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// One allowed status change, e.g. `{ from = "Draft", to = "Review" }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct TransitionConfig {
    pub from: String,
    pub to: String,
}
