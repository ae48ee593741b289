use propguard_domain::Status;
use propguard_domain::policy::{DEFAULT_FILENAME_PATTERN, DEFAULT_REQUIRED_SECTIONS};
use propguard_types::ids;
use std::collections::BTreeMap;

pub const DEFAULT_PROFILE: &str = "eip";

/// Unvalidated starting point for resolution. Config and overrides are layered on top.
#[derive(Clone, Debug)]
pub struct Preset {
    pub profile: String,
    pub filename_pattern: String,
    pub required_sections: Vec<String>,
    pub canonical_documents: Vec<String>,
    pub editors: Vec<String>,
    pub allowed_transitions: Vec<(Status, Status)>,
    pub checks: BTreeMap<String, bool>,
    pub exemptions: BTreeMap<String, bool>,
}

pub fn profile_names() -> &'static [&'static str] {
    &["eip", "strict"]
}

pub fn preset(profile: &str) -> Option<Preset> {
    match profile {
        "eip" => Some(eip_profile()),
        "strict" => Some(strict_profile()),
        _ => None,
    }
}

fn eip_profile() -> Preset {
    use Status::*;
    Preset {
        profile: "eip".to_string(),
        filename_pattern: DEFAULT_FILENAME_PATTERN.to_string(),
        required_sections: DEFAULT_REQUIRED_SECTIONS
            .iter()
            .map(|s| s.to_string())
            .collect(),
        canonical_documents: vec!["EIPS/eip-1.md".to_string()],
        editors: Vec::new(),
        allowed_transitions: vec![
            (Draft, Review),
            (Review, Draft),
            (Review, LastCall),
            (LastCall, Review),
            (Draft, Withdrawn),
            (Review, Withdrawn),
            (LastCall, Withdrawn),
            (Stagnant, Draft),
            (Stagnant, Review),
        ],
        checks: all_enabled(ids::all_check_roots()),
        exemptions: all_enabled(ids::all_exemptions()),
    }
}

/// Only an editor can wave anything through.
fn strict_profile() -> Preset {
    let mut preset = eip_profile();
    preset.profile = "strict".to_string();
    preset.allowed_transitions.clear();
    for id in [
        ids::EXEMPT_CANONICAL_DOCUMENT,
        ids::EXEMPT_STATUS_CHANGE_ALLOWED,
        ids::EXEMPT_WITHDRAWN,
    ] {
        preset.exemptions.insert(id.to_string(), false);
    }
    preset
}

fn all_enabled(keys: &[&str]) -> BTreeMap<String, bool> {
    keys.iter().map(|k| (k.to_string(), true)).collect()
}
