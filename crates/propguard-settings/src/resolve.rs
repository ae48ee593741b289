use crate::model::{PropguardConfigV1, ToggleConfig, TransitionConfig};
use crate::presets::{self, DEFAULT_PROFILE};
use anyhow::Context;
use propguard_domain::{Policy, Status, StatusTransition};
use regex::Regex;
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub policy: Policy,
}

pub fn resolve_config(
    cfg: PropguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| DEFAULT_PROFILE.to_string());

    let mut preset = presets::preset(&profile).with_context(|| {
        format!(
            "unknown profile: {profile} (expected one of {})",
            presets::profile_names().join(", ")
        )
    })?;

    if let Some(pattern) = cfg.filename_pattern {
        preset.filename_pattern = pattern;
    }
    if let Some(sections) = cfg.required_sections {
        preset.required_sections = sections;
    }
    if let Some(docs) = cfg.canonical_documents {
        preset.canonical_documents = docs;
    }
    if let Some(editors) = cfg.editors {
        preset.editors = editors;
    }
    if let Some(transitions) = cfg.allowed_transitions {
        preset.allowed_transitions = parse_transitions(&transitions)?;
    }

    apply_toggles("check", &cfg.checks, &mut preset.checks)?;
    apply_toggles("exemption", &cfg.exemptions, &mut preset.exemptions)?;

    let filename_pattern = Regex::new(&preset.filename_pattern)
        .with_context(|| format!("invalid filename_pattern: {}", preset.filename_pattern))?;

    let policy = Policy {
        profile: preset.profile,
        filename_pattern,
        required_sections: preset.required_sections,
        canonical_documents: preset.canonical_documents.into_iter().collect(),
        editors: preset
            .editors
            .iter()
            .map(|e| e.trim_start_matches('@').to_ascii_lowercase())
            .collect(),
        allowed_transitions: preset
            .allowed_transitions
            .into_iter()
            .map(|(from, to)| StatusTransition::new(from, to))
            .collect(),
        checks: preset.checks,
        exemptions: preset.exemptions,
    };

    Ok(ResolvedConfig { policy })
}

/// Presets list every known id, so an id missing from `known` is a typo.
fn apply_toggles(
    kind: &str,
    toggles: &BTreeMap<String, ToggleConfig>,
    known: &mut BTreeMap<String, bool>,
) -> anyhow::Result<()> {
    for (id, toggle) in toggles {
        let Some(entry) = known.get_mut(id) else {
            let expected: Vec<&str> = known.keys().map(String::as_str).collect();
            anyhow::bail!("unknown {kind} id: {id} (expected one of {})", expected.join(", "));
        };
        if let Some(enabled) = toggle.enabled {
            *entry = enabled;
        }
    }
    Ok(())
}

fn parse_transitions(transitions: &[TransitionConfig]) -> anyhow::Result<Vec<(Status, Status)>> {
    transitions
        .iter()
        .map(|t| {
            let from = parse_status(&t.from)
                .with_context(|| format!("invalid allowed transition {} -> {}", t.from, t.to))?;
            let to = parse_status(&t.to)
                .with_context(|| format!("invalid allowed transition {} -> {}", t.from, t.to))?;
            Ok((from, to))
        })
        .collect()
}

fn parse_status(v: &str) -> anyhow::Result<Status> {
    match Status::parse(v) {
        Some(status) => Ok(status),
        None => anyhow::bail!(
            "unknown status: {v} (expected draft|review|last-call|final|stagnant|withdrawn|living)"
        ),
    }
}
