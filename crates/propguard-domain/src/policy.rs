use crate::model::Status;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};

/// Default filename pattern. The first capture group is the proposal number.
pub const DEFAULT_FILENAME_PATTERN: &str = r"^EIPS/eip-(\d+)\.md$";

pub const DEFAULT_REQUIRED_SECTIONS: &[&str] = &[
    "Abstract",
    "Specification",
    "Rationale",
    "Security Considerations",
    "Copyright",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StatusTransition {
    pub from: Status,
    pub to: Status,
}

impl StatusTransition {
    pub fn new(from: Status, to: Status) -> Self {
        Self { from, to }
    }
}

/// Resolved policy the engine evaluates against.
///
/// Built by `propguard-settings`; every value here has already been validated.
#[derive(Clone, Debug)]
pub struct Policy {
    pub profile: String,
    pub filename_pattern: Regex,
    pub required_sections: Vec<String>,
    /// Filenames of governance-process documents with special custodianship.
    pub canonical_documents: BTreeSet<String>,
    /// Lowercased logins of editors.
    pub editors: BTreeSet<String>,
    pub allowed_transitions: BTreeSet<StatusTransition>,
    /// Check root -> enabled.
    pub checks: BTreeMap<String, bool>,
    /// Exemption id -> enabled.
    pub exemptions: BTreeMap<String, bool>,
}

impl Policy {
    /// Unknown roots are treated as disabled.
    pub fn check_enabled(&self, root: &str) -> bool {
        self.checks.get(root).copied().unwrap_or(false)
    }

    pub fn exemption_enabled(&self, id: &str) -> bool {
        self.exemptions.get(id).copied().unwrap_or(false)
    }

    pub fn allows_transition(&self, from: Status, to: Status) -> bool {
        self.allowed_transitions
            .contains(&StatusTransition::new(from, to))
    }

    pub fn is_editor(&self, login: &str) -> bool {
        self.editors.contains(&login.to_ascii_lowercase())
    }

    pub fn is_canonical(&self, name: &str) -> bool {
        self.canonical_documents.contains(name)
    }

    /// Proposal number encoded in a filename, if the name matches the pattern.
    pub fn filename_number(&self, name: &str) -> Option<u32> {
        self.filename_pattern
            .captures(name)?
            .get(1)?
            .as_str()
            .parse()
            .ok()
    }
}
