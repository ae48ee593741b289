use crate::fingerprint::content_digest;
use crate::model::{ApprovalRecord, ProposalDiff, ProposalFile, Status};
use crate::policy::{DEFAULT_FILENAME_PATTERN, DEFAULT_REQUIRED_SECTIONS, Policy, StatusTransition};
use propguard_types::ids;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};

pub const EDITOR: &str = "editor";
pub const AUTHOR: &str = "alice";

/// Everything enabled, editor `editor`, canonical `EIPS/eip-1.md`, a few allowed transitions.
pub fn policy() -> Policy {
    Policy {
        profile: "test".to_string(),
        filename_pattern: Regex::new(DEFAULT_FILENAME_PATTERN).unwrap(),
        required_sections: DEFAULT_REQUIRED_SECTIONS
            .iter()
            .map(|s| s.to_string())
            .collect(),
        canonical_documents: BTreeSet::from(["EIPS/eip-1.md".to_string()]),
        editors: BTreeSet::from([EDITOR.to_string()]),
        allowed_transitions: BTreeSet::from([
            StatusTransition::new(Status::Draft, Status::Review),
            StatusTransition::new(Status::Review, Status::LastCall),
            StatusTransition::new(Status::Draft, Status::Withdrawn),
        ]),
        checks: ids::all_check_roots()
            .iter()
            .map(|r| (r.to_string(), true))
            .collect(),
        exemptions: ids::all_exemptions()
            .iter()
            .map(|e| (e.to_string(), true))
            .collect::<BTreeMap<_, _>>(),
    }
}

pub fn complete_content() -> String {
    DEFAULT_REQUIRED_SECTIONS
        .iter()
        .map(|s| format!("## {s}\n\nText.\n"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn proposal(name: &str, number: Option<u32>, authors: &[&str], status: &str) -> ProposalFile {
    ProposalFile {
        name: name.to_string(),
        number,
        authors: Some(authors.iter().map(|a| a.to_string()).collect()),
        status: Some(status.to_string()),
        kind: Some("Standards Track".to_string()),
        content: complete_content(),
    }
}

/// A Draft update to `EIPS/eip-1234.md` by `Alice (@alice)` with nothing wrong in it.
pub fn healthy_diff() -> ProposalDiff {
    let file = proposal("EIPS/eip-1234.md", Some(1234), &["Alice (@alice)"], "Draft");
    let mut head = file.clone();
    head.content.push_str("\nAn edit.\n");
    ProposalDiff { base: file, head }
}

pub fn author_approval() -> Vec<ApprovalRecord> {
    vec![ApprovalRecord {
        login: AUTHOR.to_string(),
        content_sha: None,
    }]
}

pub fn editor_approval_for(diff: &ProposalDiff) -> ApprovalRecord {
    ApprovalRecord {
        login: EDITOR.to_string(),
        content_sha: Some(content_digest(&diff.head.content)),
    }
}
