//! Explain registry for error paths and exemptions.
//!
//! Maps error paths and exemption ids to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for an error path or exemption.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/exemption.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to resolve a failure (or how to qualify for an exemption).
    pub remediation: &'static str,
    /// Front matter that would fail, and one that passes.
    pub examples: ExamplePair,
}

/// Before and after front-matter examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    pub before: &'static str,
    pub after: &'static str,
}

/// Look up an explanation by error path, check root, or exemption id.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::PATH_APPROVAL_AUTHORS | ids::ROOT_APPROVAL => Some(explain_approval_authors()),
        ids::PATH_AUTHORS_BASE | ids::ROOT_AUTHORS => Some(explain_authors_base()),
        ids::PATH_CONTENT_SECTIONS | ids::ROOT_CONTENT => Some(explain_content_sections()),
        ids::PATH_FILE_NAME | ids::ROOT_FILE => Some(explain_file_name()),
        ids::ROOT_IDENTITY => Some(explain_identity()),
        ids::PATH_IDENTITY_MATCHING => Some(explain_identity_matching()),
        ids::PATH_IDENTITY_CONSTANT => Some(explain_identity_constant()),
        ids::ROOT_STATUS => Some(explain_status()),
        ids::PATH_STATUS_VALID => Some(explain_status_valid()),
        ids::PATH_STATUS_TRANSITION => Some(explain_status_transition()),

        ids::EXEMPT_STATUS_CHANGE_ALLOWED => Some(explain_status_change_allowed()),
        ids::EXEMPT_EDITOR_APPROVAL => Some(explain_editor_approval()),
        ids::EXEMPT_CANONICAL_DOCUMENT => Some(explain_canonical_document()),
        ids::EXEMPT_WITHDRAWN => Some(explain_withdrawn()),

        _ => None,
    }
}

/// List all explainable error paths.
pub fn all_error_paths() -> &'static [&'static str] {
    &[
        ids::PATH_APPROVAL_AUTHORS,
        ids::PATH_AUTHORS_BASE,
        ids::PATH_CONTENT_SECTIONS,
        ids::PATH_FILE_NAME,
        ids::PATH_IDENTITY_MATCHING,
        ids::PATH_IDENTITY_CONSTANT,
        ids::PATH_STATUS_VALID,
        ids::PATH_STATUS_TRANSITION,
    ]
}

/// List all explainable exemptions.
pub fn all_exemptions() -> &'static [&'static str] {
    ids::all_exemptions()
}

// --- Error paths ---

fn explain_approval_authors() -> Explanation {
    Explanation {
        title: "Author Approval",
        description: "\
Requires that at least one author listed in the previously accepted version of the
proposal approved the pull request. Opening the pull request as one of those authors
counts as approval.

Only the base version is consulted, so adding yourself to the author list in the same
pull request does not make you eligible to approve it.",
        remediation: "\
Ask one of the listed authors to leave an approving review, or ask an editor to
approve the exact content of the pull request.",
        examples: ExamplePair {
            before: "author: Alice (@alice)\n# approvals: @mallory",
            after: "author: Alice (@alice)\n# approvals: @alice",
        },
    }
}

fn explain_authors_base() -> Explanation {
    Explanation {
        title: "Identifiable Authors",
        description: "\
Requires the previously accepted version of the proposal to list at least one author.
A proposal with nobody on record has no one who can approve changes to it.

The head version's author list is ignored on purpose.",
        remediation: "\
Land a change that adds the author list first (it needs editor approval), then
resubmit.",
        examples: ExamplePair {
            before: "author:",
            after: "author: Alice (@alice)",
        },
    }
}

fn explain_content_sections() -> Explanation {
    Explanation {
        title: "Required Sections",
        description: "\
Requires every configured section heading (Abstract, Specification, ...) to be
present in the proposed content. Withdrawn proposals are exempt.",
        remediation: "\
Add the missing sections as level-two (or deeper) Markdown headings.",
        examples: ExamplePair {
            before: "## Abstract\n...\n## Copyright",
            after: "## Abstract\n...\n## Specification\n...\n## Rationale\n...\n## Security Considerations\n...\n## Copyright",
        },
    }
}

fn explain_file_name() -> Explanation {
    Explanation {
        title: "Filename",
        description: "\
Requires the proposal filename to match the configured pattern (by default
`EIPS/eip-<number>.md`). The message also lists the required sections missing from the
content so both problems can be fixed in one pass.",
        remediation: "\
Rename the file to match the pattern, using the number assigned to the proposal.",
        examples: ExamplePair {
            before: "EIPS/my-proposal.md",
            after: "EIPS/eip-1234.md",
        },
    }
}

fn explain_identity() -> Explanation {
    Explanation {
        title: "Proposal Number",
        description: "\
Covers `identity.matching` (the header number equals the filename number) and
`identity.constant` (the number does not change between the accepted and the
proposed version). Editor approval does not override either.",
        remediation: "Keep one number everywhere: filename, header, and across versions.",
        examples: ExamplePair {
            before: "EIPS/eip-1234.md\neip: 1235",
            after: "EIPS/eip-1234.md\neip: 1234",
        },
    }
}

fn explain_identity_matching() -> Explanation {
    Explanation {
        title: "Matching Number",
        description: "\
Requires the number declared in the proposal header to equal the number in its
filename. Editor approval does not override this check.",
        remediation: "Make the header number and the filename number agree.",
        examples: ExamplePair {
            before: "EIPS/eip-1234.md\neip: 1235",
            after: "EIPS/eip-1234.md\neip: 1234",
        },
    }
}

fn explain_identity_constant() -> Explanation {
    Explanation {
        title: "Constant Number",
        description: "\
Requires the declared proposal number to stay the same between the accepted version
and the proposed one. Editor approval does not override this check.",
        remediation: "Revert the number change; renumbering is done by editors out of band.",
        examples: ExamplePair {
            before: "# base\neip: 1234\n# head\neip: 1240",
            after: "# base\neip: 1234\n# head\neip: 1234",
        },
    }
}

fn explain_status() -> Explanation {
    Explanation {
        title: "Status",
        description: "\
Covers `status.valid` (the proposed version declares a recognized status) and
`status.transition` (the status changed between versions). Only the transition can
be exempted.",
        remediation: "\
Declare a recognized status, and change it only along an allowed transition or with
editor approval.",
        examples: ExamplePair {
            before: "# base\nstatus: Draft\n# head\nstatus: Pending",
            after: "# base\nstatus: Draft\n# head\nstatus: Review",
        },
    }
}

fn explain_status_valid() -> Explanation {
    Explanation {
        title: "Recognized Status",
        description: "\
Requires the proposed version to declare one of the recognized statuses: Draft,
Review, Last Call, Final, Stagnant, Withdrawn, Living.",
        remediation: "Set the status header to one of the recognized values.",
        examples: ExamplePair {
            before: "status: Pending",
            after: "status: Draft",
        },
    }
}

fn explain_status_transition() -> Explanation {
    Explanation {
        title: "Status Change",
        description: "\
Flags any status change between the accepted and the proposed version. Changes
listed in the allowed-transitions table are exempt; everything else needs editor
approval.",
        remediation: "\
Use an allowed transition (for example Draft -> Review) or ask an editor to
approve the change.",
        examples: ExamplePair {
            before: "# base\nstatus: Draft\n# head\nstatus: Final",
            after: "# base\nstatus: Draft\n# head\nstatus: Review",
        },
    }
}

// --- Exemptions ---

fn explain_status_change_allowed() -> Explanation {
    Explanation {
        title: "Allowed Status Change",
        description: "\
Neutralizes `status.transition` when the change from the base status to the head
status is listed in the configured allowed-transitions table.",
        remediation: "Configure `allowed_transitions` in propguard.toml.",
        examples: ExamplePair {
            before: "allowed_transitions = []",
            after: "allowed_transitions = [{ from = \"draft\", to = \"review\" }]",
        },
    }
}

fn explain_editor_approval() -> Explanation {
    Explanation {
        title: "Editor Approval",
        description: "\
Neutralizes approval, authorship, content, filename, and status-change errors when
a configured editor approved the exact head content (matched by its SHA-256 digest).
Identity errors and unrecognized statuses stay blocking.",
        remediation: "Ask an editor to approve after the final push.",
        examples: ExamplePair {
            before: "approvals = [{ login = \"editor\", content_sha = \"<old digest>\" }]",
            after: "approvals = [{ login = \"editor\", content_sha = \"<head digest>\" }]",
        },
    }
}

fn explain_canonical_document() -> Explanation {
    Explanation {
        title: "Canonical Document",
        description: "\
Neutralizes authorship errors for the governance-process document(s) listed in
`canonical_documents`; those have editor custodianship rather than authors.",
        remediation: "Configure `canonical_documents` in propguard.toml.",
        examples: ExamplePair {
            before: "canonical_documents = []",
            after: "canonical_documents = [\"EIPS/eip-1.md\"]",
        },
    }
}

fn explain_withdrawn() -> Explanation {
    Explanation {
        title: "Withdrawn Proposal",
        description: "\
Neutralizes content-completeness errors when the proposed status is Withdrawn;
section requirements only make sense for active proposals.",
        remediation: "None required.",
        examples: ExamplePair {
            before: "status: Draft",
            after: "status: Withdrawn",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_error_path_and_exemption_has_an_explanation() {
        for id in all_error_paths().iter().chain(all_exemptions()) {
            assert!(lookup_explanation(id).is_some(), "missing explanation for {id}");
        }
    }

    #[test]
    fn every_check_root_has_an_explanation() {
        for root in ids::all_check_roots() {
            assert!(lookup_explanation(root).is_some(), "missing explanation for {root}");
        }
        assert_eq!(lookup_explanation(ids::ROOT_STATUS).map(|e| e.title), Some("Status"));
    }

    #[test]
    fn check_roots_resolve_to_their_leaf() {
        let exp = lookup_explanation(ids::ROOT_AUTHORS).expect("authors");
        assert_eq!(exp.title, "Identifiable Authors");
        assert!(lookup_explanation("nope").is_none());
    }
}
