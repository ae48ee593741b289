use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

/// `@handle` at the start of an entry or after whitespace/`(`; excludes the `@` of an email.
static HANDLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[\s(<,])@([A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)")
        .expect("author handle pattern is valid")
});

/// One version of a proposal, as produced by the upstream content parser.
///
/// Every field defaults when absent so that a partially parsed document is still
/// evaluable; missing data surfaces as check findings, not as deserialization errors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProposalFile {
    /// Repo-relative filename (`EIPS/eip-1234.md`).
    pub name: String,
    /// Declared proposal number from the header.
    pub number: Option<u32>,
    pub authors: Option<Vec<String>>,
    /// Raw declared status; see [`ProposalFile::status`].
    pub status: Option<String>,
    /// Declared proposal type (`Standards Track`, `Meta`, ...).
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub content: String,
}

impl ProposalFile {
    /// Declared status, if it is one of the recognized ones.
    pub fn status(&self) -> Option<Status> {
        self.status.as_deref().and_then(Status::parse)
    }

    /// Whether the author list has at least one non-blank entry.
    pub fn has_authors(&self) -> bool {
        self.authors
            .as_ref()
            .is_some_and(|authors| authors.iter().any(|a| !a.trim().is_empty()))
    }

    /// Lowercased GitHub handles found in the author list.
    pub fn author_handles(&self) -> BTreeSet<String> {
        let Some(authors) = &self.authors else {
            return BTreeSet::new();
        };
        authors
            .iter()
            .flat_map(|entry| {
                HANDLE_RE
                    .captures_iter(entry)
                    .filter_map(|c| c.get(1))
                    .map(|m| m.as_str().to_ascii_lowercase())
            })
            .collect()
    }
}

/// Base (last accepted) and head (proposed) versions of one proposal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalDiff {
    #[serde(default)]
    pub base: ProposalFile,
    #[serde(default)]
    pub head: ProposalFile,
}

impl ProposalDiff {
    /// The name the verdict is reported under: the base name, or the head name for new files.
    pub fn filename(&self) -> &str {
        if self.base.name.is_empty() {
            &self.head.name
        } else {
            &self.base.name
        }
    }
}

/// A recorded approval on the pull request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalRecord {
    pub login: String,
    /// SHA-256 hex digest of the head content the approval was given against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_sha: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    Draft,
    Review,
    LastCall,
    Final,
    Stagnant,
    Withdrawn,
    Living,
}

impl Status {
    /// Case-insensitive; spaces, hyphens, and underscores are interchangeable.
    pub fn parse(raw: &str) -> Option<Status> {
        let key: String = raw
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "draft" => Some(Status::Draft),
            "review" => Some(Status::Review),
            "lastcall" => Some(Status::LastCall),
            "final" => Some(Status::Final),
            "stagnant" => Some(Status::Stagnant),
            "withdrawn" => Some(Status::Withdrawn),
            "living" => Some(Status::Living),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Draft => "Draft",
            Status::Review => "Review",
            Status::LastCall => "Last Call",
            Status::Final => "Final",
            Status::Stagnant => "Stagnant",
            Status::Withdrawn => "Withdrawn",
            Status::Living => "Living",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
