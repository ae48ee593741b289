use anyhow::Context;
use propguard_domain::{ApprovalRecord, ProposalDiff};
use serde::{Deserialize, Serialize};

/// Everything the check needs about one pull request, already fetched and parsed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRequest {
    /// Login of the pull request author.
    #[serde(default)]
    pub submitter: Option<String>,
    #[serde(default)]
    pub approvals: Vec<ApprovalRecord>,
    #[serde(default)]
    pub proposals: Vec<ProposalDiff>,
}

pub fn parse_request_json(text: &str) -> anyhow::Result<CheckRequest> {
    serde_json::from_str(text).context("parse request json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_request() {
        let req = parse_request_json(
            r#"{
                "submitter": "alice",
                "approvals": [{"login": "editor", "content_sha": "abc"}],
                "proposals": [{"head": {"name": "EIPS/eip-1.md"}}]
            }"#,
        )
        .unwrap();
        assert_eq!(req.submitter.as_deref(), Some("alice"));
        assert_eq!(req.approvals[0].content_sha.as_deref(), Some("abc"));
        assert_eq!(req.proposals.len(), 1);
        assert_eq!(req.proposals[0].base.name, "");
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_request_json("{").unwrap_err();
        assert!(err.to_string().contains("parse request json"));
    }
}
