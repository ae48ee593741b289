use crate::context::EvaluationContext;
use crate::fingerprint::content_digest;
use crate::model::ProposalDiff;
use crate::overrides::OverrideSet;
use crate::tree::ErrorTree;
use propguard_types::{ErrorPath, ids};
use tracing::debug;

/// What an editor may wave through. Identity errors and unrecognized statuses stay
/// blocking.
pub fn editor_overridable() -> OverrideSet {
    [
        ErrorPath::from_segments([ids::ROOT_APPROVAL]),
        ErrorPath::from_segments([ids::ROOT_AUTHORS]),
        ErrorPath::from_segments([ids::ROOT_CONTENT]),
        ErrorPath::from_segments([ids::ROOT_FILE]),
        ErrorPath::from_segments([ids::ROOT_STATUS, ids::SEG_TRANSITION]),
    ]
    .into_iter()
    .collect()
}

pub fn run(raw: &ErrorTree, diff: &ProposalDiff, ctx: &EvaluationContext<'_>) -> OverrideSet {
    if raw.is_empty() {
        return OverrideSet::new();
    }

    let digest = content_digest(&diff.head.content);
    match ctx.editor_approval(&digest) {
        Some(approval) => {
            debug!(file = %diff.head.name, editor = %approval.login, "editor approved head content");
            editor_overridable()
        }
        None => OverrideSet::new(),
    }
}
