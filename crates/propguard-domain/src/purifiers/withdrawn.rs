use crate::context::EvaluationContext;
use crate::model::{ProposalDiff, Status};
use crate::overrides::OverrideSet;
use crate::tree::ErrorTree;
use propguard_types::{ErrorPath, ids};

pub fn run(_raw: &ErrorTree, diff: &ProposalDiff, _ctx: &EvaluationContext<'_>) -> OverrideSet {
    if diff.head.status() == Some(Status::Withdrawn) {
        OverrideSet::new().with(ErrorPath::from_segments([ids::ROOT_CONTENT]))
    } else {
        OverrideSet::new()
    }
}
