use crate::context::EvaluationContext;
use crate::model::ProposalDiff;
use crate::overrides::OverrideSet;
use crate::tree::ErrorTree;
use propguard_types::{ErrorPath, ids};

pub fn run(_raw: &ErrorTree, diff: &ProposalDiff, ctx: &EvaluationContext<'_>) -> OverrideSet {
    // Custodianship of the process document rests with editors, not listed authors.
    if ctx.policy.is_canonical(&diff.head.name) || ctx.policy.is_canonical(&diff.base.name) {
        OverrideSet::new().with(ErrorPath::from_segments([ids::ROOT_AUTHORS]))
    } else {
        OverrideSet::new()
    }
}
