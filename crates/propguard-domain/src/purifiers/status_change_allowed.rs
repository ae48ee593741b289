use crate::context::EvaluationContext;
use crate::model::ProposalDiff;
use crate::overrides::OverrideSet;
use crate::tree::ErrorTree;
use propguard_types::{ErrorPath, ids};

pub fn run(raw: &ErrorTree, diff: &ProposalDiff, ctx: &EvaluationContext<'_>) -> OverrideSet {
    let path = ErrorPath::from_segments([ids::ROOT_STATUS, ids::SEG_TRANSITION]);
    if !raw.contains(&path) {
        return OverrideSet::new();
    }

    match (diff.base.status(), diff.head.status()) {
        (Some(from), Some(to)) if ctx.policy.allows_transition(from, to) => {
            OverrideSet::new().with(path)
        }
        _ => OverrideSet::new(),
    }
}
