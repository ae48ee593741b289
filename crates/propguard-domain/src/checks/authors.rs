use crate::context::EvaluationContext;
use crate::model::ProposalDiff;
use crate::tree::ErrorTree;
use propguard_types::ids;

pub fn run(diff: &ProposalDiff, _ctx: &EvaluationContext<'_>) -> Option<ErrorTree> {
    // Base only: a submitter must not be able to add themselves and then approve.
    if diff.base.has_authors() {
        return None;
    }

    Some(ErrorTree::single(
        ids::SEG_BASE,
        format!(
            "{} has no identifiable authors who can approve the PR (only considering the base version)",
            diff.head.name
        ),
    ))
}
