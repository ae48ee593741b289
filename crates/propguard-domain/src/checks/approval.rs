use crate::checks::utils::handle_list;
use crate::context::EvaluationContext;
use crate::model::ProposalDiff;
use crate::tree::ErrorTree;
use propguard_types::ids;
use tracing::debug;

pub fn run(diff: &ProposalDiff, ctx: &EvaluationContext<'_>) -> Option<ErrorTree> {
    // An empty author list is the `authors` check's finding.
    if !diff.base.has_authors() {
        return None;
    }
    let authors = diff.base.author_handles();

    if let Some(approver) = ctx.approvers().find(|login| authors.contains(login)) {
        debug!(file = %diff.head.name, approver = %approver, "approved by an author");
        return None;
    }

    let message = if authors.is_empty() {
        format!(
            "{} requires approval from an author, but no base author lists a GitHub handle",
            diff.head.name
        )
    } else {
        format!(
            "{} requires approval from one of {}",
            diff.head.name,
            handle_list(&authors)
        )
    };
    Some(ErrorTree::single(ids::SEG_AUTHORS, message))
}
