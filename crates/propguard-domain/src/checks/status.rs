use crate::context::EvaluationContext;
use crate::model::ProposalDiff;
use crate::tree::ErrorTree;
use propguard_types::ids;

pub fn run(diff: &ProposalDiff, _ctx: &EvaluationContext<'_>) -> Option<ErrorTree> {
    let name = &diff.head.name;
    let mut children = Vec::new();

    match (&diff.head.status, diff.head.status()) {
        (None, _) => children.push((
            ids::SEG_VALID.to_string(),
            ErrorTree::leaf(format!("{name} has no status")),
        )),
        (Some(raw), None) => children.push((
            ids::SEG_VALID.to_string(),
            ErrorTree::leaf(format!("{name} has an unrecognized status '{raw}'")),
        )),
        (Some(_), Some(_)) => {}
    }

    if let (Some(from), Some(to)) = (diff.base.status(), diff.head.status())
        && from != to
    {
        children.push((
            ids::SEG_TRANSITION.to_string(),
            ErrorTree::leaf(format!("{name} status changed from {from} to {to}")),
        ));
    }

    if children.is_empty() {
        None
    } else {
        Some(ErrorTree::from_children(children))
    }
}
