use crate::context::EvaluationContext;
use crate::model::ProposalDiff;
use crate::tree::ErrorTree;
use propguard_types::ids;

pub fn run(diff: &ProposalDiff, ctx: &EvaluationContext<'_>) -> Option<ErrorTree> {
    let name = &diff.head.name;
    let mut children = Vec::new();

    if let Some(expected) = ctx.policy.filename_number(name) {
        let message = match diff.head.number {
            None => Some(format!(
                "{name} has no number header; its filename says {expected}"
            )),
            Some(n) if n != expected => Some(format!(
                "{name} declares number {n} but its filename says {expected}"
            )),
            Some(_) => None,
        };
        if let Some(m) = message {
            children.push((ids::SEG_MATCHING.to_string(), ErrorTree::leaf(m)));
        }
    }

    if let Some(before) = diff.base.number
        && diff.head.number != Some(before)
    {
        let message = match diff.head.number {
            Some(after) => format!("{name} changes its number from {before} to {after}"),
            None => format!("{name} removes its number header (was {before})"),
        };
        children.push((ids::SEG_CONSTANT.to_string(), ErrorTree::leaf(message)));
    }

    if children.is_empty() {
        None
    } else {
        Some(ErrorTree::from_children(children))
    }
}
