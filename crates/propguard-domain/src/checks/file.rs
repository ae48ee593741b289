use crate::checks::utils::{bracket_list, missing_sections};
use crate::context::EvaluationContext;
use crate::model::ProposalDiff;
use crate::tree::ErrorTree;
use propguard_types::ids;

pub fn run(diff: &ProposalDiff, ctx: &EvaluationContext<'_>) -> Option<ErrorTree> {
    let name = &diff.head.name;
    if ctx.policy.filename_pattern.is_match(name) {
        return None;
    }

    let missing = missing_sections(&diff.head.content, &ctx.policy.required_sections);
    Some(ErrorTree::single(
        ids::SEG_NAME,
        format!(
            "Filename {name} does not match the required pattern `{}` and is missing the following required sections: {}",
            ctx.policy.filename_pattern.as_str(),
            bracket_list(&missing),
        ),
    ))
}
