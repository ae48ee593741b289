use crate::checks::utils::{bracket_list, missing_sections};
use crate::context::EvaluationContext;
use crate::model::ProposalDiff;
use crate::tree::ErrorTree;
use propguard_types::ids;

pub fn run(diff: &ProposalDiff, ctx: &EvaluationContext<'_>) -> Option<ErrorTree> {
    let name = &diff.head.name;
    // An invalid filename already reports the missing sections.
    if !ctx.policy.filename_pattern.is_match(name) {
        return None;
    }

    let missing = missing_sections(&diff.head.content, &ctx.policy.required_sections);
    if missing.is_empty() {
        return None;
    }

    Some(ErrorTree::single(
        ids::SEG_SECTIONS,
        format!(
            "{name} is missing the following required sections: {}. Please add these sections before continuing the editorial process.",
            bracket_list(&missing),
        ),
    ))
}
