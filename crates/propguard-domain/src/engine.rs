use crate::checks;
use crate::context::EvaluationContext;
use crate::finalize::finalize;
use crate::merge::{ExemptionSets, Neutralization, ancestor_join};
use crate::model::ProposalDiff;
use crate::purifiers;
use crate::tree::ErrorTree;
use propguard_types::Verdict;
use rayon::prelude::*;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Inputs the engine refuses to evaluate. No verdict is produced for these.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("proposal diff names no file on either side")]
    MissingFilename,
    #[error("profile `{profile}` disables every check")]
    NoChecksEnabled { profile: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    pub verdict: Verdict,
    /// Combined check output before any exemption applied.
    pub raw: ErrorTree,
    pub neutralized: Vec<Neutralization>,
}

/// Run every enabled check and graft each result under the check's root segment.
pub fn run_checks(diff: &ProposalDiff, ctx: &EvaluationContext<'_>) -> ErrorTree {
    let subtrees: BTreeMap<&'static str, ErrorTree> = checks::registry()
        .par_iter()
        .filter(|check| ctx.policy.check_enabled(check.root))
        .filter_map(|check| {
            let out = (check.run)(diff, ctx);
            debug!(
                check = check.root,
                errors = out.as_ref().map_or(0, ErrorTree::leaf_count),
                "check finished"
            );
            out.map(|tree| (check.root, tree))
        })
        .collect();

    ErrorTree::from_children(
        subtrees
            .into_iter()
            .map(|(root, tree)| (root.to_string(), tree)),
    )
}

/// Run every enabled exemption against the same raw tree. Empty sets are dropped.
pub fn run_purifiers(
    raw: &ErrorTree,
    diff: &ProposalDiff,
    ctx: &EvaluationContext<'_>,
) -> ExemptionSets {
    purifiers::registry()
        .par_iter()
        .filter(|purifier| ctx.policy.exemption_enabled(purifier.id))
        .filter_map(|purifier| {
            let set = (purifier.run)(raw, diff, ctx);
            debug!(exemption = purifier.id, paths = set.len(), "exemption finished");
            (!set.is_empty()).then(|| (purifier.id.to_string(), set))
        })
        .collect()
}

pub fn evaluate(
    diff: &ProposalDiff,
    ctx: &EvaluationContext<'_>,
) -> Result<Evaluation, EngineError> {
    if diff.filename().is_empty() {
        warn!("refusing to evaluate a diff without a filename");
        return Err(EngineError::MissingFilename);
    }
    if !checks::registry()
        .iter()
        .any(|check| ctx.policy.check_enabled(check.root))
    {
        warn!(profile = %ctx.policy.profile, "every check is disabled");
        return Err(EngineError::NoChecksEnabled {
            profile: ctx.policy.profile.clone(),
        });
    }

    let raw = run_checks(diff, ctx);
    let exemptions = run_purifiers(&raw, diff, ctx);
    let merged = ancestor_join(&raw, &exemptions);
    let verdict = finalize(diff, &merged.errors);

    Ok(Evaluation {
        verdict,
        raw,
        neutralized: merged.neutralized,
    })
}
