//! Turn the merged error tree into a verdict.

use crate::model::ProposalDiff;
use crate::tree::ErrorTree;
use propguard_types::{ChangeType, Verdict};
use tracing::info;

/// Label-worthy classification of the change, if the head is well-formed enough to have one.
pub fn classify(diff: &ProposalDiff) -> Option<ChangeType> {
    diff.head.kind.as_ref()?;
    let head_status = diff.head.status()?;

    // Status is read raw on the base side: a base with no status at all is a new file.
    if diff.base.status.is_none() {
        return Some(ChangeType::New);
    }
    if diff.base.status() != Some(head_status) {
        return Some(ChangeType::Status);
    }
    Some(ChangeType::Update)
}

pub fn finalize(diff: &ProposalDiff, errors: &ErrorTree) -> Verdict {
    let verdict = Verdict {
        filename: diff.filename().to_string(),
        change_type: classify(diff),
        errors: errors
            .leaves()
            .into_iter()
            .map(|(_, message)| message.to_string())
            .collect(),
    };

    if verdict.passed() {
        info!("{} passed", verdict.filename);
    }
    verdict
}
