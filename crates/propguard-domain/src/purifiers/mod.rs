//! Exemption transforms ("purifiers").
//!
//! Every exemption reads the same raw error tree plus context and returns the paths it
//! neutralizes. None of them sees another exemption's output.

use crate::context::EvaluationContext;
use crate::model::ProposalDiff;
use crate::overrides::OverrideSet;
use crate::tree::ErrorTree;
use propguard_types::ids;

mod canonical_document;
mod editor_approval;
mod status_change_allowed;
mod withdrawn;


pub use editor_approval::editor_overridable;

pub type PurifierFn = fn(&ErrorTree, &ProposalDiff, &EvaluationContext<'_>) -> OverrideSet;

#[derive(Clone, Copy)]
pub struct Purifier {
    pub id: &'static str,
    pub run: PurifierFn,
}

const PURIFIERS: &[Purifier] = &[
    Purifier {
        id: ids::EXEMPT_CANONICAL_DOCUMENT,
        run: canonical_document::run,
    },
    Purifier {
        id: ids::EXEMPT_EDITOR_APPROVAL,
        run: editor_approval::run,
    },
    Purifier {
        id: ids::EXEMPT_STATUS_CHANGE_ALLOWED,
        run: status_change_allowed::run,
    },
    Purifier {
        id: ids::EXEMPT_WITHDRAWN,
        run: withdrawn::run,
    },
];

pub fn registry() -> &'static [Purifier] {
    PURIFIERS
}
