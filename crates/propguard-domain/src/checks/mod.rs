//! Rule evaluators.
//!
//! Each check owns one root segment of the error vocabulary and returns the subtree below
//! it. Checks never see each other's output, so they can run in any order or in parallel.

use crate::context::EvaluationContext;
use crate::model::ProposalDiff;
use crate::tree::ErrorTree;
use propguard_types::ids;

mod approval;
mod authors;
mod content;
mod file;
mod identity;
mod status;
mod utils;


pub type CheckFn = fn(&ProposalDiff, &EvaluationContext<'_>) -> Option<ErrorTree>;

#[derive(Clone, Copy)]
pub struct Check {
    /// Root segment the returned subtree is grafted under.
    pub root: &'static str,
    pub run: CheckFn,
}

const CHECKS: &[Check] = &[
    Check {
        root: ids::ROOT_APPROVAL,
        run: approval::run,
    },
    Check {
        root: ids::ROOT_AUTHORS,
        run: authors::run,
    },
    Check {
        root: ids::ROOT_CONTENT,
        run: content::run,
    },
    Check {
        root: ids::ROOT_FILE,
        run: file::run,
    },
    Check {
        root: ids::ROOT_IDENTITY,
        run: identity::run,
    },
    Check {
        root: ids::ROOT_STATUS,
        run: status::run,
    },
];

pub fn registry() -> &'static [Check] {
    CHECKS
}
