//! Pure proposal evaluation (no IO).
//!
//! Input: a proposal diff and a fully resolved evaluation context.
//! Output: a verdict, plus the raw error tree and the exemptions that applied.

#![forbid(unsafe_code)]

pub mod checks;
pub mod context;
pub mod fingerprint;
pub mod finalize;
pub mod merge;
pub mod model;
pub mod overrides;
pub mod policy;
pub mod purifiers;
pub mod tree;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use context::EvaluationContext;
pub use engine::{EngineError, Evaluation, evaluate, run_checks, run_purifiers};
pub use merge::{ExemptionSets, Merged, Neutralization, ancestor_join};
pub use model::{ApprovalRecord, ProposalDiff, ProposalFile, Status};
pub use overrides::OverrideSet;
pub use policy::{Policy, StatusTransition};
pub use tree::ErrorTree;
