//! Stable DTOs and IDs used across the propguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted verdicts and report
//! - stable string IDs for error paths and exemptions
//! - the typed error path used by checks, exemptions, and the merge
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod path;
pub mod verdict;

pub use explain::{Explanation, lookup_explanation};
pub use path::{ErrorPath, ParsePathError};
pub use verdict::{
    AppliedExemption, ChangeType, ReportData, SCHEMA_REPORT_V1, ToolMeta, Verdict, VerdictReport,
    VerdictStatus,
};
