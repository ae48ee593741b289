//! Use case orchestration for propguard.
//!
//! This crate provides the application layer: use cases that coordinate the settings, domain,
//! and render layers. It is thin and delegates the real work to those layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod explain;
mod publish;
mod render;
mod report;
mod request;

pub use check::{CheckInput, CheckOutput, run_check, verdict_exit_code};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use publish::{
    Comment, CommentAction, InMemoryPullRequest, LabelAction, PublishOutcome, PullRequestHost,
    post_comment, publish, update_labels,
};
pub use render::{render_annotations, render_markdown};
pub use report::{parse_report_json, runtime_error_report, serialize_report, to_renderable};
pub use request::{CheckRequest, parse_request_json};
