//! The `publish` use case: mirror a report onto the pull request.
//!
//! The host is a trait so the hosting API client stays outside this workspace. Both
//! operations are idempotent: re-publishing an unchanged report issues no writes.

use crate::render::render_markdown;
use crate::report::to_renderable;
use propguard_types::VerdictReport;
use std::collections::BTreeSet;
use tracing::{debug, info};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comment {
    pub id: u64,
    pub body: String,
}

/// The slice of a hosting API that publishing needs.
pub trait PullRequestHost {
    /// The comment this tool's account posted earlier, if any.
    fn own_comment(&self) -> anyhow::Result<Option<Comment>>;
    fn create_comment(&mut self, body: &str) -> anyhow::Result<()>;
    fn update_comment(&mut self, id: u64, body: &str) -> anyhow::Result<()>;
    fn labels(&self) -> anyhow::Result<Vec<String>>;
    /// Replace every label on the pull request.
    fn set_labels(&mut self, labels: &[String]) -> anyhow::Result<()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommentAction {
    Created,
    Updated,
    Unchanged,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelAction {
    Replaced,
    Unchanged,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublishOutcome {
    pub comment: CommentAction,
    pub labels: LabelAction,
}

/// Create the status comment, or update ours when its body differs.
pub fn post_comment<H: PullRequestHost + ?Sized>(
    host: &mut H,
    body: &str,
) -> anyhow::Result<CommentAction> {
    match host.own_comment()? {
        Some(existing) if existing.body == body => {
            debug!(comment = existing.id, "comment already up to date");
            Ok(CommentAction::Unchanged)
        }
        Some(existing) => {
            host.update_comment(existing.id, body)?;
            Ok(CommentAction::Updated)
        }
        None => {
            host.create_comment(body)?;
            Ok(CommentAction::Created)
        }
    }
}

/// Set the label set wholesale when it differs from the current one (as sets).
pub fn update_labels<H: PullRequestHost + ?Sized>(
    host: &mut H,
    desired: &[String],
) -> anyhow::Result<LabelAction> {
    let current: BTreeSet<String> = host.labels()?.into_iter().collect();
    let wanted: BTreeSet<String> = desired.iter().cloned().collect();

    if current == wanted {
        debug!(labels = ?wanted, "labels match");
        return Ok(LabelAction::Unchanged);
    }

    let add: Vec<&String> = wanted.difference(&current).collect();
    let remove: Vec<&String> = current.difference(&wanted).collect();
    info!(?add, ?remove, "replacing labels");
    let labels: Vec<String> = wanted.into_iter().collect();
    host.set_labels(&labels)?;
    Ok(LabelAction::Replaced)
}

/// Post the rendered comment and sync labels for `report`.
pub fn publish<H: PullRequestHost + ?Sized>(
    host: &mut H,
    report: &VerdictReport,
) -> anyhow::Result<PublishOutcome> {
    let body = render_markdown(&to_renderable(report));
    let comment = post_comment(host, &body)?;
    let labels = update_labels(host, &report.labels)?;
    Ok(PublishOutcome { comment, labels })
}

/// A pull request held in memory. Counts writes so callers can assert idempotency.
#[derive(Clone, Debug, Default)]
pub struct InMemoryPullRequest {
    pub comments: Vec<Comment>,
    /// Id of the comment owned by this tool.
    pub own_comment_id: Option<u64>,
    pub labels: Vec<String>,
    pub comment_writes: usize,
    pub label_writes: usize,
}

impl PullRequestHost for InMemoryPullRequest {
    fn own_comment(&self) -> anyhow::Result<Option<Comment>> {
        Ok(self
            .own_comment_id
            .and_then(|id| self.comments.iter().find(|c| c.id == id).cloned()))
    }

    fn create_comment(&mut self, body: &str) -> anyhow::Result<()> {
        let id = self.comments.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        self.comments.push(Comment {
            id,
            body: body.to_string(),
        });
        self.own_comment_id = Some(id);
        self.comment_writes += 1;
        Ok(())
    }

    fn update_comment(&mut self, id: u64, body: &str) -> anyhow::Result<()> {
        let Some(comment) = self.comments.iter_mut().find(|c| c.id == id) else {
            anyhow::bail!("no comment with id {id}");
        };
        comment.body = body.to_string();
        self.comment_writes += 1;
        Ok(())
    }

    fn labels(&self) -> anyhow::Result<Vec<String>> {
        Ok(self.labels.clone())
    }

    fn set_labels(&mut self, labels: &[String]) -> anyhow::Result<()> {
        self.labels = labels.to_vec();
        self.label_writes += 1;
        Ok(())
    }
}
