use crate::model::ApprovalRecord;
use crate::policy::Policy;

/// Everything an evaluation needs besides the diff itself.
///
/// Built once by the caller from fully resolved inputs and handed by reference to every
/// check and exemption; nothing inside the engine looks anything up on its own.
#[derive(Clone, Copy, Debug)]
pub struct EvaluationContext<'a> {
    pub policy: &'a Policy,
    pub approvals: &'a [ApprovalRecord],
    /// Login of the pull request author.
    pub submitter: Option<&'a str>,
}

impl<'a> EvaluationContext<'a> {
    pub fn new(policy: &'a Policy) -> Self {
        Self {
            policy,
            approvals: &[],
            submitter: None,
        }
    }

    pub fn with_approvals(mut self, approvals: &'a [ApprovalRecord]) -> Self {
        self.approvals = approvals;
        self
    }

    pub fn with_submitter(mut self, submitter: Option<&'a str>) -> Self {
        self.submitter = submitter;
        self
    }

    /// Logins that approved, or opened, the pull request. Lowercased.
    pub fn approvers(&self) -> impl Iterator<Item = String> + '_ {
        self.approvals
            .iter()
            .map(|a| a.login.as_str())
            .chain(self.submitter)
            .map(str::to_ascii_lowercase)
    }

    /// First approval by an editor recorded against exactly this content digest.
    pub fn editor_approval(&self, content_digest: &str) -> Option<&'a ApprovalRecord> {
        self.approvals.iter().find(|a| {
            self.policy.is_editor(&a.login)
                && a.content_sha
                    .as_deref()
                    .is_some_and(|sha| sha.eq_ignore_ascii_case(content_digest))
        })
    }
}
