//! The `check` use case: evaluate every proposal in a request and produce a report.

use anyhow::Context;
use propguard_domain::EvaluationContext;
use propguard_settings::{Overrides, ResolvedConfig};
use propguard_types::{
    AppliedExemption, ReportData, SCHEMA_REPORT_V1, ToolMeta, VerdictReport, VerdictStatus,
};
use std::collections::BTreeSet;
use time::OffsetDateTime;
use tracing::info;

use crate::request::parse_request_json;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// Request document contents.
    pub request_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: VerdictReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: parse config and request, evaluate each proposal, build the report.
///
/// A precondition failure on any proposal fails the whole run; no partial report is built.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        propguard_settings::PropguardConfigV1::default()
    } else {
        propguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = propguard_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;

    let request = parse_request_json(input.request_text)?;
    if request.proposals.is_empty() {
        anyhow::bail!("request contains no proposals");
    }

    let ctx = EvaluationContext::new(&resolved.policy)
        .with_approvals(&request.approvals)
        .with_submitter(request.submitter.as_deref());

    let mut verdicts = Vec::with_capacity(request.proposals.len());
    let mut exemptions = Vec::new();
    let mut errors_total = 0usize;

    for (idx, diff) in request.proposals.iter().enumerate() {
        let evaluation = propguard_domain::evaluate(diff, &ctx)
            .with_context(|| format!("evaluate proposal #{idx}"))?;

        errors_total += evaluation.raw.leaf_count();
        exemptions.extend(evaluation.neutralized.into_iter().map(|n| AppliedExemption {
            filename: evaluation.verdict.filename.clone(),
            path: n.path,
            exemption: n.exemption,
            matched: n.matched,
        }));
        verdicts.push(evaluation.verdict);
    }

    let labels: BTreeSet<String> = verdicts
        .iter()
        .filter_map(|v| v.change_type)
        .map(|t| t.label().to_string())
        .collect();

    let status = VerdictStatus::from_verdicts(&verdicts);
    let data = ReportData {
        profile: resolved.policy.profile.clone(),
        proposals_evaluated: verdicts.len(),
        proposals_failing: verdicts.iter().filter(|v| !v.passed()).count(),
        errors_total,
        errors_neutralized: exemptions.len(),
        runtime_error: None,
    };
    info!(
        profile = %data.profile,
        evaluated = data.proposals_evaluated,
        failing = data.proposals_failing,
        "check finished"
    );

    let report = VerdictReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "propguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        status,
        verdicts,
        labels: labels.into_iter().collect(),
        exemptions,
        data,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = pass, 2 = fail.
pub fn verdict_exit_code(status: VerdictStatus) -> i32 {
    match status {
        VerdictStatus::Pass => 0,
        VerdictStatus::Fail => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use propguard_domain::fingerprint::content_digest;
    use propguard_types::{ChangeType, ids};
    use serde_json::json;

    const CONTENT: &str = "## Abstract\n\nA.\n\n## Specification\n\nS.\n\n## Rationale\n\nR.\n\n## Security Considerations\n\nNone.\n\n## Copyright\n\nCC0.\n";

    fn file(name: &str, status: &str) -> serde_json::Value {
        json!({
            "name": name,
            "number": 1234,
            "authors": ["Alice (@alice)"],
            "status": status,
            "type": "Standards Track",
            "content": CONTENT,
        })
    }

    fn run(config: &str, request: serde_json::Value) -> anyhow::Result<CheckOutput> {
        let text = request.to_string();
        run_check(CheckInput {
            config_text: config,
            request_text: &text,
            overrides: Overrides::default(),
        })
    }

    #[test]
    fn empty_config_uses_eip_profile() {
        let out = run(
            "",
            json!({
                "submitter": "alice",
                "proposals": [{"base": file("EIPS/eip-1234.md", "Draft"), "head": file("EIPS/eip-1234.md", "Draft")}]
            }),
        )
        .unwrap();
        assert_eq!(out.resolved_config.policy.profile, "eip");
        assert_eq!(out.report.status, VerdictStatus::Pass);
        assert_eq!(out.report.labels, vec![ids::LABEL_UPDATE.to_string()]);
        assert_eq!(out.report.data.proposals_evaluated, 1);
        assert_eq!(out.report.schema, SCHEMA_REPORT_V1);
    }

    #[test]
    fn failing_and_passing_proposals_share_one_report() {
        let mut unstatused_base = file("EIPS/eip-1234.md", "Draft");
        unstatused_base["status"] = json!(null);

        let out = run(
            "",
            json!({
                "submitter": "alice",
                "proposals": [
                    {"base": file("EIPS/eip-1234.md", "Draft"), "head": file("EIPS/eip-1234.md", "Final")},
                    {"base": unstatused_base, "head": file("EIPS/eip-1234.md", "Draft")}
                ]
            }),
        )
        .unwrap();

        let report = &out.report;
        assert_eq!(report.status, VerdictStatus::Fail);
        assert_eq!(report.verdicts[0].change_type, Some(ChangeType::Status));
        assert_eq!(
            report.verdicts[0].errors,
            vec!["EIPS/eip-1234.md status changed from Draft to Final"]
        );
        assert!(report.verdicts[1].passed());
        assert_eq!(report.verdicts[1].change_type, Some(ChangeType::New));
        assert_eq!(
            report.labels,
            vec![ids::LABEL_NEW.to_string(), ids::LABEL_STATUS.to_string()]
        );
        assert_eq!(report.data.proposals_evaluated, 2);
        assert_eq!(report.data.proposals_failing, 1);
        assert_eq!(report.data.errors_total, 1);
        assert_eq!(report.data.errors_neutralized, 0);
    }

    #[test]
    fn editor_approval_is_reported_as_applied_exemption() {
        let mut head = file("drafts/idea.md", "Draft");
        head["number"] = json!(null);
        let base = head.clone();
        let digest = content_digest(CONTENT);

        let out = run(
            "editors = [\"sam\"]",
            json!({
                "submitter": "alice",
                "approvals": [{"login": "Sam", "content_sha": digest}],
                "proposals": [{"base": base, "head": head}]
            }),
        )
        .unwrap();

        let report = &out.report;
        assert_eq!(report.status, VerdictStatus::Pass);
        assert_eq!(report.exemptions.len(), 1);
        assert_eq!(report.exemptions[0].filename, "drafts/idea.md");
        assert_eq!(report.exemptions[0].path.to_string(), ids::PATH_FILE_NAME);
        assert_eq!(report.exemptions[0].exemption, ids::EXEMPT_EDITOR_APPROVAL);
        assert_eq!(report.data.errors_neutralized, 1);
    }

    #[test]
    fn precondition_failure_fails_the_run() {
        let err = run("", json!({"proposals": [{}]})).unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("evaluate proposal #0"));
        assert!(chain.contains("names no file"));
    }

    #[test]
    fn empty_request_is_an_error() {
        let err = run("", json!({"proposals": []})).unwrap_err();
        assert!(err.to_string().contains("no proposals"));
    }

    #[test]
    fn bad_config_is_an_error() {
        let err = run("profile = \"nope\"", json!({"proposals": []})).unwrap_err();
        assert!(format!("{err:#}").contains("unknown profile: nope"));
    }

    #[test]
    fn verdict_exit_codes() {
        assert_eq!(verdict_exit_code(VerdictStatus::Pass), 0);
        assert_eq!(verdict_exit_code(VerdictStatus::Fail), 2);
    }
}
