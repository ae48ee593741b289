use crate::{RenderableReport, RenderableVerdictStatus};

/// Render the pull request status comment.
///
/// Output depends only on the report, so re-rendering an unchanged report yields the same
/// body and the comment is left alone.
pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Propguard report\n\n");
    let verdict = match report.status {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    let failing = report.verdicts.iter().filter(|v| !v.errors.is_empty()).count();
    out.push_str(&format!(
        "- Verdict: **{}**\n- Profile: `{}`\n- Proposals: {} (evaluated) / {} (failing)\n\n",
        verdict,
        report.profile,
        report.verdicts.len(),
        failing
    ));

    if let Some(err) = &report.runtime_error {
        out.push_str(&format!("> Runtime error: {}\n\n", err));
    }

    if failing == 0 && report.runtime_error.is_none() {
        out.push_str("All proposals passed.\n");
    }

    for v in report.verdicts.iter().filter(|v| !v.errors.is_empty()) {
        match &v.label {
            Some(label) => out.push_str(&format!("## `{}` ({})\n\n", v.filename, label)),
            None => out.push_str(&format!("## `{}`\n\n", v.filename)),
        }
        for message in &v.errors {
            out.push_str(&format!("- {}\n", message));
        }
        out.push('\n');
    }

    if !report.exemptions.is_empty() {
        if failing == 0 && report.runtime_error.is_none() {
            out.push('\n');
        }
        out.push_str("## Exemptions applied\n\n");
        for e in &report.exemptions {
            out.push_str(&format!(
                "- `{}`: `{}` neutralized by `{}`\n",
                e.filename, e.path, e.exemption
            ));
        }
    }

    out
}
