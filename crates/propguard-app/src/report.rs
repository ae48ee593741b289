use anyhow::Context;
use propguard_render::{
    RenderableExemption, RenderableReport, RenderableVerdict, RenderableVerdictStatus,
};
use propguard_types::{
    ReportData, SCHEMA_REPORT_V1, ToolMeta, VerdictReport, VerdictStatus, ids,
};
use time::OffsetDateTime;

pub fn parse_report_json(text: &str) -> anyhow::Result<VerdictReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse propguard v1 report")
}

pub fn serialize_report(report: &VerdictReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &VerdictReport) -> RenderableReport {
    RenderableReport {
        status: match report.status {
            VerdictStatus::Pass => RenderableVerdictStatus::Pass,
            VerdictStatus::Fail => RenderableVerdictStatus::Fail,
        },
        profile: report.data.profile.clone(),
        verdicts: report
            .verdicts
            .iter()
            .map(|v| RenderableVerdict {
                filename: v.filename.clone(),
                label: v.change_type.map(|t| t.label().to_string()),
                errors: v.errors.clone(),
            })
            .collect(),
        exemptions: report
            .exemptions
            .iter()
            .map(|e| RenderableExemption {
                filename: e.filename.clone(),
                path: e.path.to_string(),
                exemption: e.exemption.clone(),
            })
            .collect(),
        runtime_error: report.data.runtime_error.clone(),
    }
}

/// A failing report for a run that could not produce verdicts.
///
/// Written in place of the real report so consumers never see a stale or missing artifact.
pub fn runtime_error_report(message: &str, profile: &str) -> VerdictReport {
    let now = OffsetDateTime::now_utc();
    VerdictReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "propguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at: now,
        finished_at: now,
        status: VerdictStatus::Fail,
        verdicts: Vec::new(),
        labels: Vec::new(),
        exemptions: Vec::new(),
        data: ReportData {
            profile: profile.to_string(),
            runtime_error: Some(format!("{}: {message}", ids::PATH_TOOL_RUNTIME)),
            ..ReportData::default()
        },
    }
}
