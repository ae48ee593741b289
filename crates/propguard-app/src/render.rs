//! Render use cases: markdown and GitHub annotations from in-memory reports.

use propguard_render::RenderableReport;

pub fn render_markdown(report: &RenderableReport) -> String {
    propguard_render::render_markdown(report)
}

pub fn render_annotations(report: &RenderableReport, max: usize) -> Vec<String> {
    propguard_render::render_github_annotations(report)
        .into_iter()
        .take(max)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use propguard_render::{RenderableVerdict, RenderableVerdictStatus};

    fn sample_report() -> RenderableReport {
        RenderableReport {
            status: RenderableVerdictStatus::Fail,
            profile: "eip".to_string(),
            verdicts: vec![RenderableVerdict {
                filename: "EIPS/eip-7.md".to_string(),
                label: None,
                errors: vec!["one".to_string(), "two".to_string(), "three".to_string()],
            }],
            exemptions: Vec::new(),
            runtime_error: None,
        }
    }

    #[test]
    fn render_annotations_respects_max() {
        let out = render_annotations(&sample_report(), 2);
        assert_eq!(out.len(), 2);
        assert!(out[1].ends_with("[propguard] two"));
    }

    #[test]
    fn render_markdown_delegates() {
        let md = render_markdown(&sample_report());
        assert!(md.starts_with("# Propguard report"));
        assert!(md.contains("- three"));
    }
}
