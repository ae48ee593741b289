use crate::RenderableReport;

/// Render errors as GitHub Actions workflow command annotations, one per error.
///
/// Format:
/// `::error file={filename}::[propguard] {message}`
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    let mut out = Vec::new();

    if let Some(err) = &report.runtime_error {
        out.push(format!(
            "::error::{}",
            escape_data(&format!("[propguard] runtime error: {err}"))
        ));
    }

    for v in &report.verdicts {
        for message in &v.errors {
            out.push(format!(
                "::error file={}::{}",
                escape_property(&v.filename),
                escape_data(&format!("[propguard] {message}"))
            ));
        }
    }

    out
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderableVerdict, RenderableVerdictStatus};

    fn report(verdicts: Vec<RenderableVerdict>) -> RenderableReport {
        RenderableReport {
            status: RenderableVerdictStatus::Fail,
            profile: "eip".to_string(),
            verdicts,
            exemptions: Vec::new(),
            runtime_error: None,
        }
    }

    #[test]
    fn one_annotation_per_error() {
        let r = report(vec![
            RenderableVerdict {
                filename: "EIPS/eip-1.md".to_string(),
                label: None,
                errors: vec!["first".to_string(), "second".to_string()],
            },
            RenderableVerdict {
                filename: "EIPS/eip-2.md".to_string(),
                label: Some("c-update".to_string()),
                errors: Vec::new(),
            },
        ]);
        assert_eq!(
            render_github_annotations(&r),
            vec![
                "::error file=EIPS/eip-1.md::[propguard] first",
                "::error file=EIPS/eip-1.md::[propguard] second",
            ]
        );
    }

    #[test]
    fn escapes_workflow_command_characters() {
        let r = report(vec![RenderableVerdict {
            filename: "a,b:c.md".to_string(),
            label: None,
            errors: vec!["100%\nsure".to_string()],
        }]);
        assert_eq!(
            render_github_annotations(&r),
            vec!["::error file=a%2Cb%3Ac.md::[propguard] 100%25%0Asure"]
        );
    }

    #[test]
    fn runtime_error_comes_first() {
        let mut r = report(Vec::new());
        r.runtime_error = Some("bad input".to_string());
        assert_eq!(
            render_github_annotations(&r),
            vec!["::error::[propguard] runtime error: bad input"]
        );
    }
}
