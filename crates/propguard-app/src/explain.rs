//! The `explain` use case: look up error path and exemption documentation.

use propguard_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation for the identifier.
    Found(Explanation),
    /// Unknown identifier; includes available error paths and exemptions.
    NotFound {
        identifier: String,
        available_paths: &'static [&'static str],
        available_exemptions: &'static [&'static str],
    },
}

/// Look up an explanation for an error path, check root, or exemption id.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_paths: explain::all_error_paths(),
            available_exemptions: explain::all_exemptions(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Remediation\n");
    out.push_str("-----------\n");
    out.push_str(exp.remediation);
    out.push_str("\n\n");
    out.push_str("Examples\n");
    out.push_str("--------\n\n");
    out.push_str("Before:\n");
    out.push_str("```yaml\n");
    out.push_str(exp.examples.before);
    out.push('\n');
    out.push_str("```\n\n");
    out.push_str("After:\n");
    out.push_str("```yaml\n");
    out.push_str(exp.examples.after);
    out.push('\n');
    out.push_str("```\n");

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(identifier: &str, paths: &[&str], exemptions: &[&str]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown error path or exemption: {}\n\n", identifier));
    out.push_str("Available error paths:\n");
    for path in paths {
        out.push_str(&format!("  - {}\n", path));
    }
    out.push_str("\nAvailable exemptions:\n");
    for id in exemptions {
        out.push_str(&format!("  - {}\n", id));
    }

    out
}
