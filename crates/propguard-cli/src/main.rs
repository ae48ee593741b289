//! CLI entry point for propguard.
//!
//! This module is thin: it handles argument parsing, I/O, logging setup, and exit codes.
//! All business logic lives in the `propguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use propguard_app::{
    CheckInput, ExplainOutput, format_explanation, format_not_found, parse_report_json,
    render_annotations, render_markdown, run_check, run_explain, runtime_error_report,
    serialize_report, to_renderable, verdict_exit_code,
};
use propguard_settings::{DEFAULT_PROFILE, Overrides};
use propguard_types::VerdictReport;
use tracing::error;

#[derive(Parser, Debug)]
#[command(
    name = "propguard",
    version,
    about = "Review gate for proposal pull requests"
)]
struct Cli {
    /// Path to propguard config TOML [default: propguard.toml, defaults apply if absent].
    #[arg(long)]
    config: Option<Utf8PathBuf>,

    /// Override profile (eip|strict).
    #[arg(long)]
    profile: Option<String>,

    /// Log at debug level regardless of PROPGUARD_LOG.
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate the proposals in a request document and write artifacts.
    Check {
        /// Request document (JSON) with submitter, approvals, and proposal diffs.
        #[arg(long)]
        input: Utf8PathBuf,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/propguard/report.json")]
        report_out: Utf8PathBuf,

        /// Write the Markdown PR comment alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown comment (if enabled).
        #[arg(long, default_value = "artifacts/propguard/comment.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Render the Markdown PR comment from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/propguard/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/propguard/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain an error path or exemption id with remediation guidance.
    Explain {
        /// Error path (e.g. "status.transition") or exemption id (e.g. "editor_approval").
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Commands::Check {
            ref input,
            ref report_out,
            write_markdown,
            ref markdown_out,
        } => cmd_check(&cli, input, report_out, write_markdown, markdown_out),
        Commands::Md { report, output } => cmd_md(report, output),
        Commands::Annotations { report, max } => cmd_annotations(report, max),
        Commands::Explain { identifier } => cmd_explain(&identifier),
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("PROPGUARD_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

const DEFAULT_CONFIG: &str = "propguard.toml";

/// Config text to resolve. Only the implicit default path may be absent.
fn read_config(explicit: Option<&Utf8Path>) -> anyhow::Result<String> {
    let Some(path) = explicit else {
        return match std::fs::read_to_string(DEFAULT_CONFIG) {
            Ok(text) => Ok(text),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
            Err(err) => Err(err).with_context(|| format!("read config: {DEFAULT_CONFIG}")),
        };
    };
    std::fs::read_to_string(path).with_context(|| format!("read config: {path}"))
}

fn cmd_check(
    cli: &Cli,
    input: &Utf8Path,
    report_out: &Utf8Path,
    write_markdown: bool,
    markdown_out: &Utf8Path,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let cfg_text = read_config(cli.config.as_deref())?;
        let request_text = std::fs::read_to_string(input)
            .with_context(|| format!("read request: {}", input))?;

        let output = run_check(CheckInput {
            config_text: &cfg_text,
            request_text: &request_text,
            overrides: Overrides {
                profile: cli.profile.clone(),
            },
        })?;

        write_report_file(report_out, &output.report).context("write report json")?;

        if write_markdown {
            let md = render_markdown(&to_renderable(&output.report));
            write_text_file(markdown_out, &md).context("write markdown")?;
        }

        Ok(verdict_exit_code(output.report.status))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let profile = cli.profile.as_deref().unwrap_or(DEFAULT_PROFILE);
            let report = runtime_error_report(&format!("{err:#}"), profile);
            if let Err(write_err) = write_report_file(report_out, &report) {
                error!("could not write runtime error report: {write_err:#}");
            }
            eprintln!("propguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn write_report_file(path: &Utf8Path, report: &VerdictReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    let data = serialize_report(report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&to_renderable(&report));

    if let Some(out_path) = output {
        write_text_file(&out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_annotations(report_path: Utf8PathBuf, max: usize) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;

    for annotation in render_annotations(&to_renderable(&report), max) {
        println!("{}", annotation);
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_paths,
            available_exemptions,
        } => {
            eprint!(
                "{}",
                format_not_found(&identifier, available_paths, available_exemptions)
            );
            std::process::exit(1);
        }
    }
}
