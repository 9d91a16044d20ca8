//! CLI entry point for userstyles.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `userstyles-app` crate.

mod logging;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use userstyles_app::{
    CheckInput, ExplainOutput, catalog_schema_json, load_catalog, parse_report_json,
    render_annotations, render_markdown, run_check, run_explain, runtime_error_report,
    serialize_report, to_renderable, verdict_exit_code,
};
use userstyles_settings::Overrides;
use userstyles_types::{UserstylesReport, VerdictStatus};

#[derive(Parser, Debug)]
#[command(
    name = "userstyles",
    version,
    about = "Validate and lint userstyle catalogs (userstyles.json)"
)]
struct Cli {
    /// Path to userstyles config TOML. A missing file means defaults.
    #[arg(long, default_value = "userstyles.toml", global = true)]
    config: Utf8PathBuf,

    /// Override profile (strict|warn|compat).
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Override maximum findings to emit.
    #[arg(long, global = true)]
    max_findings: Option<u32>,

    /// Log debug diagnostics to stderr (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a catalog and write artifacts.
    Check {
        /// Catalog file (`.json`, `.yml` or `.yaml`).
        #[arg(long, default_value = "userstyles.json")]
        catalog: Utf8PathBuf,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/userstyles/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/userstyles/comment.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/userstyles/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/userstyles/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g., "schema.enum") or code (e.g., "unknown_category") to explain.
        identifier: String,
    },

    /// Print the JSON Schema of the catalog document.
    Schema {
        /// Where to write the schema (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    match cli.cmd {
        Commands::Check {
            ref catalog,
            ref report_out,
            write_markdown,
            ref markdown_out,
        } => cmd_check(&cli, catalog, report_out, write_markdown, markdown_out),
        Commands::Md { report, output } => cmd_md(report, output),
        Commands::Annotations { report, max } => cmd_annotations(report, max),
        Commands::Explain { identifier } => cmd_explain(&identifier),
        Commands::Schema { output } => cmd_schema(output),
    }
}

fn cmd_check(
    cli: &Cli,
    catalog: &Utf8Path,
    report_out: &Utf8Path,
    write_markdown: bool,
    markdown_out: &Utf8Path,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let cfg_text = read_config(&cli.config)?;

        let overrides = Overrides {
            profile: cli.profile.clone(),
            max_findings: cli.max_findings,
        };

        let document = load_catalog(catalog)?;

        let input = CheckInput {
            document: &document,
            config_text: &cfg_text,
            overrides,
        };

        let output = run_check(input)?;

        write_report_file(report_out, &output.report).context("write report json")?;
        tracing::debug!(path = %report_out, "wrote report");

        if write_markdown {
            let renderable = to_renderable(&output.report);
            let md = render_markdown(&renderable);
            write_text_file(markdown_out, &md).context("write markdown")?;
            tracing::debug!(path = %markdown_out, "wrote markdown");
        }

        let verdict = &output.report.verdict;
        eprintln!(
            "userstyles: {} ({} error, {} warning, {} info)",
            match verdict.status {
                VerdictStatus::Pass => "pass",
                VerdictStatus::Warn => "warn",
                VerdictStatus::Fail => "fail",
            },
            verdict.counts.error,
            verdict.counts.warn,
            verdict.counts.info
        );

        Ok(verdict_exit_code(verdict.status))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let profile = cli.profile.as_deref().unwrap_or("unknown");
            let report = runtime_error_report(catalog.as_str(), profile, &format!("{err:#}"));
            let _ = write_report_file(report_out, &report);
            eprintln!("userstyles error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// Missing config means defaults; any other read failure is an error.
fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(config = %path, "config not found; using defaults");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read config: {}", path)),
    }
}

fn write_report_file(path: &Utf8Path, report: &UserstylesReport) -> anyhow::Result<()> {
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
    let renderable = to_renderable(&report);
    let md = render_markdown(&renderable);

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
    let renderable = to_renderable(&report);
    let annotations = render_annotations(&renderable, max);

    for annotation in annotations {
        println!("{}", annotation);
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", userstyles_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                userstyles_app::format_not_found(&identifier, available_check_ids, available_codes)
            );
            std::process::exit(1);
        }
    }
}

fn cmd_schema(output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let mut schema = catalog_schema_json()?;
    schema.push('\n');

    if let Some(out_path) = output {
        write_text_file(&out_path, &schema).context("write schema output")?;
    } else {
        print!("{}", schema);
    }

    Ok(())
}
