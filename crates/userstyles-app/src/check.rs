//! The `check` use case: validate a catalog and produce a report.

use anyhow::Context;
use time::OffsetDateTime;
use userstyles_domain::model::CatalogDocument;
use userstyles_settings::{Overrides, ResolvedConfig};
use userstyles_types::{
    ReportEnvelope, RunMeta, SCHEMA_REPORT_V1, ToolMeta, UserstylesReport, VerdictStatus,
};

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Catalog document, already loaded.
    pub document: &'a CatalogDocument,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: UserstylesReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: parse config, evaluate the catalog, produce a report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        userstyles_settings::UserstylesConfigV1::default()
    } else {
        userstyles_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = userstyles_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;
    tracing::debug!(
        profile = %resolved.effective.profile,
        max_findings = resolved.effective.max_findings,
        "resolved config"
    );

    let domain_report = userstyles_domain::evaluate(input.document, &resolved.effective);
    let userstyles_domain::report::DomainReport {
        verdict,
        findings,
        data,
        ..
    } = domain_report;

    tracing::debug!(
        catalog = %data.catalog,
        schema_violations = data.schema_violations,
        lints_ran = data.lints_ran,
        findings = data.findings_total,
        "evaluated catalog"
    );

    let finished_at = OffsetDateTime::now_utc();
    let duration_ms = (finished_at - started_at).whole_milliseconds().max(0) as u64;

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta::current(),
        run: RunMeta {
            started_at,
            ended_at: Some(finished_at),
            duration_ms: Some(duration_ms),
        },
        verdict,
        findings,
        data,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(status: VerdictStatus) -> i32 {
    match status {
        VerdictStatus::Pass => 0,
        VerdictStatus::Warn => 0,
        VerdictStatus::Fail => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use userstyles_types::ids;

    fn discord(category: &str) -> CatalogDocument {
        CatalogDocument::new(
            "userstyles.json",
            json!({
                "userstyles": {
                    "discord": {
                        "name": "Discord",
                        "category": category,
                        "readme": {
                            "app-link": "https://discord.com",
                            "current-maintainers": []
                        }
                    }
                }
            }),
        )
    }

    #[test]
    fn empty_config_uses_defaults() {
        let doc = discord("messaging");
        let input = CheckInput {
            document: &doc,
            config_text: "",
            overrides: Overrides::default(),
        };

        let output = run_check(input).expect("run_check");
        assert_eq!(output.resolved_config.effective.profile, "strict");
        assert_eq!(output.report.schema, SCHEMA_REPORT_V1);
        assert_eq!(output.report.data.profile, "strict");
        // Unmaintained is informational in every profile.
        assert_eq!(output.report.verdict.status, VerdictStatus::Pass);
        assert_eq!(output.report.verdict.counts.info, 1);
        assert!(output.report.run.ended_at.is_some());
    }

    #[test]
    fn unknown_category_fails() {
        let doc = discord("chat");
        let input = CheckInput {
            document: &doc,
            config_text: "",
            overrides: Overrides::default(),
        };

        let output = run_check(input).expect("run_check");
        assert_eq!(output.report.verdict.status, VerdictStatus::Fail);
        assert_eq!(output.report.findings[0].code, ids::CODE_UNKNOWN_CATEGORY);
        assert_eq!(verdict_exit_code(output.report.verdict.status), 2);
    }

    #[test]
    fn config_cannot_silence_schema_violations() {
        let doc = discord("chat");
        for config_text in [
            "[checks.\"schema.enum\"]\nenabled = false\n",
            "[checks.\"schema.enum\"]\nseverity = \"info\"\n",
            "[checks.\"schema.enum\"]\nallow = [\"*\"]\n",
        ] {
            let input = CheckInput {
                document: &doc,
                config_text,
                overrides: Overrides::default(),
            };
            let err = run_check(input).expect_err("schema override");
            assert!(format!("{err:#}").contains("cannot be configured"));
        }

        let input = CheckInput {
            document: &doc,
            config_text: "profile = \"compat\"\nfail_on = \"error\"\n",
            overrides: Overrides::default(),
        };
        let output = run_check(input).expect("run_check");
        assert_eq!(output.report.verdict.status, VerdictStatus::Fail);
    }

    #[test]
    fn config_can_disable_checks() {
        let doc = discord("messaging");
        let input = CheckInput {
            document: &doc,
            config_text: "[checks.\"userstyles.unmaintained\"]\nenabled = false\n",
            overrides: Overrides::default(),
        };

        let output = run_check(input).expect("run_check");
        assert!(output.report.findings.is_empty());
    }

    #[test]
    fn bad_config_is_an_error() {
        let doc = discord("messaging");
        let input = CheckInput {
            document: &doc,
            config_text: "profile = \"nope\"\n",
            overrides: Overrides::default(),
        };

        let err = run_check(input).expect_err("unknown profile");
        assert!(format!("{err:#}").contains("resolve config"));
    }

    #[test]
    fn verdict_exit_codes() {
        assert_eq!(verdict_exit_code(VerdictStatus::Pass), 0);
        assert_eq!(verdict_exit_code(VerdictStatus::Warn), 0);
        assert_eq!(verdict_exit_code(VerdictStatus::Fail), 2);
    }
}
