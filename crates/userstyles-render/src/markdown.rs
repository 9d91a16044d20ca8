use crate::{RenderableReport, RenderableSeverity, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Userstyles report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Warn => "WARN",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Catalog: `{}` ({} userstyles)\n- Verdict: **{}**\n- Findings: {} (emitted) / {} (total)\n\n",
        report.data.catalog,
        report.data.userstyles_scanned,
        verdict,
        report.data.findings_emitted,
        report.data.findings_total
    ));

    if let Some(r) = &report.data.truncated_reason {
        out.push_str(&format!("> Note: {}\n\n", r));
    }
    if !report.data.lints_ran {
        out.push_str(
            "> Note: hygiene checks were skipped because the catalog does not match the schema\n\n",
        );
    }

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    out.push_str("## Findings\n\n");

    for f in &report.findings {
        let sev = match f.severity {
            RenderableSeverity::Info => "INFO",
            RenderableSeverity::Warning => "WARN",
            RenderableSeverity::Error => "ERROR",
        };

        if let Some(loc) = &f.location {
            out.push_str(&format!(
                "- [{}] `{}` / `{}`: {} (`{}` at `{}`)\n",
                sev,
                f.check_id,
                f.code,
                f.message,
                loc.file,
                loc.display_pointer()
            ));
        } else {
            out.push_str(&format!(
                "- [{}] `{}` / `{}`: {}\n",
                sev, f.check_id, f.code, f.message
            ));
        }

        if let Some(help) = &f.help {
            out.push_str(&format!("  - help: {}\n", help));
        }
        if let Some(url) = &f.url {
            out.push_str(&format!("  - url: {}\n", url));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderableData, RenderableFinding, RenderableLocation};

    fn data(emitted: u32, total: u32) -> RenderableData {
        RenderableData {
            catalog: "userstyles.json".to_string(),
            userstyles_scanned: 2,
            lints_ran: true,
            findings_emitted: emitted,
            findings_total: total,
            truncated_reason: None,
        }
    }

    #[test]
    fn renders_empty_report() {
        let report = RenderableReport {
            verdict: RenderableVerdictStatus::Pass,
            findings: Vec::new(),
            data: data(0, 0),
        };
        let md = render_markdown(&report);
        assert!(md.contains("Verdict: **PASS**"));
        assert!(md.contains("No findings"));
        assert!(!md.contains("skipped"));
    }

    #[test]
    fn renders_findings_with_location_help_url_and_truncation() {
        let mut data = data(1, 2);
        data.truncated_reason = Some("findings truncated to max_findings=1".to_string());
        let report = RenderableReport {
            verdict: RenderableVerdictStatus::Warn,
            findings: vec![RenderableFinding {
                severity: RenderableSeverity::Warning,
                check_id: "userstyles.icon".to_string(),
                code: "invalid_icon".to_string(),
                message: "icon 'Discord' of 'discord' is not a Simple Icons slug".to_string(),
                location: Some(RenderableLocation {
                    file: "userstyles.json".to_string(),
                    pointer: "/userstyles/discord/icon".to_string(),
                }),
                help: Some("Use a Simple Icons slug.".to_string()),
                url: Some("https://simpleicons.org".to_string()),
            }],
            data,
        };

        insta::assert_snapshot!(render_markdown(&report), @r"
        # Userstyles report

        - Catalog: `userstyles.json` (2 userstyles)
        - Verdict: **WARN**
        - Findings: 1 (emitted) / 2 (total)

        > Note: findings truncated to max_findings=1

        ## Findings

        - [WARN] `userstyles.icon` / `invalid_icon`: icon 'Discord' of 'discord' is not a Simple Icons slug (`userstyles.json` at `/userstyles/discord/icon`)
          - help: Use a Simple Icons slug.
          - url: https://simpleicons.org
        ");
    }

    #[test]
    fn notes_skipped_lints_and_missing_location() {
        let mut data = data(1, 1);
        data.lints_ran = false;
        let report = RenderableReport {
            verdict: RenderableVerdictStatus::Fail,
            findings: vec![RenderableFinding {
                severity: RenderableSeverity::Error,
                check_id: "tool.runtime".to_string(),
                code: "runtime_error".to_string(),
                message: "read catalog".to_string(),
                location: None,
                help: None,
                url: None,
            }],
            data,
        };

        let md = render_markdown(&report);
        assert!(md.contains("Verdict: **FAIL**"));
        assert!(md.contains("hygiene checks were skipped"));
        assert!(md.contains("- [ERROR] `tool.runtime` / `runtime_error`: read catalog\n"));
    }
}
