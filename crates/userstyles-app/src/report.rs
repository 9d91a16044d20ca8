use anyhow::Context;
use time::OffsetDateTime;
use userstyles_render::{
    RenderableData, RenderableFinding, RenderableLocation, RenderableReport, RenderableSeverity,
    RenderableVerdictStatus,
};
use userstyles_types::{
    CatalogData, Finding, ReportEnvelope, RunMeta, SCHEMA_REPORT_V1, Severity, ToolMeta,
    UserstylesReport, Verdict, VerdictCounts, VerdictStatus, ids,
};

pub fn parse_report_json(text: &str) -> anyhow::Result<UserstylesReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse userstyles report")
}

pub fn serialize_report(report: &UserstylesReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &UserstylesReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict.status {
            VerdictStatus::Pass => RenderableVerdictStatus::Pass,
            VerdictStatus::Warn => RenderableVerdictStatus::Warn,
            VerdictStatus::Fail => RenderableVerdictStatus::Fail,
        },
        findings: report.findings.iter().map(renderable_finding).collect(),
        data: RenderableData {
            catalog: report.data.catalog.clone(),
            userstyles_scanned: report.data.userstyles_scanned,
            lints_ran: report.data.lints_ran,
            findings_emitted: report.data.findings_emitted,
            findings_total: report.data.findings_total,
            truncated_reason: report.data.truncated_reason.clone(),
        },
    }
}

fn renderable_finding(f: &Finding) -> RenderableFinding {
    RenderableFinding {
        severity: match f.severity {
            Severity::Info => RenderableSeverity::Info,
            Severity::Warning => RenderableSeverity::Warning,
            Severity::Error => RenderableSeverity::Error,
        },
        check_id: f.check_id.clone(),
        code: f.code.clone(),
        message: f.message.clone(),
        location: f.location.as_ref().map(|loc| RenderableLocation {
            file: loc.file.clone(),
            pointer: loc.pointer.as_str().to_string(),
        }),
        help: f.help.clone(),
        url: f.url.clone(),
    }
}

/// A failing report for errors that stopped the check before evaluation finished.
pub fn runtime_error_report(catalog: &str, profile: &str, message: &str) -> UserstylesReport {
    let now = OffsetDateTime::now_utc();
    ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta::current(),
        run: RunMeta {
            started_at: now,
            ended_at: Some(now),
            duration_ms: Some(0),
        },
        verdict: Verdict {
            status: VerdictStatus::Fail,
            counts: VerdictCounts {
                info: 0,
                warn: 0,
                error: 1,
            },
            reasons: vec![ids::REASON_TOOL_ERROR.to_string()],
        },
        findings: vec![Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_TOOL_RUNTIME.to_string(),
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            message: message.to_string(),
            location: None,
            help: Some("Fix the tool error and re-run userstyles check.".to_string()),
            url: None,
            fingerprint: None,
            data: serde_json::Value::Null,
        }],
        data: CatalogData {
            catalog: catalog.to_string(),
            profile: profile.to_string(),
            findings_total: 1,
            findings_emitted: 1,
            ..CatalogData::default()
        },
    }
}
