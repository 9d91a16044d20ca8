use crate::DocPointer;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use time::OffsetDateTime;

/// Stable schema identifier for userstyles reports.
pub const SCHEMA_REPORT_V1: &str = "userstyles.report.v1";

/// Severity is intentionally small: it maps cleanly to CI signals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Location {
    /// Catalog file as given on the command line.
    pub file: String,
    /// JSON Pointer of the offending value inside the catalog.
    pub pointer: DocPointer,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub severity: Severity,
    pub check_id: String,
    pub code: String,
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Stable identifier intended for dedup and trending: a hash of
    /// `check_id + code + file + pointer`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,

    /// Check-specific structured payload (kept open-ended for forward compatibility).
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: JsonValue,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum VerdictStatus {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VerdictCounts {
    pub info: u32,
    pub warn: u32,
    pub error: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Verdict {
    pub status: VerdictStatus,
    pub counts: VerdictCounts,
    #[serde(default)]
    pub reasons: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

impl ToolMeta {
    pub fn current() -> Self {
        Self {
            name: "userstyles".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RunMeta {
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "Option<String>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(with = "time::serde::rfc3339::option")]
    pub ended_at: Option<OffsetDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

/// Catalog-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct CatalogData {
    /// Catalog file the report is about.
    pub catalog: String,
    pub profile: String,

    pub userstyles_scanned: u32,
    pub collaborators_scanned: u32,
    pub schema_violations: u32,

    /// `false` when schema violations prevented the hygiene checks from running.
    pub lints_ran: bool,

    pub findings_total: u32,
    pub findings_emitted: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truncated_reason: Option<String>,
}

/// A generic receipt/envelope.
///
/// Keeping this generic allows embedding tool-specific data while still enforcing a stable outer shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope<TData = CatalogData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    pub run: RunMeta,
    pub verdict: Verdict,
    pub findings: Vec<Finding>,
    pub data: TData,
}

pub type UserstylesReport = ReportEnvelope<CatalogData>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn finding_omits_empty_optionals() {
        let finding = Finding {
            severity: Severity::Warning,
            check_id: "userstyles.icon".to_string(),
            code: "invalid_icon".to_string(),
            message: "bad icon".to_string(),
            location: Some(Location {
                file: "userstyles.json".to_string(),
                pointer: DocPointer::root().key("userstyles").key("x").key("icon"),
            }),
            help: None,
            url: None,
            fingerprint: None,
            data: JsonValue::Null,
        };
        let value = serde_json::to_value(&finding).expect("serialize");
        assert_eq!(
            value,
            json!({
                "severity": "warning",
                "check_id": "userstyles.icon",
                "code": "invalid_icon",
                "message": "bad icon",
                "location": { "file": "userstyles.json", "pointer": "/userstyles/x/icon" }
            })
        );
    }

    #[test]
    fn run_meta_uses_rfc3339() {
        let run = RunMeta {
            started_at: time::macros::datetime!(2025-01-02 03:04:05 UTC),
            ended_at: None,
            duration_ms: Some(7),
        };
        let value = serde_json::to_value(&run).expect("serialize");
        assert_eq!(value["started_at"], "2025-01-02T03:04:05Z");
        assert!(value.get("ended_at").is_none());

        let back: RunMeta = serde_json::from_value(value).expect("deserialize");
        assert_eq!(back, run);
    }
}
