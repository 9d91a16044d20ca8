//! Shared test utilities for the userstyles workspace.
//!
//! Reports carry timestamps and the tool version, and fixtures only pin the
//! parts of a report that matter for behaviour. Both helpers live here so the
//! CLI tests and `xtask conform` read fixtures the same way.

use serde_json::{Value, json};

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// Two concerns are handled separately:
///
/// 1. **Root-only**: `tool.version` is replaced with `"__VERSION__"` only
///    when the *root* object looks like a report envelope (has all five keys:
///    `schema`, `tool`, `run`, `verdict`, `findings`). Finding `data` payloads
///    that happen to share the shape are left alone.
///
/// 2. **Recursive**: timestamp keys (`started_at`, `ended_at`) and
///    `duration_ms` are normalized at any depth.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = obj.contains_key("schema")
            && obj.contains_key("tool")
            && obj.contains_key("run")
            && obj.contains_key("verdict")
            && obj.contains_key("findings");
        if is_envelope
            && let Some(tool) = obj.get_mut("tool")
            && let Some(tool_obj) = tool.as_object_mut()
            && tool_obj.contains_key("name")
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String("__VERSION__".to_string()),
            );
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "ended_at"] {
                if map.contains_key(key) {
                    map.insert(key.to_string(), Value::String("__TIMESTAMP__".to_string()));
                }
            }
            if map.contains_key("duration_ms") {
                map.insert("duration_ms".to_string(), Value::Number(0.into()));
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}

/// The behavioural core of a report, as pinned by `expected.json` fixtures:
/// verdict status, reasons, and per finding its severity, check, code and pointer.
pub fn summarize_report(report: &Value) -> Value {
    let findings: Vec<Value> = report["findings"]
        .as_array()
        .map(|list| list.as_slice())
        .unwrap_or_default()
        .iter()
        .map(|f| {
            json!({
                "severity": f["severity"],
                "check_id": f["check_id"],
                "code": f["code"],
                "pointer": f["location"]["pointer"],
            })
        })
        .collect();

    json!({
        "status": report["verdict"]["status"],
        "reasons": report["verdict"]["reasons"],
        "findings": findings,
    })
}
