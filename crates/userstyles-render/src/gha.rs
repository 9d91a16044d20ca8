use crate::{RenderableReport, RenderableSeverity};

/// Render findings as GitHub Actions workflow command annotations.
///
/// Format:
/// `::{level} file={file},title={check_id}::{pointer}: {message}`
///
/// Catalog findings carry a JSON Pointer rather than a line, so the pointer
/// leads the message.
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    let mut out = Vec::new();

    for f in &report.findings {
        let level = match f.severity {
            RenderableSeverity::Error => "error",
            RenderableSeverity::Warning => "warning",
            RenderableSeverity::Info => "notice",
        };

        let mut meta = String::new();
        let mut text = format!("[{}] {}", f.code, f.message);
        if let Some(loc) = &f.location {
            meta.push_str(&format!("file={}", escape_property(&loc.file)));
            text = format!("{}: {}", loc.display_pointer(), text);
        }
        if !meta.is_empty() {
            meta.push(',');
        }
        meta.push_str(&format!("title={}", escape_property(&f.check_id)));

        out.push(format!("::{} {}::{}", level, meta, escape_data(&text)));
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
    use crate::{
        RenderableData, RenderableFinding, RenderableLocation, RenderableVerdictStatus,
    };

    fn report(findings: Vec<RenderableFinding>) -> RenderableReport {
        RenderableReport {
            verdict: RenderableVerdictStatus::Fail,
            data: RenderableData {
                catalog: "userstyles.json".to_string(),
                userstyles_scanned: 1,
                lints_ran: true,
                findings_emitted: findings.len() as u32,
                findings_total: findings.len() as u32,
                truncated_reason: None,
            },
            findings,
        }
    }

    #[test]
    fn annotation_includes_file_pointer_and_title() {
        let lines = render_github_annotations(&report(vec![RenderableFinding {
            severity: RenderableSeverity::Error,
            check_id: "schema.enum".to_string(),
            code: "unknown_category".to_string(),
            message: "'chat' is not a known category".to_string(),
            location: Some(RenderableLocation {
                file: "userstyles.json".to_string(),
                pointer: "/userstyles/discord/category".to_string(),
            }),
            help: None,
            url: None,
        }]));
        assert_eq!(
            lines,
            vec![
                "::error file=userstyles.json,title=schema.enum::/userstyles/discord/category: [unknown_category] 'chat' is not a known category"
            ]
        );
    }

    #[test]
    fn info_becomes_notice_and_newlines_are_escaped() {
        let lines = render_github_annotations(&report(vec![RenderableFinding {
            severity: RenderableSeverity::Info,
            check_id: "tool.runtime".to_string(),
            code: "runtime_error".to_string(),
            message: "line one\nline two 100%".to_string(),
            location: None,
            help: None,
            url: None,
        }]));
        assert_eq!(
            lines,
            vec!["::notice title=tool.runtime::[runtime_error] line one%0Aline two 100%25"]
        );
    }

    #[test]
    fn root_pointer_renders_as_slash() {
        let lines = render_github_annotations(&report(vec![RenderableFinding {
            severity: RenderableSeverity::Warning,
            check_id: "schema.structure".to_string(),
            code: "type_mismatch".to_string(),
            message: "expected object, found array".to_string(),
            location: Some(RenderableLocation {
                file: "C:,odd.json".to_string(),
                pointer: String::new(),
            }),
            help: None,
            url: None,
        }]));
        assert_eq!(
            lines,
            vec![
                "::warning file=C%3A%2Codd.json,title=schema.structure::/: [type_mismatch] expected object, found array"
            ]
        );
    }
}
