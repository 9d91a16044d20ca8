use crate::checks;
use crate::fingerprint::fingerprint_for_finding;
use crate::model::CatalogDocument;
use crate::policy::{EffectiveConfig, FailOn};
use crate::report::{DomainReport, SeverityCounts};
use crate::schema::validate_document;
use serde_json::json;
use userstyles_types::{
    CatalogData, DocPointer, Finding, Severity, UserstylesCatalog, Verdict, VerdictCounts,
    VerdictStatus, ids,
};

pub fn evaluate(doc: &CatalogDocument, cfg: &EffectiveConfig) -> DomainReport {
    let mut findings: Vec<Finding> = Vec::new();

    let violations = validate_document(&doc.value);
    checks::run_schema(doc, &violations, &mut findings);

    let mut catalog: Option<UserstylesCatalog> = None;
    if violations.is_empty() {
        match serde_json::from_value::<UserstylesCatalog>(doc.value.clone()) {
            Ok(parsed) => {
                checks::run_lints(doc, &parsed, cfg, &mut findings);
                catalog = Some(parsed);
            }
            Err(err) => findings.push(invalid_document(doc, &err)),
        }
    }
    let lints_ran = catalog.is_some();

    for f in &mut findings {
        if f.fingerprint.is_none() {
            let (file, pointer) = match &f.location {
                Some(l) => (l.file.as_str(), l.pointer.as_str()),
                None => ("", ""),
            };
            f.fingerprint = Some(fingerprint_for_finding(&f.check_id, &f.code, file, pointer));
        }
    }

    // Deterministic ordering before truncation.
    findings.sort_by(compare_findings);

    let total = findings.len() as u32;
    // Status covers every finding so truncation cannot hide an error.
    let status = compute_status(&findings, cfg.fail_on);

    let mut emitted = findings;
    let mut truncated_reason: Option<String> = None;
    if emitted.len() > cfg.max_findings {
        emitted.truncate(cfg.max_findings);
        truncated_reason = Some(format!(
            "findings truncated to max_findings={}",
            cfg.max_findings
        ));
    }

    let counts = SeverityCounts::from_findings(&emitted);

    let mut reasons = Vec::new();
    if !violations.is_empty() {
        reasons.push(ids::REASON_SCHEMA_VIOLATIONS.to_string());
    }
    if !lints_ran {
        reasons.push(ids::REASON_LINTS_SKIPPED.to_string());
    }
    if truncated_reason.is_some() {
        reasons.push(ids::REASON_TRUNCATED.to_string());
    }

    let verdict = Verdict {
        status,
        counts: VerdictCounts::from(&counts),
        reasons,
    };

    let data = CatalogData {
        catalog: doc.file.clone(),
        profile: cfg.profile.clone(),
        userstyles_scanned: doc.userstyle_count(),
        collaborators_scanned: doc.collaborator_count(),
        schema_violations: violations.len() as u32,
        lints_ran,
        findings_total: total,
        findings_emitted: emitted.len() as u32,
        truncated_reason,
    };

    DomainReport {
        verdict,
        findings: emitted,
        data,
        counts,
        catalog,
    }
}

/// A document the walker accepted but serde rejected. Always an error, regardless of policy.
fn invalid_document(doc: &CatalogDocument, err: &serde_json::Error) -> Finding {
    Finding {
        severity: Severity::Error,
        check_id: ids::CHECK_SCHEMA_STRUCTURE.to_string(),
        code: ids::CODE_INVALID_DOCUMENT.to_string(),
        message: format!("catalog does not deserialize: {err}"),
        location: Some(doc.location(DocPointer::root())),
        help: None,
        url: None,
        fingerprint: None,
        data: json!({ "error": err.to_string() }),
    }
}

fn compute_status(findings: &[Finding], fail_on: FailOn) -> VerdictStatus {
    let has_error = findings.iter().any(|f| f.severity == Severity::Error);
    if has_error {
        return VerdictStatus::Fail;
    }

    let has_warn = findings.iter().any(|f| f.severity == Severity::Warning);
    if has_warn {
        return match fail_on {
            FailOn::Warning => VerdictStatus::Fail,
            FailOn::Error => VerdictStatus::Warn,
        };
    }

    VerdictStatus::Pass
}

fn compare_findings(a: &Finding, b: &Finding) -> std::cmp::Ordering {
    // Ordering priority:
    // 1) severity (error -> warning -> info)
    // 2) location.file (missing last)
    // 3) location.pointer
    // 4) check_id
    // 5) code
    // 6) message
    let severity_rank = |sev: Severity| match sev {
        Severity::Error => 0,
        Severity::Warning => 1,
        Severity::Info => 2,
    };
    let (af, ap) = match &a.location {
        Some(l) => (l.file.as_str(), l.pointer.as_str()),
        None => ("~", ""),
    };
    let (bf, bp) = match &b.location {
        Some(l) => (l.file.as_str(), l.pointer.as_str()),
        None => ("~", ""),
    };

    severity_rank(a.severity)
        .cmp(&severity_rank(b.severity))
        .then(af.cmp(bf))
        .then(ap.cmp(bp))
        .then(a.check_id.cmp(&b.check_id))
        .then(a.code.cmp(&b.code))
        .then(a.message.cmp(&b.message))
}
