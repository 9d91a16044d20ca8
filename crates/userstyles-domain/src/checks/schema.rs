use crate::model::CatalogDocument;
use crate::schema::SchemaViolation;
use serde_json::{Value, json};
use userstyles_types::{Finding, Severity};

/// Every violation becomes an error finding. A document that breaks the contract is
/// rejected whatever the profile says.
pub fn run(doc: &CatalogDocument, violations: &[SchemaViolation], out: &mut Vec<Finding>) {
    for violation in violations {
        out.push(Finding {
            severity: Severity::Error,
            check_id: violation.check_id().to_string(),
            code: violation.code().to_string(),
            message: message(violation),
            location: Some(doc.location(violation.pointer().clone())),
            help: Some(help(violation)),
            url: None,
            fingerprint: None,
            data: data(violation),
        });
    }
}

fn message(violation: &SchemaViolation) -> String {
    match violation {
        SchemaViolation::TypeMismatch {
            expected, found, ..
        } => format!("expected {expected}, found {found}"),
        SchemaViolation::MissingField { field, .. } => {
            format!("missing required field '{field}'")
        }
        SchemaViolation::UnknownField { field, .. } => format!("unknown field '{field}'"),
        SchemaViolation::InvalidIdentifier { reason, .. } => reason.clone(),
        SchemaViolation::UnknownCategory { value, .. } => {
            format!("'{value}' is not a known category")
        }
        SchemaViolation::UnknownColor { value, .. } => format!("'{value}' is not a known color"),
        SchemaViolation::TooFewItems { min, actual, .. } => {
            format!("list needs at least {min} item(s), found {actual}")
        }
    }
}

fn help(violation: &SchemaViolation) -> String {
    let text = match violation {
        SchemaViolation::TypeMismatch { .. } => "Change the value to the expected JSON type.",
        SchemaViolation::MissingField { .. } => "Add the required field.",
        SchemaViolation::UnknownField { .. } => {
            "Remove the key or fix its spelling; only `readme`, FAQ and maintainer entries accept extra keys."
        }
        SchemaViolation::InvalidIdentifier { .. } => {
            "Use only ASCII letters, digits, '-' and '_' in userstyle identifiers."
        }
        SchemaViolation::UnknownCategory { .. } => {
            "Use one of the categories listed by `userstyles explain unknown_category`."
        }
        SchemaViolation::UnknownColor { .. } => {
            "Use one of the colors listed by `userstyles explain unknown_color`."
        }
        SchemaViolation::TooFewItems { pointer, .. } => {
            return too_few_items_help(pointer.segments().last().map(String::as_str));
        }
    };
    text.to_string()
}

/// Help for a list below its minimum, worded for the list's key.
fn too_few_items_help(field: Option<&str>) -> String {
    match field {
        Some("name") => {
            "Give the primary name plus at least one alias, or use a plain string.".to_string()
        }
        Some("app-link") => {
            "List at least two links, or use a plain string for a single link.".to_string()
        }
        Some(field @ ("faq" | "past-maintainers" | "collaborators")) => {
            format!("Add at least one entry to `{field}` or remove the key.")
        }
        _ => "Add entries to the list or remove the key.".to_string(),
    }
}

fn data(violation: &SchemaViolation) -> Value {
    match violation {
        SchemaViolation::TypeMismatch {
            expected, found, ..
        } => json!({ "expected": expected, "found": found }),
        SchemaViolation::MissingField { field, .. } => json!({ "field": field }),
        SchemaViolation::UnknownField { field, .. } => json!({ "field": field }),
        SchemaViolation::InvalidIdentifier { id, .. } => json!({ "identifier": id }),
        SchemaViolation::UnknownCategory { value, .. }
        | SchemaViolation::UnknownColor { value, .. } => json!({ "value": value }),
        SchemaViolation::TooFewItems { min, actual, .. } => {
            json!({ "min_items": min, "actual": actual })
        }
    }
}
