//! Document validation against the catalog contract.
//!
//! The walker visits the raw JSON value instead of deserializing it, so one pass
//! reports every violation together with the pointer of the offending value.
//! A document without violations always deserializes into [`UserstylesCatalog`].

use serde_json::{Map, Value};
use std::str::FromStr;
use userstyles_types::ident::check_identifier;
use userstyles_types::{Category, Color, DocPointer, UserstylesCatalog, ids};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SchemaViolation {
    #[error("{pointer}: expected {expected}, found {found}")]
    TypeMismatch {
        pointer: DocPointer,
        expected: &'static str,
        found: &'static str,
    },
    #[error("{pointer}: missing required field '{field}'")]
    MissingField {
        pointer: DocPointer,
        field: &'static str,
    },
    #[error("{pointer}: unknown field '{field}'")]
    UnknownField { pointer: DocPointer, field: String },
    #[error("{pointer}: {reason}")]
    InvalidIdentifier {
        pointer: DocPointer,
        id: String,
        reason: String,
    },
    #[error("{pointer}: unknown category '{value}'")]
    UnknownCategory { pointer: DocPointer, value: String },
    #[error("{pointer}: unknown color '{value}'")]
    UnknownColor { pointer: DocPointer, value: String },
    #[error("{pointer}: expected at least {min} item(s), found {actual}")]
    TooFewItems {
        pointer: DocPointer,
        min: usize,
        actual: usize,
    },
}

impl SchemaViolation {
    pub fn pointer(&self) -> &DocPointer {
        match self {
            SchemaViolation::TypeMismatch { pointer, .. }
            | SchemaViolation::MissingField { pointer, .. }
            | SchemaViolation::UnknownField { pointer, .. }
            | SchemaViolation::InvalidIdentifier { pointer, .. }
            | SchemaViolation::UnknownCategory { pointer, .. }
            | SchemaViolation::UnknownColor { pointer, .. }
            | SchemaViolation::TooFewItems { pointer, .. } => pointer,
        }
    }

    pub fn check_id(&self) -> &'static str {
        match self {
            SchemaViolation::TypeMismatch { .. }
            | SchemaViolation::MissingField { .. }
            | SchemaViolation::UnknownField { .. } => ids::CHECK_SCHEMA_STRUCTURE,
            SchemaViolation::InvalidIdentifier { .. } => ids::CHECK_SCHEMA_IDENTIFIER,
            SchemaViolation::UnknownCategory { .. } | SchemaViolation::UnknownColor { .. } => {
                ids::CHECK_SCHEMA_ENUM
            }
            SchemaViolation::TooFewItems { .. } => ids::CHECK_SCHEMA_MIN_ITEMS,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            SchemaViolation::TypeMismatch { .. } => ids::CODE_TYPE_MISMATCH,
            SchemaViolation::MissingField { .. } => ids::CODE_MISSING_FIELD,
            SchemaViolation::UnknownField { .. } => ids::CODE_UNKNOWN_FIELD,
            SchemaViolation::InvalidIdentifier { .. } => ids::CODE_INVALID_IDENTIFIER,
            SchemaViolation::UnknownCategory { .. } => ids::CODE_UNKNOWN_CATEGORY,
            SchemaViolation::UnknownColor { .. } => ids::CODE_UNKNOWN_COLOR,
            SchemaViolation::TooFewItems { .. } => ids::CODE_TOO_FEW_ITEMS,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationErrors {
    #[error("catalog has {} schema violation(s)", .0.len())]
    Schema(Vec<SchemaViolation>),
    #[error("catalog does not deserialize: {0}")]
    Deserialize(#[from] serde_json::Error),
}

/// Report every contract violation in `value`, in document order.
pub fn validate_document(value: &Value) -> Vec<SchemaViolation> {
    let mut walker = Walker::default();
    walker.root(value);
    walker.out
}

/// Validate and, if the document conforms, return the typed catalog.
pub fn parse_catalog(value: &Value) -> Result<UserstylesCatalog, ValidationErrors> {
    let violations = validate_document(value);
    if !violations.is_empty() {
        return Err(ValidationErrors::Schema(violations));
    }
    Ok(serde_json::from_value(value.clone())?)
}

pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

const ROOT_FIELDS: &[&str] = &["$schema", "userstyles", "collaborators"];
const USERSTYLE_FIELDS: &[&str] = &["name", "category", "color", "icon", "readme"];

#[derive(Default)]
struct Walker {
    out: Vec<SchemaViolation>,
}

impl Walker {
    fn root(&mut self, value: &Value) {
        let ptr = DocPointer::root();
        let Some(map) = self.object(value, &ptr) else {
            return;
        };
        self.closed(map, &ptr, ROOT_FIELDS);

        if let Some(v) = map.get("$schema") {
            self.string(v, &ptr.key("$schema"));
        }
        if let Some(v) = map.get("userstyles") {
            self.userstyles(v, &ptr.key("userstyles"));
        }
        if let Some(v) = map.get("collaborators") {
            self.maintainer_list(v, &ptr.key("collaborators"), 1);
        }
    }

    fn userstyles(&mut self, value: &Value, ptr: &DocPointer) {
        let Some(map) = self.object(value, ptr) else {
            return;
        };
        for (id, entry) in map {
            let entry_ptr = ptr.key(id);
            if let Err(err) = check_identifier(id) {
                self.out.push(SchemaViolation::InvalidIdentifier {
                    pointer: entry_ptr.clone(),
                    id: id.clone(),
                    reason: err.to_string(),
                });
            }
            self.userstyle(entry, &entry_ptr);
        }
    }

    fn userstyle(&mut self, value: &Value, ptr: &DocPointer) {
        let Some(map) = self.object(value, ptr) else {
            return;
        };
        self.closed(map, ptr, USERSTYLE_FIELDS);

        if let Some(v) = self.required(map, ptr, "name") {
            self.string_or_list(v, &ptr.key("name"));
        }
        if let Some(v) = self.required(map, ptr, "category") {
            self.enumerated::<Category>(v, &ptr.key("category"), |pointer, value| {
                SchemaViolation::UnknownCategory { pointer, value }
            });
        }
        if let Some(v) = map.get("color") {
            self.enumerated::<Color>(v, &ptr.key("color"), |pointer, value| {
                SchemaViolation::UnknownColor { pointer, value }
            });
        }
        if let Some(v) = map.get("icon") {
            self.string(v, &ptr.key("icon"));
        }
        if let Some(v) = self.required(map, ptr, "readme") {
            self.readme(v, &ptr.key("readme"));
        }
    }

    fn readme(&mut self, value: &Value, ptr: &DocPointer) {
        let Some(map) = self.object(value, ptr) else {
            return;
        };
        // Open record: unknown keys are passthrough data.
        if let Some(v) = self.required(map, ptr, "app-link") {
            self.string_or_list(v, &ptr.key("app-link"));
        }
        if let Some(v) = map.get("usage") {
            self.string(v, &ptr.key("usage"));
        }
        if let Some(v) = map.get("faq") {
            self.faq(v, &ptr.key("faq"));
        }
        if let Some(v) = self.required(map, ptr, "current-maintainers") {
            self.maintainer_list(v, &ptr.key("current-maintainers"), 0);
        }
        if let Some(v) = map.get("past-maintainers") {
            self.maintainer_list(v, &ptr.key("past-maintainers"), 1);
        }
    }

    fn faq(&mut self, value: &Value, ptr: &DocPointer) {
        let Some(items) = self.array(value, ptr, 1) else {
            return;
        };
        for (i, item) in items.iter().enumerate() {
            let item_ptr = ptr.index(i);
            let Some(entry) = self.object(item, &item_ptr) else {
                continue;
            };
            if let Some(v) = self.required(entry, &item_ptr, "question") {
                self.string(v, &item_ptr.key("question"));
            }
            if let Some(v) = self.required(entry, &item_ptr, "answer") {
                self.string(v, &item_ptr.key("answer"));
            }
        }
    }

    fn maintainer_list(&mut self, value: &Value, ptr: &DocPointer, min: usize) {
        let Some(items) = self.array(value, ptr, min) else {
            return;
        };
        for (i, item) in items.iter().enumerate() {
            self.maintainer(item, &ptr.index(i));
        }
    }

    fn maintainer(&mut self, value: &Value, ptr: &DocPointer) {
        let Some(map) = self.object(value, ptr) else {
            return;
        };
        if let Some(v) = map.get("name") {
            self.string(v, &ptr.key("name"));
        }
        if let Some(v) = self.required(map, ptr, "url") {
            self.string(v, &ptr.key("url"));
        }
    }

    /// `[string, string, ...string[]] | string`
    fn string_or_list(&mut self, value: &Value, ptr: &DocPointer) {
        match value {
            Value::String(_) => {}
            Value::Array(items) => {
                if items.len() < 2 {
                    self.out.push(SchemaViolation::TooFewItems {
                        pointer: ptr.clone(),
                        min: 2,
                        actual: items.len(),
                    });
                }
                for (i, item) in items.iter().enumerate() {
                    self.string(item, &ptr.index(i));
                }
            }
            other => self.out.push(SchemaViolation::TypeMismatch {
                pointer: ptr.clone(),
                expected: "string or array of strings",
                found: json_type(other),
            }),
        }
    }

    fn enumerated<T: FromStr>(
        &mut self,
        value: &Value,
        ptr: &DocPointer,
        violation: impl FnOnce(DocPointer, String) -> SchemaViolation,
    ) {
        let Some(s) = self.string(value, ptr) else {
            return;
        };
        if s.parse::<T>().is_err() {
            self.out.push(violation(ptr.clone(), s.to_string()));
        }
    }

    fn closed(&mut self, map: &Map<String, Value>, ptr: &DocPointer, known: &[&str]) {
        for key in map.keys() {
            if !known.contains(&key.as_str()) {
                self.out.push(SchemaViolation::UnknownField {
                    pointer: ptr.key(key),
                    field: key.clone(),
                });
            }
        }
    }

    fn required<'a>(
        &mut self,
        map: &'a Map<String, Value>,
        ptr: &DocPointer,
        field: &'static str,
    ) -> Option<&'a Value> {
        let value = map.get(field);
        if value.is_none() {
            self.out.push(SchemaViolation::MissingField {
                pointer: ptr.clone(),
                field,
            });
        }
        value
    }

    fn object<'a>(&mut self, value: &'a Value, ptr: &DocPointer) -> Option<&'a Map<String, Value>> {
        let map = value.as_object();
        if map.is_none() {
            self.mismatch(value, ptr, "object");
        }
        map
    }

    fn array<'a>(&mut self, value: &'a Value, ptr: &DocPointer, min: usize) -> Option<&'a [Value]> {
        let Some(items) = value.as_array() else {
            self.mismatch(value, ptr, "array");
            return None;
        };
        if items.len() < min {
            self.out.push(SchemaViolation::TooFewItems {
                pointer: ptr.clone(),
                min,
                actual: items.len(),
            });
        }
        Some(items)
    }

    fn string<'a>(&mut self, value: &'a Value, ptr: &DocPointer) -> Option<&'a str> {
        let s = value.as_str();
        if s.is_none() {
            self.mismatch(value, ptr, "string");
        }
        s
    }

    fn mismatch(&mut self, value: &Value, ptr: &DocPointer, expected: &'static str) {
        self.out.push(SchemaViolation::TypeMismatch {
            pointer: ptr.clone(),
            expected,
            found: json_type(value),
        });
    }
}
