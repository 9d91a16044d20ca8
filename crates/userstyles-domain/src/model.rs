use serde_json::Value;
use userstyles_types::{DocPointer, Location};

/// A catalog document as loaded from disk, before any validation.
#[derive(Clone, Debug)]
pub struct CatalogDocument {
    /// File name used in finding locations.
    pub file: String,
    pub value: Value,
}

impl CatalogDocument {
    pub fn new<S: Into<String>>(file: S, value: Value) -> Self {
        Self {
            file: file.into(),
            value,
        }
    }

    pub fn location(&self, pointer: DocPointer) -> Location {
        Location {
            file: self.file.clone(),
            pointer,
        }
    }

    /// Entries under `userstyles`, counted even when the entries themselves are malformed.
    pub fn userstyle_count(&self) -> u32 {
        self.value
            .get("userstyles")
            .and_then(Value::as_object)
            .map(|m| m.len() as u32)
            .unwrap_or(0)
    }

    pub fn collaborator_count(&self) -> u32 {
        self.value
            .get("collaborators")
            .and_then(Value::as_array)
            .map(|a| a.len() as u32)
            .unwrap_or(0)
    }
}
