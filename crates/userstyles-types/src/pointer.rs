use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// RFC 6901 JSON Pointer into the catalog document, used in findings.
///
/// Rules are simple and deterministic:
/// - the document root is the empty pointer `""`
/// - each segment is prefixed with `/`
/// - `~` is escaped as `~0` and `/` as `~1`
#[derive(
    Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct DocPointer(String);

impl DocPointer {
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Wrap an already-escaped pointer string.
    pub fn from_raw<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Append an object key.
    pub fn key(&self, segment: &str) -> DocPointer {
        let escaped = segment.replace('~', "~0").replace('/', "~1");
        DocPointer(format!("{}/{}", self.0, escaped))
    }

    /// Append an array index.
    pub fn index(&self, i: usize) -> DocPointer {
        DocPointer(format!("{}/{}", self.0, i))
    }

    /// Unescaped segments, root first.
    pub fn segments(&self) -> Vec<String> {
        if self.0.is_empty() {
            return Vec::new();
        }
        self.0
            .split('/')
            .skip(1)
            .map(|s| s.replace("~1", "/").replace("~0", "~"))
            .collect()
    }

    /// The userstyle identifier when the pointer is inside `/userstyles/<id>`.
    pub fn userstyle_id(&self) -> Option<String> {
        let segments = self.segments();
        match segments.as_slice() {
            [first, id, ..] if first == "userstyles" => Some(id.clone()),
            _ => None,
        }
    }
}

impl fmt::Display for DocPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("/")
        } else {
            f.write_str(&self.0)
        }
    }
}
