use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::{Borrow, Cow};
use std::fmt;
use std::str::FromStr;

/// Regex (JSON Schema dialect) that every userstyle identifier must match.
pub const USERSTYLE_ID_PATTERN: &str = "^[A-Za-z0-9_-]+$";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    #[error("userstyle identifier must not be empty")]
    Empty,
    #[error("userstyle identifier '{id}' contains '{ch}' (allowed: letters, digits, '-', '_')")]
    InvalidChar { id: String, ch: char },
}

/// Key of an entry in the top-level `userstyles` mapping.
///
/// Doubles as the directory name of the userstyle, hence the restricted charset.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserstyleId(String);

impl UserstyleId {
    pub fn new<S: Into<String>>(s: S) -> Result<Self, IdentifierError> {
        let s = s.into();
        check_identifier(&s)?;
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Charset check shared with the document validator.
pub fn check_identifier(s: &str) -> Result<(), IdentifierError> {
    if s.is_empty() {
        return Err(IdentifierError::Empty);
    }
    match s.chars().find(|c| !is_identifier_char(*c)) {
        Some(ch) => Err(IdentifierError::InvalidChar {
            id: s.to_string(),
            ch,
        }),
        None => Ok(()),
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

impl FromStr for UserstyleId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for UserstyleId {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for UserstyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserstyleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for UserstyleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Serialize for UserstyleId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for UserstyleId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}

impl JsonSchema for UserstyleId {
    fn schema_name() -> Cow<'static, str> {
        "UserstyleId".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "pattern": USERSTYLE_ID_PATTERN,
        })
    }
}
