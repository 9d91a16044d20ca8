//! The `schema` use case: the catalog contract as JSON Schema.

use anyhow::Context;
use userstyles_types::catalog_schema;

/// Pretty-printed JSON Schema for `userstyles.json`.
pub fn catalog_schema_json() -> anyhow::Result<String> {
    let schema = catalog_schema();
    serde_json::to_string_pretty(&schema).context("serialize catalog schema")
}
