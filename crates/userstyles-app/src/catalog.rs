//! Loading catalog documents from disk.

use anyhow::Context;
use camino::Utf8Path;
use serde_json::Value;
use userstyles_domain::model::CatalogDocument;

/// Source syntax of a catalog file. Both parse into the same JSON value model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    /// `.yml` and `.yaml` are YAML; everything else is JSON.
    pub fn from_path(path: &Utf8Path) -> Self {
        match path.extension().map(str::to_ascii_lowercase).as_deref() {
            Some("yml") | Some("yaml") => CatalogFormat::Yaml,
            _ => CatalogFormat::Json,
        }
    }
}

pub fn parse_catalog_text(text: &str, format: CatalogFormat) -> anyhow::Result<Value> {
    match format {
        CatalogFormat::Json => serde_json::from_str(text).context("parse catalog json"),
        CatalogFormat::Yaml => serde_yaml::from_str(text).context("parse catalog yaml"),
    }
}

/// Read and parse a catalog file. The path as given becomes the finding file name.
pub fn load_catalog(path: &Utf8Path) -> anyhow::Result<CatalogDocument> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read catalog: {}", path))?;
    let format = CatalogFormat::from_path(path);
    tracing::debug!(catalog = %path, ?format, bytes = text.len(), "loaded catalog");
    let value = parse_catalog_text(&text, format)?;
    Ok(CatalogDocument::new(path.as_str(), value))
}
