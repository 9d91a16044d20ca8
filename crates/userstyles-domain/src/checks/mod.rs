use crate::model::CatalogDocument;
use crate::policy::EffectiveConfig;
use crate::schema::SchemaViolation;
use userstyles_types::{Finding, UserstylesCatalog};

mod app_link;
mod collaborator_listed;
mod duplicates;
mod icon;
mod profile_url;
mod schema;
mod unmaintained;
mod utils;


/// Turn document violations into `schema.*` findings. They are never configurable.
pub fn run_schema(doc: &CatalogDocument, violations: &[SchemaViolation], out: &mut Vec<Finding>) {
    schema::run(doc, violations, out);
}

/// Hygiene checks. They need the typed catalog, so they only run on conforming documents.
pub fn run_lints(
    doc: &CatalogDocument,
    catalog: &UserstylesCatalog,
    cfg: &EffectiveConfig,
    out: &mut Vec<Finding>,
) {
    collaborator_listed::run(doc, catalog, cfg, out);
    duplicates::run(doc, catalog, cfg, out);
    profile_url::run(doc, catalog, cfg, out);
    app_link::run(doc, catalog, cfg, out);
    icon::run(doc, catalog, cfg, out);
    unmaintained::run(doc, catalog, cfg, out);
}
