//! Use case orchestration for userstyles.
//!
//! This crate provides the application layer: use cases that coordinate the domain, settings,
//! and render layers. It is intentionally thin and delegates heavy lifting to those layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod catalog;
mod check;
mod explain;
mod render;
mod report;
mod schema;

pub use catalog::{CatalogFormat, load_catalog, parse_catalog_text};
pub use check::{CheckInput, CheckOutput, run_check, verdict_exit_code};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use render::{render_annotations, render_markdown};
pub use report::{parse_report_json, runtime_error_report, serialize_report, to_renderable};
pub use schema::catalog_schema_json;
