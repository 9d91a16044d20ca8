//! Stable DTOs and IDs used across the userstyles-meta workspace.
//!
//! This crate is intentionally boring:
//! - the userstyle catalog contract (the shape of `userstyles.json`)
//! - stable string IDs and codes for findings
//! - JSON Pointer handling for finding locations
//! - data types for the emitted report
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod catalog;
pub mod explain;
pub mod ident;
pub mod ids;
pub mod list;
pub mod pointer;
pub mod receipt;

pub use catalog::{
    ApplicationLink, Category, Color, FaqEntry, IconSource, Maintainer, Name, ParseEnumError,
    ReadmeOptions, StringOrList, Userstyle, Userstyles, UserstylesCatalog, catalog_schema,
};
pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use ident::{IdentifierError, UserstyleId};
pub use list::{AtLeastTwo, ListLengthError, MinItems, NonEmpty};
pub use pointer::DocPointer;
pub use receipt::{
    CatalogData, Finding, Location, ReportEnvelope, RunMeta, SCHEMA_REPORT_V1, Severity, ToolMeta,
    UserstylesReport, Verdict, VerdictCounts, VerdictStatus,
};
