//! Pure catalog evaluation (no IO).
//!
//! Input: a catalog document parsed elsewhere.
//! Output: schema violations, hygiene findings, verdict and summary data.

#![forbid(unsafe_code)]

pub mod model;
pub mod policy;
pub mod report;
pub mod schema;

mod engine;
mod fingerprint;
pub mod checks;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::evaluate;
pub use schema::{SchemaViolation, ValidationErrors, parse_catalog, validate_document};
