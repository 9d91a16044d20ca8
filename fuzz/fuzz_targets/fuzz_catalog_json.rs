//! Fuzz target for catalog validation.
//!
//! Goal: validating any JSON document should **never panic**.
//! It may report violations, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_catalog_json
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };

    let _ = userstyles_domain::validate_document(&value);
    let _ = userstyles_domain::parse_catalog(&value);
});
