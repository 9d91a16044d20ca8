//! Fuzz target for userstyle identifier parsing.
//!
//! Goal: parsing never panics, and accepted identifiers only use `[A-Za-z0-9_-]`.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_identifier
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use userstyles_types::UserstyleId;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data)
        && let Ok(id) = UserstyleId::new(text)
    {
        assert!(!id.as_str().is_empty());
        assert!(
            id.as_str()
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        );
    }
});
