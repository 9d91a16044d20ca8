use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a catalog finding.
///
/// Identity fields:
/// - check_id
/// - code
/// - catalog file
/// - JSON pointer of the offending value
pub fn fingerprint_for_finding(check_id: &str, code: &str, file: &str, pointer: &str) -> String {
    let canonical = [check_id, code, file, pointer].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
