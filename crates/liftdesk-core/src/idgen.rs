//! SHA256-derived identifiers: short base36 record ids and project codes.

use chrono::{DateTime, Datelike, Utc};
use sha2::{Digest, Sha256};

/// Base36 alphabet (0-9, a-z).
const BASE36_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Fixed length of generated record-id hash suffixes. Sales pipelines are
/// small collections; four base36 chars (~1.7M values) leave collisions to
/// the caller's nonce retry loop.
pub const ID_LENGTH: usize = 4;

/// Encodes a value as fixed-width base36, most significant digit first.
pub fn encode_base36(mut value: u64, length: usize) -> String {
    let mut chars = vec![b'0'; length];
    let mut i = length;
    while value > 0 && i > 0 {
        i -= 1;
        chars[i] = BASE36_ALPHABET[(value % 36) as usize];
        value /= 36;
    }
    String::from_utf8(chars).expect("base36 chars are valid UTF-8")
}

/// Creates a hash-based record id, e.g. `op-7k2f`.
///
/// Deterministic for identical inputs; the nonce lets callers retry on the
/// rare collision against existing records.
pub fn generate_record_id(
    prefix: &str,
    title: &str,
    contact: &str,
    creator: &str,
    timestamp: DateTime<Utc>,
    nonce: i32,
) -> String {
    let content = format!(
        "{}|{}|{}|{}|{}",
        title,
        contact,
        creator,
        timestamp.timestamp_nanos_opt().unwrap_or(0),
        nonce
    );
    let hash = Sha256::digest(content.as_bytes());

    // 40 bits of hash comfortably cover 4 base36 chars.
    let mut value: u64 = 0;
    for byte in &hash[..5] {
        value = (value << 8) | u64::from(*byte);
    }

    format!("{}-{}", prefix, encode_base36(value, ID_LENGTH))
}

/// Creates a project code in the form `PRJ-<year>-<3 digits>`.
///
/// The digits come from the same hash construction as record ids, so codes
/// are best-effort unique only -- there is deliberately no collision check
/// here; the sales volume this serves makes clashes an accepted risk.
pub fn generate_project_code(
    company: &str,
    timestamp: DateTime<Utc>,
    nonce: i32,
) -> String {
    let content = format!(
        "{}|{}|{}",
        company,
        timestamp.timestamp_nanos_opt().unwrap_or(0),
        nonce
    );
    let hash = Sha256::digest(content.as_bytes());
    let value = u32::from_be_bytes([hash[0], hash[1], hash[2], hash[3]]);

    format!("PRJ-{}-{:03}", timestamp.year(), value % 1000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 10, 18, 9, 30, 0).unwrap()
    }

    #[test]
    fn encode_base36_zero_pads() {
        assert_eq!(encode_base36(0, 4), "0000");
        assert_eq!(encode_base36(35, 4), "000z");
        assert_eq!(encode_base36(36, 4), "0010");
    }

    #[test]
    fn record_id_format() {
        let id = generate_record_id("op", "Sunrise Mall", "John Smith", "amit", fixed_ts(), 0);
        assert!(id.starts_with("op-"));
        assert_eq!(id.len(), 3 + ID_LENGTH);
    }

    #[test]
    fn record_id_deterministic() {
        let a = generate_record_id("op", "Title", "Contact", "alice", fixed_ts(), 0);
        let b = generate_record_id("op", "Title", "Contact", "alice", fixed_ts(), 0);
        assert_eq!(a, b);
    }

    #[test]
    fn record_id_nonce_changes_output() {
        let a = generate_record_id("op", "Title", "Contact", "alice", fixed_ts(), 0);
        let b = generate_record_id("op", "Title", "Contact", "alice", fixed_ts(), 1);
        assert_ne!(a, b);
    }

    #[test]
    fn project_code_shape() {
        let code = generate_project_code("Sunrise Mall Pvt Ltd", fixed_ts(), 0);
        assert!(code.starts_with("PRJ-2024-"));
        let digits = &code["PRJ-2024-".len()..];
        assert_eq!(digits.len(), 3);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn project_code_varies_with_nonce() {
        let a = generate_project_code("Sunrise Mall Pvt Ltd", fixed_ts(), 0);
        let b = generate_project_code("Sunrise Mall Pvt Ltd", fixed_ts(), 1);
        assert_ne!(a, b);
    }
}
