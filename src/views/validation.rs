//! Local form validation. The backend repeats these checks authoritatively;
//! validating here saves a round trip and keeps messages inline.

use once_cell::sync::Lazy;
use regex::Regex;

/// File types the evidence endpoint accepts.
pub const ALLOWED_EVIDENCE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "pdf", "txt"];

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

pub fn valid_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

/// The signup forms require a 10-digit phone number.
pub fn valid_phone(s: &str) -> bool {
    PHONE_RE.is_match(s)
}

/// Badge ids are positive integers.
pub fn valid_badge_id(s: &str) -> bool {
    s.parse::<i64>().map(|n| n > 0).unwrap_or(false)
}

/// Extension whitelist check, case-insensitive, mirroring the upload rules.
pub fn allowed_evidence_file(name: &str) -> bool {
    let Some((_, ext)) = name.rsplit_once('.') else { return false };
    let ext = ext.to_ascii_lowercase();
    ALLOWED_EVIDENCE_EXTENSIONS.iter().any(|a| *a == ext)
}
