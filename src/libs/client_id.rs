//! Client identifier extraction from file paths.
//!
//! Job folders follow a `NNNN_CODE` or `NNNN_CODE_Variant` convention
//! (e.g. `0034_JH`, `0035_TOG_Enhance`). This is a stateless string-pattern
//! lookup; its matching rules are a policy, not a correctness-critical
//! algorithm.

use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

pub const UNKNOWN_CLIENT: &str = "Unknown_Client";

static CLIENT_SEGMENT: OnceLock<Regex> = OnceLock::new();

fn client_segment() -> &'static Regex {
    CLIENT_SEGMENT.get_or_init(|| Regex::new(r"^\d{4}_[A-Z]+(?:_[A-Za-z0-9]+)?$").unwrap())
}

/// Extracts the client id from a file path.
///
/// Scans path components for a `NNNN_CODE[_Variant]` segment; falls back to
/// the first component mixing digits and letters, then to
/// `"Unknown_Client"`.
pub fn extract_client_id(path: &Path) -> String {
    // Windows paths show up verbatim on any platform, so split on both
    // separators instead of relying on Path components.
    let raw = path.to_string_lossy();
    let parts: Vec<&str> = raw.split(['/', '\\']).filter(|part| !part.is_empty()).collect();

    for part in &parts {
        if client_segment().is_match(part) {
            return (*part).to_string();
        }
    }

    // Fallback: any directory-like component containing both digits and
    // letters, skipping the filename itself.
    for part in parts.iter().take(parts.len().saturating_sub(1)) {
        let has_digit = part.chars().any(|c| c.is_ascii_digit());
        let has_alpha = part.chars().any(|c| c.is_alphabetic());
        if has_digit && has_alpha {
            return (*part).to_string();
        }
    }

    UNKNOWN_CLIENT.to_string()
}
