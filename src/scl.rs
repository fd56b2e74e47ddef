//! SCL token extraction and classification

use crate::types::{HeaderSet, HeaderSource, SclResult, SpamConfidence};
use regex::Regex;
use tracing::{debug, trace, warn};

/// Upper bound, in bytes, on the retained raw header value
pub const MAX_HEADER_LENGTH: usize = 4096;

/// Anti-spam report header stamped by the receiving tenant
pub const TRUSTED_HEADER: &str = "X-Forefront-Antispam-Report";

/// Anti-spam report header carried over from another tenant
pub const UNTRUSTED_HEADER: &str = "X-Forefront-Antispam-Report-Untrusted";

/// Lowest valid SCL value
pub const MIN_SCL: i32 = -1;

/// Highest valid SCL value
pub const MAX_SCL: i32 = 9;

// Case-sensitive, no whitespace around the colon, ASCII digits only.
static SCL_REGEX: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"SCL:(-?[0-9]+)").unwrap());

/// Map an SCL value to its human-readable category
#[must_use]
pub const fn classify(score: i32) -> &'static str {
    SpamConfidence::from_score(score).description()
}

/// Parse the SCL value out of a single anti-spam report header value
///
/// The first well-formed `SCL:` token wins, and it may sit inside a longer
/// token (`XSCL:5` reads as 5). Returns `None` when no token matches, the
/// value does not fit an `i32`, or it falls outside `-1..=9`.
#[must_use]
pub fn parse_header(raw: &str, header_source: &str) -> Option<SclResult> {
    let sanitized = sanitize(raw);

    let Some(captures) = SCL_REGEX.captures(&sanitized) else {
        trace!(header = header_source, "no SCL token");
        return None;
    };

    let Ok(score) = captures[1].parse::<i32>() else {
        trace!(header = header_source, "SCL value does not fit an i32");
        return None;
    };

    if !(MIN_SCL..=MAX_SCL).contains(&score) {
        warn!(score, header = header_source, "SCL value out of range");
        return None;
    }

    let category = SpamConfidence::from_score(score);
    debug!(score, header = header_source, "extracted SCL");

    Some(SclResult {
        score,
        description: category.description().to_string(),
        category,
        header_source: header_source.to_string(),
        raw_header: sanitized,
    })
}

/// Extract the SCL from a message's headers, trusted header first
///
/// The untrusted header is only consulted when the trusted one is absent,
/// empty, or yields no usable value.
#[must_use]
pub fn extract_from_header_set(headers: &HeaderSet) -> Option<SclResult> {
    HeaderSource::PRECEDENCE.iter().find_map(|source| {
        let name = source.name();
        headers
            .first(name)
            .filter(|value| !value.is_empty())
            .and_then(|value| parse_header(value, name))
    })
}

/// Drop line breaks, then cap the length without splitting a character
fn sanitize(raw: &str) -> String {
    let mut cleaned: String = raw.chars().filter(|&c| !matches!(c, '\r' | '\n')).collect();

    if cleaned.len() > MAX_HEADER_LENGTH {
        let mut end = MAX_HEADER_LENGTH;
        while !cleaned.is_char_boundary(end) {
            end -= 1;
        }
        cleaned.truncate(end);
    }

    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_line_breaks() {
        assert_eq!(sanitize("CIP:10.0.0.1;\nSCL:3;\r\nCTRY:US;"), "CIP:10.0.0.1;SCL:3;CTRY:US;");
    }

    #[test]
    fn test_sanitize_truncates_on_char_boundary() {
        // 3-byte characters never line up with the cap
        let raw = "日".repeat(MAX_HEADER_LENGTH);
        let cleaned = sanitize(&raw);

        assert!(cleaned.len() <= MAX_HEADER_LENGTH);
        assert_eq!(cleaned.len() % 3, 0);
    }

    #[test]
    fn test_sanitize_truncates_after_removing_newlines() {
        let raw = format!("{}{}", "\n".repeat(100), "A".repeat(MAX_HEADER_LENGTH));
        assert_eq!(sanitize(&raw).len(), MAX_HEADER_LENGTH);
    }
}
