//! Header sets built from raw message bytes

use crate::error::{ParseError, Result};
use crate::scl::extract_from_header_set;
use crate::types::{HeaderSet, SclResult};
use tracing::debug;

impl HeaderSet {
    /// Build a header set from the header block of a raw message
    ///
    /// Parsing stops at the blank line separating headers from the body.
    /// Header names keep their original case and folded values are unfolded.
    pub fn from_raw(raw: &[u8]) -> Result<Self> {
        let (headers, body_offset) =
            mailparse::parse_headers(raw).map_err(|e| ParseError::Structure(e.to_string()))?;

        debug!(
            "Parsed {} headers ending at byte {}",
            headers.len(),
            body_offset
        );

        Ok(headers
            .iter()
            .map(|h| (h.get_key(), h.get_value()))
            .collect())
    }
}

/// Read the header block of a raw message and extract its SCL
///
/// Only a header block the parser rejects is an error; a missing or
/// malformed SCL is `Ok(None)`.
pub fn extract_from_raw(raw: &[u8]) -> Result<Option<SclResult>> {
    let headers = HeaderSet::from_raw(raw)?;
    Ok(extract_from_header_set(&headers))
}
