// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Spam Confidence Level extraction
//!
//! Reads the `SCL:` token that Exchange Online Protection writes into the
//! `X-Forefront-Antispam-Report` header and classifies it.
//!
//! # Features
//!
//! - Trusted header first, untrusted variant as fallback
//! - Sanitized, length-capped copy of the raw header for display
//! - Absence instead of errors for missing or malformed values
//! - Header sets built from a raw message header block
//!
//! # Example
//!
//! ```rust
//! use scl_extract::{HeaderSet, TRUSTED_HEADER, extract_from_header_set};
//!
//! let mut headers = HeaderSet::new();
//! headers.insert(TRUSTED_HEADER, "CIP:203.0.113.1;CTRY:XX;SCL:5;SFV:SPM;");
//!
//! let result = extract_from_header_set(&headers).unwrap();
//! assert_eq!(result.score, 5);
//! assert_eq!(result.description, "Spam");
//! println!("{result}");
//! ```

mod error;
mod headers;
mod scl;
mod types;

pub use error::{ParseError, Result};
pub use headers::extract_from_raw;
pub use scl::{
    MAX_HEADER_LENGTH, MAX_SCL, MIN_SCL, TRUSTED_HEADER, UNTRUSTED_HEADER, classify,
    extract_from_header_set, parse_header,
};
pub use types::*;
