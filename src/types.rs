//! Core types for SCL extraction

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A classified Spam Confidence Level read from an anti-spam header
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SclResult {
    /// SCL value, always within `-1..=9`
    pub score: i32,

    /// Human-readable category for `score`
    pub description: String,

    /// Typed category for `score`
    pub category: SpamConfidence,

    /// Name of the header the value was read from
    pub header_source: String,

    /// Header value with line breaks removed, capped at `MAX_HEADER_LENGTH`
    pub raw_header: String,
}

impl fmt::Display for SclResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SCL {} ({}) from {}",
            self.score, self.description, self.header_source
        )
    }
}

/// Spam confidence category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SpamConfidence {
    /// SCL -1: filtering bypassed
    Skipped,
    /// SCL 0-1
    NotSpam,
    /// SCL 2-4
    LowProbability,
    /// SCL 5-6
    Spam,
    /// SCL 7-9
    HighConfidence,
    /// Anything outside `-1..=9`
    Unknown,
}

impl SpamConfidence {
    /// Category for an SCL value; anything outside `-1..=9` is `Unknown`
    #[must_use]
    pub const fn from_score(score: i32) -> Self {
        match score {
            -1 => Self::Skipped,
            0..=1 => Self::NotSpam,
            2..=4 => Self::LowProbability,
            5..=6 => Self::Spam,
            7..=9 => Self::HighConfidence,
            _ => Self::Unknown,
        }
    }

    /// Human-readable label shown next to the score
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Skipped => "Skipped spam filtering (safe sender or SCL override)",
            Self::NotSpam => "Not spam",
            Self::LowProbability => "Low spam probability",
            Self::Spam => "Spam",
            Self::HighConfidence => "High confidence spam",
            Self::Unknown => "Unknown spam confidence level",
        }
    }

    /// Whether the gateway would deliver this message to junk
    #[must_use]
    pub const fn is_spam(self) -> bool {
        matches!(self, Self::Spam | Self::HighConfidence)
    }
}

impl fmt::Display for SpamConfidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Which anti-spam report header a value came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum HeaderSource {
    /// `X-Forefront-Antispam-Report`, stamped by the receiving tenant
    Trusted,
    /// `X-Forefront-Antispam-Report-Untrusted`, carried over from elsewhere
    Untrusted,
}

impl HeaderSource {
    /// Lookup order used when both headers are present
    pub const PRECEDENCE: [Self; 2] = [Self::Trusted, Self::Untrusted];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Trusted => crate::scl::TRUSTED_HEADER,
            Self::Untrusted => crate::scl::UNTRUSTED_HEADER,
        }
    }
}

impl fmt::Display for HeaderSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Header name to ordered values, as present in the message
///
/// Names are case-sensitive. Repeated headers keep every value in the
/// order they were inserted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeaderSet(HashMap<String, Vec<String>>);

impl HeaderSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value for `name`
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.entry(name.into()).or_default().push(value.into());
    }

    /// All values for `name`, in insertion order
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.0.get(name).map(Vec::as_slice)
    }

    #[must_use]
    pub fn first(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Number of distinct header names
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for HeaderSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (name, value) in iter {
            set.insert(name, value);
        }
        set
    }
}
