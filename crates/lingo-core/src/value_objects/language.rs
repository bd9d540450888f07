//! Language code - validated target-language tag
//!
//! Accepts lowercase tags of the form the provider understands: `en`, `ja`,
//! `zh-cn`, `zh-tw`. Validation is intentionally shallow; the provider is the
//! authority on which languages exist.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Maximum accepted tag length
const MAX_LEN: usize = 16;

/// A validated language tag (lowercased on parse)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Parse and normalize a language tag
    pub fn parse(s: &str) -> Result<Self, LanguageCodeParseError> {
        let tag = s.trim().to_ascii_lowercase();

        if tag.is_empty() {
            return Err(LanguageCodeParseError::Empty);
        }
        if tag.len() > MAX_LEN {
            return Err(LanguageCodeParseError::TooLong);
        }

        // Segments of letters/digits separated by single dashes: "en", "zh-cn"
        let valid = tag
            .split('-')
            .all(|seg| !seg.is_empty() && seg.chars().all(|c| c.is_ascii_alphanumeric()));
        if !valid {
            return Err(LanguageCodeParseError::InvalidFormat);
        }

        Ok(Self(tag))
    }

    /// Get the normalized tag
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Error when parsing a language code from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LanguageCodeParseError {
    #[error("language code is empty")]
    Empty,

    #[error("language code is too long")]
    TooLong,

    #[error("invalid language code format")]
    InvalidFormat,
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for LanguageCode {
    type Err = LanguageCodeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LanguageCode::parse(s)
    }
}

impl Serialize for LanguageCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for LanguageCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        LanguageCode::parse(&s).map_err(serde::de::Error::custom)
    }
}
