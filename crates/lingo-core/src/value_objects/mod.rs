//! Value objects - validated domain primitives

mod language;

pub use language::{LanguageCode, LanguageCodeParseError};
