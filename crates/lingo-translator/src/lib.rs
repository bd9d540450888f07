//! # lingo-translator
//!
//! HTTP client for the external translation provider, implementing the
//! [`lingo_core::TranslationProvider`] port against a LibreTranslate-compatible
//! API.
//!
//! One call translates one chunk; the caller sequences calls and aborts on
//! the first failure. This crate never retries.

pub mod provider;

pub use provider::{HttpTranslationProvider, ProviderConfig};
