//! Translation provider implementations

mod http;

pub use http::{HttpTranslationProvider, ProviderConfig};
