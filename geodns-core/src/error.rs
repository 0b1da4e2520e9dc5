//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use geodns_provider::ProviderError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// No provider registered under this id
    #[error("Provider not found: {0}")]
    ProviderNotFound(String),

    /// The provider has no geo routing for this zone
    #[error("Geo record sets are not supported by {provider} for zone {zone}")]
    GeoNotSupported { provider: String, zone: String },

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ProviderNotFound(_) | Self::GeoNotSupported { .. } | Self::ValidationError(_) => {
                true
            }
            Self::Provider(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
