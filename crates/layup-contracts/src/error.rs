//! Error types for the LAYUP library.
//!
//! The query operations themselves are total — absence is `None` or an empty
//! sequence, never an error. Errors only arise at initialization seams:
//! parsing embedded data, loading profile documents, or wiring configuration.

use thiserror::Error;

/// The unified error type for the LAYUP crates.
#[derive(Debug, Error)]
pub enum LayupError {
    /// The embedded dataset failed to parse, or violates a load-time
    /// invariant such as duplicate card ids.
    #[error("dataset error: {reason}")]
    DatasetError { reason: String },

    /// A setup profile document is malformed or internally inconsistent.
    #[error("profile error: {reason}")]
    ProfileError { reason: String },

    /// A required configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },
}

/// Convenience alias used throughout the LAYUP crates.
pub type LayupResult<T> = Result<T, LayupError>;
