//! Error types for configuration loading.

use thiserror::Error;

/// Top-level error type for configuration operations.
#[derive(Debug, Error)]
pub enum SpecError {
    /// TOML parsing error, including unknown layer types and enum strings.
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// I/O error reading the configuration source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
