//! Error types for marga-nav.
//!
//! Planning failures are not errors: an unreachable goal comes back as an
//! empty direction sequence. Errors cover only the configuration and parsing
//! surface.

use thiserror::Error;

/// marga-nav error type
#[derive(Error, Debug)]
pub enum MargaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Maze parse error: {0}")]
    Parse(String),
}

impl From<toml::de::Error> for MargaError {
    fn from(e: toml::de::Error) -> Self {
        MargaError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MargaError>;
