//! Error types shared across Ken Burns crates.

use std::path::PathBuf;

/// Top-level error type for Ken Burns operations.
#[derive(Debug, thiserror::Error)]
pub enum KenBurnsError {
    /// A transition was built from rects whose aspect ratios differ.
    #[error(
        "Can't perform Ken Burns effect on rects with distinct aspect ratios \
         (source {source_ratio:.3}, destiny {destiny_ratio:.3})"
    )]
    IncompatibleAspectRatio { source_ratio: f64, destiny_ratio: f64 },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using KenBurnsError.
pub type KenBurnsResult<T> = Result<T, KenBurnsError>;

impl KenBurnsError {
    pub fn incompatible_ratio(source_ratio: f64, destiny_ratio: f64) -> Self {
        Self::IncompatibleAspectRatio {
            source_ratio,
            destiny_ratio,
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Whether this error signals a broken caller contract rather than bad input.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::IncompatibleAspectRatio { .. })
    }
}
