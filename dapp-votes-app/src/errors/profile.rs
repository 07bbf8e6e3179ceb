//! Error types for profile persistence and the KYC simulation.
use thiserror::Error;

/// Represents errors that can occur while loading, validating, or saving a
/// wallet-bound profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("{0}")]
    Validation(String),
}
