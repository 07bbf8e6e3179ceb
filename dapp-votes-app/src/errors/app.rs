//! Top-level error type for the voting application.
use thiserror::Error;

use crate::errors::ProfileError;
use dapp_votes_chain::ChainError;

/// Represents errors surfaced by the application layer.
///
/// Chain and profile failures are wrapped; validation failures carry the
/// message shown to the user and never reach the network layer.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("chain error: {0}")]
    Chain(#[from] ChainError),
    #[error("profile error: {0}")]
    Profile(#[from] ProfileError),
    #[error("{0}")]
    Validation(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}
