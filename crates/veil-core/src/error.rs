//! Error types for Veil core operations.
//!
//! This module defines the error hierarchy for all core operations.
//! Errors stay inside the engine: the field and record layers convert them
//! into typed outcomes or sentinel values before anything reaches a caller,
//! so no raw cryptographic failure crosses the crate boundary.

use thiserror::Error;

/// Result type alias for Veil operations.
pub type Result<T> = std::result::Result<T, VeilError>;

/// Core error type for Veil operations.
#[derive(Debug, Error)]
pub enum VeilError {
    /// AEAD authentication failed: wrong key, corrupted ciphertext, or tampering
    #[error("Authentication failed: wrong key or corrupted ciphertext")]
    AuthenticationFailed,

    /// Encryption or key handling error
    #[error("Encryption error: {0}")]
    Crypto(String),

    /// Stored field material could not be decoded
    #[error("Field encoding error: {0}")]
    Encoding(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
