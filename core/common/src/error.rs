//! Common error types for yjcrypt.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for yjcrypt operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Container bytes are malformed: missing or truncated signature.
    #[error("Format error: {0}")]
    Format(String),

    /// Encryption was attempted on a file that is already a container.
    #[error("Already encrypted: {}", .0.display())]
    AlreadyEncrypted(PathBuf),

    /// Decryption was attempted on a file that is not a container.
    #[error("Not a yjcrypt container: {}", .0.display())]
    NotAContainer(PathBuf),

    /// Authentication tag verification failed.
    ///
    /// A wrong password and a tampered container both surface as this
    /// variant; callers cannot distinguish the two conditions.
    #[error("Authentication failed: wrong password or corrupted data")]
    Authentication,

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Breach-check service unreachable or returned a non-success status.
    #[error("Network error: {0}")]
    Network(String),

    /// The operator declined to continue.
    #[error("Aborted: {0}")]
    Aborted(String),

    /// Invalid input provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias using the common Error.
pub type Result<T> = std::result::Result<T, Error>;
