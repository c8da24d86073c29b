//! Error types shared across the Anchora toolkit

use thiserror::Error;

/// Result type alias using the core error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the core certificate and capability types
#[derive(Error, Debug)]
pub enum Error {
    /// Input was not valid PEM
    #[error("Invalid PEM: {0}")]
    InvalidPem(String),

    /// A PEM block carried an unexpected tag
    #[error("Expected CERTIFICATE PEM block, got {0}")]
    UnexpectedPemTag(String),

    /// A key-store accessor was called before the embedding system
    /// installed a backend
    #[error("Key store not initialized")]
    KeyStoreNotInitialized,

    /// The key-store handle accepts exactly one backend per process
    #[error("Key store already initialized")]
    KeyStoreAlreadyInitialized,

    /// The key-store backend failed to produce material
    #[error("Key store backend error: {0}")]
    KeyStore(String),

    /// Signer-level failure reported by a signing authority
    #[error("Signer error: {0}")]
    Signer(String),

    /// No signing engine has been wired into this node
    #[error("Signing backend unavailable")]
    SigningUnavailable,

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<pem::PemError> for Error {
    fn from(err: pem::PemError) -> Self {
        Error::InvalidPem(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
