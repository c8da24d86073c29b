//! Error types for trust-anchor sourcing

use thiserror::Error;

/// Result type for root-provider operations
pub type Result<T> = std::result::Result<T, RootsError>;

/// Errors that can occur while sourcing trust anchors
#[derive(Error, Debug)]
pub enum RootsError {
    /// A provider was invoked without a metadata key it requires
    #[error("Root provider {provider} requires metadata key \"{key}\"")]
    MissingMetadata {
        provider: &'static str,
        key: &'static str,
    },

    /// A configured file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Mutual-TLS credential material failed to load
    #[error("Failed to load TLS credentials from {path}: {message}")]
    Credentials { path: String, message: String },

    /// The outbound TLS client could not be constructed
    #[error("Failed to build TLS client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Certificate parsing failed
    #[error(transparent)]
    Cert(#[from] anchora_core::Error),

    /// The outbound call to a peer CA failed at the transport level
    #[error("Transport error contacting {host}: {source}")]
    Transport {
        host: String,
        #[source]
        source: reqwest::Error,
    },

    /// The peer CA answered, but with an error
    #[error("Peer {host} answered with an error: {message}")]
    Peer { host: String, message: String },

    /// No definition in the configured list named a registered provider
    #[error("No supported root providers found")]
    NoSupportedProvider,
}
