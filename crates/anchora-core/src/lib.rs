//! # Anchora Core
//!
//! Shared vocabulary for the Anchora CA toolkit: certificates with
//! content-addressed identity, the info protocol spoken between CA nodes,
//! and the capability traits (signing authority, key store) that the rest
//! of the system consumes.
//!
//! ## Key concepts
//!
//! - **Certificate**: raw X.509 DER plus the SHA-256 digest of its encoded
//!   bytes; the digest is the identity used for deduplication.
//! - **Info protocol**: `{label, profile}` in, `{certificate,
//!   trust_certificates[]}` out, wrapped in a JSON envelope.
//! - **Label**: names one of several signing authorities served by a node.
//! - **KeyStore**: the single, install-once source of a node's private key,
//!   CA certificate, and trust chain.

pub mod cert;
pub mod error;
pub mod info;
pub mod keystore;
pub mod signer;

pub use cert::{CertDigest, Certificate};
pub use error::{Error, Result};
pub use info::{ApiEnvelope, InfoRequest, InfoResponse};
pub use keystore::{KeyStore, KeyStoreHandle};
pub use signer::{IssueRequest, Signer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
