//! X.509 certificate wrapper with content-addressed identity
//!
//! Certificates are carried as raw DER with a SHA-256 digest of the encoded
//! bytes computed up front. The digest is the identity used everywhere
//! deduplication matters: two certificate objects with identical bytes are
//! the same certificate, whatever their subjects say.

use std::fmt;
use std::hash::{Hash, Hasher};

use pem::{EncodeConfig, LineEnding, Pem};
use rustls::pki_types::CertificateDer;
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

const CERTIFICATE_TAG: &str = "CERTIFICATE";

/// SHA-256 digest of a certificate's raw DER encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CertDigest([u8; 32]);

impl CertDigest {
    /// Digest of the given encoded certificate bytes
    pub fn of(der: &[u8]) -> Self {
        CertDigest(Sha256::digest(der).into())
    }

    /// The raw digest bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for CertDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// An X.509 certificate held as raw DER
///
/// Parsing validates PEM framing only; structural validation of the DER
/// happens wherever the certificate is actually used (TLS pools reject
/// entries they cannot parse).
#[derive(Clone)]
pub struct Certificate {
    der: CertificateDer<'static>,
    digest: CertDigest,
}

impl Certificate {
    /// Wrap DER-encoded certificate bytes
    pub fn from_der(der: impl Into<Vec<u8>>) -> Self {
        let der = CertificateDer::from(der.into());
        let digest = CertDigest::of(der.as_ref());
        Certificate { der, digest }
    }

    /// Parse a single PEM CERTIFICATE block
    pub fn from_pem(input: &str) -> Result<Self> {
        let block = pem::parse(input)?;
        if block.tag() != CERTIFICATE_TAG {
            return Err(Error::UnexpectedPemTag(block.tag().to_string()));
        }
        Ok(Certificate::from_der(block.contents().to_vec()))
    }

    /// Parse one or more PEM CERTIFICATE blocks
    ///
    /// An input with no PEM blocks at all is an error, as is any block
    /// carrying a non-certificate tag.
    pub fn parse_pem_bundle(input: &str) -> Result<Vec<Self>> {
        let blocks = pem::parse_many(input)?;
        if blocks.is_empty() {
            return Err(Error::InvalidPem("no PEM blocks found".to_string()));
        }
        blocks
            .into_iter()
            .map(|block| {
                if block.tag() != CERTIFICATE_TAG {
                    return Err(Error::UnexpectedPemTag(block.tag().to_string()));
                }
                Ok(Certificate::from_der(block.contents().to_vec()))
            })
            .collect()
    }

    /// PEM-encode the certificate, trimmed of surrounding whitespace
    pub fn to_pem(&self) -> String {
        let block = Pem::new(CERTIFICATE_TAG, self.der.as_ref().to_vec());
        let config = EncodeConfig::new().set_line_ending(LineEnding::LF);
        pem::encode_config(&block, config).trim().to_string()
    }

    /// Content digest of the raw DER bytes
    pub fn digest(&self) -> CertDigest {
        self.digest
    }

    /// The raw DER encoding
    pub fn der(&self) -> &CertificateDer<'static> {
        &self.der
    }

    /// Consume into the raw DER encoding
    pub fn into_der(self) -> CertificateDer<'static> {
        self.der
    }
}

impl PartialEq for Certificate {
    fn eq(&self, other: &Self) -> bool {
        self.digest == other.digest
    }
}

impl Eq for Certificate {}

impl Hash for Certificate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.digest.hash(state);
    }
}

impl fmt::Debug for Certificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Certificate")
            .field("digest", &self.digest.to_string())
            .field("der_len", &self.der.as_ref().len())
            .finish()
    }
}
