//! A signer that serves identity straight from the key store
//!
//! Enough for a node whose job is distributing trust: `info` answers with
//! the key store's CA certificate and trust chain. Certificate issuance
//! belongs to the signing engine the embedding system wires in; until one
//! is, `issue` reports the backend as unavailable.

use std::sync::Arc;

use async_trait::async_trait;

use anchora_core::{
    Certificate, Error, InfoRequest, InfoResponse, IssueRequest, KeyStoreHandle, Result, Signer,
};

/// Serves a node's identity from the installed key store
pub struct KeyStoreSigner {
    keystore: Arc<KeyStoreHandle>,
}

impl KeyStoreSigner {
    pub fn new(keystore: Arc<KeyStoreHandle>) -> Self {
        KeyStoreSigner { keystore }
    }
}

#[async_trait]
impl Signer for KeyStoreSigner {
    async fn info(&self, _req: &InfoRequest) -> Result<InfoResponse> {
        let cert = self.keystore.cert().await?;
        let trust = self.keystore.trust_certs().await?;
        Ok(InfoResponse {
            certificate: cert.to_pem(),
            trust_certificates: trust.iter().map(Certificate::to_pem).collect(),
        })
    }

    async fn issue(&self, _req: &IssueRequest) -> Result<Certificate> {
        Err(Error::SigningUnavailable)
    }
}
