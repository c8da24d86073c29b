//! The signing-authority capability consumed by the info handlers
//!
//! The signing engine itself lives outside this layer; handlers and the
//! remote bootstrap only need the narrow surface below.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::cert::Certificate;
use crate::error::Result;
use crate::info::{InfoRequest, InfoResponse};

/// A certificate-issuance request submitted to a signing authority
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueRequest {
    /// PEM-encoded certificate signing request
    pub csr: String,
    /// Certificate profile to issue under
    #[serde(default)]
    pub profile: String,
    /// Signing authority to issue from; empty selects the node default
    #[serde(default)]
    pub label: String,
}

/// A named signing authority
///
/// Supplied by the embedding system; one node may carry several, keyed by
/// label.
#[async_trait]
pub trait Signer: Send + Sync {
    /// Describe this signer's current certificate material
    async fn info(&self, req: &InfoRequest) -> Result<InfoResponse>;

    /// Issue a certificate for the given request
    async fn issue(&self, req: &IssueRequest) -> Result<Certificate>;
}
