//! Info handlers: serving a node's identity and trust material
//!
//! Two variants share the same wire contract. The single-signer handler
//! serves one authority and can augment responses with certificates from a
//! supplementary trust source; the multi-signer handler routes by label
//! across several named authorities.

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use tracing::{debug, warn};

use anchora_core::{ApiEnvelope, Certificate, InfoRequest, InfoResponse, Signer};
use anchora_roots::TrustStore;

use crate::api::error::ApiError;
use crate::config::ConfigError;

/// Supplementary source of certificates a node advertises for clients to
/// additionally trust
pub trait TrustAnchorSource: Send + Sync {
    fn trust_certificates(&self) -> Vec<Certificate>;
}

impl TrustAnchorSource for TrustStore {
    fn trust_certificates(&self) -> Vec<Certificate> {
        self.certificates()
    }
}

/// State for the single-signer info endpoint
pub struct InfoState {
    /// The node's signing authority
    pub signer: Arc<dyn Signer>,
    /// Optional source of extra certificates appended to every response
    pub trust_source: Option<Arc<dyn TrustAnchorSource>>,
}

/// POST /api/v1/cfssl/info
///
/// Answers with the signer's certificate material, augmented with the
/// supplementary trust certificates when a source is configured.
pub async fn info(
    State(state): State<Arc<InfoState>>,
    body: Bytes,
) -> Result<Json<ApiEnvelope<InfoResponse>>, ApiError> {
    let req = decode_request(&body)?;

    let mut resp = state.signer.info(&req).await?;

    if let Some(source) = &state.trust_source {
        for cert in source.trust_certificates() {
            let pem = cert.to_pem();
            if pem.is_empty() {
                continue;
            }
            resp.trust_certificates.push(pem);
        }
        debug!(
            count = resp.trust_certificates.len(),
            "Advertising trust certificates"
        );
    }

    Ok(Json(ApiEnvelope::success(resp)))
}

/// State for the label-routed info endpoint
pub struct MultiInfoState {
    signers: HashMap<String, Arc<dyn Signer>>,
    default_label: String,
}

impl std::fmt::Debug for MultiInfoState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiInfoState")
            .field("signers", &self.signers.keys().collect::<Vec<_>>())
            .field("default_label", &self.default_label)
            .finish()
    }
}

impl MultiInfoState {
    /// Build the routing state, rejecting a default label that names no
    /// configured signer
    pub fn new(
        signers: HashMap<String, Arc<dyn Signer>>,
        default_label: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let default_label = default_label.into();
        if !signers.contains_key(&default_label) {
            return Err(ConfigError::UnknownDefaultLabel(default_label));
        }
        Ok(MultiInfoState {
            signers,
            default_label,
        })
    }

    /// Configured signer labels
    pub fn labels(&self) -> Vec<&str> {
        self.signers.keys().map(String::as_str).collect()
    }
}

/// POST /api/v1/cfssl/info (multi-signer nodes)
///
/// An empty label selects the default authority; an unknown label is the
/// caller's mistake, not ours.
pub async fn multi_info(
    State(state): State<Arc<MultiInfoState>>,
    body: Bytes,
) -> Result<Json<ApiEnvelope<InfoResponse>>, ApiError> {
    let mut req = decode_request(&body)?;

    if req.label.is_empty() {
        req.label = state.default_label.clone();
    }

    let Some(signer) = state.signers.get(&req.label) else {
        return Err(ApiError::BadLabel(req.label));
    };

    debug!(label = %req.label, "Resolving signer info");
    let resp = signer.info(&req).await?;
    Ok(Json(ApiEnvelope::success(resp)))
}

fn decode_request(body: &[u8]) -> Result<InfoRequest, ApiError> {
    serde_json::from_slice(body).map_err(|err| {
        warn!(error = %err, "Failed to decode info request");
        ApiError::BadRequest(err.to_string())
    })
}
