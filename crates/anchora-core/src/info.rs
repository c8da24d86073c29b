//! The info protocol: how a CA node describes its identity and trust
//!
//! A client posts an [`InfoRequest`] naming a signing authority (`label`) and
//! optionally a certificate profile; the node answers with the resolved
//! signer's certificate and any supplementary certificates the client should
//! also trust. Responses travel inside the shared [`ApiEnvelope`].

use serde::{Deserialize, Serialize};

/// Request for a signing authority's current certificate material
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InfoRequest {
    /// Which signing authority to resolve; empty selects the node default
    #[serde(default)]
    pub label: String,
    /// Certificate profile the caller intends to use
    #[serde(default)]
    pub profile: String,
}

/// A signing authority's answer to an [`InfoRequest`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoResponse {
    /// The resolved signer's own signing certificate, PEM-encoded
    pub certificate: String,
    /// Supplementary certificates the client should additionally trust.
    /// Ordered, PEM-encoded; not necessarily the responder's own chain.
    #[serde(default)]
    pub trust_certificates: Vec<String>,
}

/// JSON envelope wrapping every API response
///
/// Success carries `result`; failure carries `error` plus a stable `code`
/// clients can branch on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Wrap a successful result
    pub fn success(result: T) -> Self {
        ApiEnvelope {
            success: true,
            result: Some(result),
            error: None,
            code: None,
        }
    }

    /// Wrap an error message and code
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        ApiEnvelope {
            success: false,
            result: None,
            error: Some(message.into()),
            code: Some(code.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_fields_default_to_empty() {
        let req: InfoRequest = serde_json::from_str("{}").unwrap();
        assert!(req.label.is_empty());
        assert!(req.profile.is_empty());
    }

    #[test]
    fn test_success_envelope_omits_error_fields() {
        let envelope = ApiEnvelope::success(InfoResponse {
            certificate: "<pem>".to_string(),
            trust_certificates: vec![],
        });
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["result"]["certificate"], "<pem>");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_error_envelope_round_trips() {
        let envelope = ApiEnvelope::<InfoResponse>::error("BAD_LABEL", "bad label");
        let json = serde_json::to_string(&envelope).unwrap();
        let parsed: ApiEnvelope<InfoResponse> = serde_json::from_str(&json).unwrap();
        assert!(!parsed.success);
        assert_eq!(parsed.code.as_deref(), Some("BAD_LABEL"));
        assert!(parsed.result.is_none());
    }
}
