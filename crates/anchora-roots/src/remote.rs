//! Trust bootstrap from a peer CA's info endpoint
//!
//! Queries another CA node for its signing certificate and advertised trust
//! chain over (optionally mutual) TLS. Registers under the `cfssl` type and
//! posts to `/api/v1/cfssl/info`, keeping root definitions wire-compatible
//! with CFSSL-style CA nodes.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::{debug, error, warn};

use anchora_core::{ApiEnvelope, Certificate, InfoRequest, InfoResponse};

use crate::error::{Result, RootsError};
use crate::provider::RootProvider;

const INFO_PATH: &str = "/api/v1/cfssl/info";

const HOST_KEY: &str = "host";
const LABEL_KEY: &str = "label";
const PROFILE_KEY: &str = "profile";
const MUTUAL_TLS_CERT_KEY: &str = "mutual-tls-cert";
const MUTUAL_TLS_KEY_KEY: &str = "mutual-tls-key";
const TLS_REMOTE_CA_KEY: &str = "tls-remote-ca";

/// Bootstraps trust anchors from a peer CA
///
/// No timeout or retry is applied here; deadlines belong to the embedding
/// system.
#[derive(Debug, Default)]
pub struct RemoteRoots;

impl RemoteRoots {
    pub fn new() -> Self {
        RemoteRoots
    }

    /// Build the outbound client from the definition's TLS metadata
    ///
    /// A client identity is loaded only when both the certificate and key
    /// paths are present; a remote-CA bundle, when present, replaces the
    /// built-in roots so only the configured peers are accepted.
    async fn client(&self, metadata: &HashMap<String, String>) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder().use_rustls_tls();

        if let (Some(cert_path), Some(key_path)) = (
            metadata.get(MUTUAL_TLS_CERT_KEY),
            metadata.get(MUTUAL_TLS_KEY_KEY),
        ) {
            let mut pem = read_file(cert_path).await?;
            pem.extend(read_file(key_path).await?);
            let identity =
                reqwest::Identity::from_pem(&pem).map_err(|err| RootsError::Credentials {
                    path: cert_path.clone(),
                    message: err.to_string(),
                })?;
            builder = builder.identity(identity);
        }

        if let Some(ca_path) = metadata.get(TLS_REMOTE_CA_KEY) {
            let bundle = read_file(ca_path).await?;
            let bundle = String::from_utf8_lossy(&bundle);
            let cas = Certificate::parse_pem_bundle(&bundle)?;
            builder = builder.tls_built_in_root_certs(false);
            for ca in cas {
                let ca = reqwest::Certificate::from_der(ca.der().as_ref()).map_err(|err| {
                    RootsError::Credentials {
                        path: ca_path.clone(),
                        message: err.to_string(),
                    }
                })?;
                builder = builder.add_root_certificate(ca);
            }
        }

        builder.build().map_err(RootsError::ClientBuild)
    }
}

#[async_trait]
impl RootProvider for RemoteRoots {
    fn name(&self) -> &'static str {
        "cfssl"
    }

    async fn resolve(&self, metadata: &HashMap<String, String>) -> Result<Vec<Certificate>> {
        let host = metadata.get(HOST_KEY).ok_or(RootsError::MissingMetadata {
            provider: "cfssl",
            key: HOST_KEY,
        })?;

        let request = InfoRequest {
            label: metadata.get(LABEL_KEY).cloned().unwrap_or_default(),
            profile: metadata.get(PROFILE_KEY).cloned().unwrap_or_default(),
        };

        let client = self.client(metadata).await?;
        let url = info_url(host);
        debug!(host = %host, label = %request.label, "Requesting peer CA info");

        let response = client.post(&url).json(&request).send().await.map_err(|err| {
            error!(host = %host, error = %err, "Peer CA request failed");
            RootsError::Transport {
                host: host.clone(),
                source: err,
            }
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|err| RootsError::Transport {
            host: host.clone(),
            source: err,
        })?;

        let envelope: ApiEnvelope<InfoResponse> =
            serde_json::from_str(&body).map_err(|_| RootsError::Peer {
                host: host.clone(),
                message: format!("unexpected response ({status})"),
            })?;

        if !envelope.success {
            return Err(RootsError::Peer {
                host: host.clone(),
                message: envelope
                    .error
                    .unwrap_or_else(|| format!("request failed ({status})")),
            });
        }
        let info = envelope.result.ok_or_else(|| RootsError::Peer {
            host: host.clone(),
            message: "success response carried no result".to_string(),
        })?;

        // The peer's own identity is load-bearing; its advertised trust
        // augmentation is best-effort.
        let mut certs = Certificate::parse_pem_bundle(&info.certificate)?;
        for entry in &info.trust_certificates {
            match Certificate::from_pem(entry) {
                Ok(cert) => certs.push(cert),
                Err(err) => {
                    warn!(host = %host, error = %err, "Skipping unparsable trust certificate from peer");
                }
            }
        }

        debug!(host = %host, count = certs.len(), "Peer CA info resolved");
        Ok(certs)
    }
}

async fn read_file(path: &str) -> Result<Vec<u8>> {
    tokio::fs::read(path).await.map_err(|source| RootsError::Io {
        path: path.to_string(),
        source,
    })
}

fn info_url(host: &str) -> String {
    let host = host.trim_end_matches('/');
    if host.contains("://") {
        format!("{host}{INFO_PATH}")
    } else {
        format!("https://{host}{INFO_PATH}")
    }
}
