//! Trust anchors from a local PEM bundle

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::debug;

use anchora_core::Certificate;

use crate::error::{Result, RootsError};
use crate::provider::RootProvider;

/// Parses one or more PEM certificates from a file named by the `source`
/// metadata key
///
/// Unlike the system provider, a file that is configured but unreadable or
/// malformed is a hard error: the operator asked for exactly these roots.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileRoots;

#[async_trait]
impl RootProvider for FileRoots {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn resolve(&self, metadata: &HashMap<String, String>) -> Result<Vec<Certificate>> {
        let source = metadata.get("source").ok_or(RootsError::MissingMetadata {
            provider: "file",
            key: "source",
        })?;

        let contents =
            tokio::fs::read_to_string(source)
                .await
                .map_err(|source_err| RootsError::Io {
                    path: source.clone(),
                    source: source_err,
                })?;

        let certs = Certificate::parse_pem_bundle(&contents)?;
        debug!(path = %source, count = certs.len(), "Loaded trust anchors from file");
        Ok(certs)
    }
}
