//! Trust anchors from the operating environment

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::{debug, warn};

use anchora_core::Certificate;

use crate::error::Result;
use crate::provider::RootProvider;

/// Reads the platform trust store
///
/// An unavailable platform store is common in minimal environments and must
/// not block startup: entries that fail to load are logged at warn level
/// and the provider returns whatever did load, possibly nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRoots;

#[async_trait]
impl RootProvider for SystemRoots {
    fn name(&self) -> &'static str {
        "system"
    }

    async fn resolve(&self, _metadata: &HashMap<String, String>) -> Result<Vec<Certificate>> {
        let loaded = rustls_native_certs::load_native_certs();
        for err in &loaded.errors {
            warn!(error = %err, "Platform trust store entry failed to load");
        }

        let certs: Vec<Certificate> = loaded
            .certs
            .into_iter()
            .map(|der| Certificate::from_der(der.as_ref().to_vec()))
            .collect();

        if certs.is_empty() {
            warn!("Platform trust store unavailable; continuing with no system roots");
        } else {
            debug!(count = certs.len(), "Loaded platform trust anchors");
        }
        Ok(certs)
    }
}
