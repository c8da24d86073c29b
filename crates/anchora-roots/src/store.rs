//! The deduplicating trust store
//!
//! Long-lived and read-mostly: built once from a list of root definitions,
//! then queried for snapshots and TLS verification pools. `add_certs` is
//! the only write path.

use std::collections::HashMap;
use std::sync::RwLock;

use rustls::RootCertStore;
use tracing::debug;

use anchora_core::{CertDigest, Certificate};

use crate::error::{Result, RootsError};
use crate::provider::{ProviderRegistry, RootDefinition, RootProvider};
use crate::system::SystemRoots;

/// A concurrency-safe pool of trust-anchor certificates, keyed by content
/// digest
#[derive(Debug, Default)]
pub struct TrustStore {
    roots: RwLock<HashMap<CertDigest, Certificate>>,
}

impl TrustStore {
    /// An empty store
    pub fn empty() -> Self {
        TrustStore::default()
    }

    /// Build a store from a list of root definitions
    ///
    /// With no definitions, the platform trust store is the safe default.
    /// Otherwise each definition resolves through the registry; a
    /// definition whose type is unknown to the registry is skipped, but a
    /// recognized provider that fails aborts the whole build. Callers never
    /// receive a store holding fewer roots than configured.
    pub async fn new(registry: &ProviderRegistry, defs: &[RootDefinition]) -> Result<TrustStore> {
        let store = TrustStore::empty();

        if defs.is_empty() {
            store.add_certs(SystemRoots.resolve(&HashMap::new()).await?);
            return Ok(store);
        }

        let mut recognized = false;
        for def in defs {
            let Some(provider) = registry.get(&def.kind) else {
                debug!(kind = %def.kind, "Skipping unrecognized root provider type");
                continue;
            };
            recognized = true;
            store.add_certs(provider.resolve(&def.metadata).await?);
        }

        if !recognized {
            return Err(RootsError::NoSupportedProvider);
        }
        Ok(store)
    }

    /// Add certificates, merging duplicates by content digest
    pub fn add_certs(&self, certs: impl IntoIterator<Item = Certificate>) {
        let mut roots = self.roots.write().unwrap();
        for cert in certs {
            roots.insert(cert.digest(), cert);
        }
    }

    /// A fresh snapshot of the stored certificates, in unspecified order
    pub fn certificates(&self) -> Vec<Certificate> {
        let roots = self.roots.read().unwrap();
        roots.values().cloned().collect()
    }

    /// Number of distinct certificates held
    pub fn len(&self) -> usize {
        self.roots.read().unwrap().len()
    }

    /// Whether the store holds no certificates
    pub fn is_empty(&self) -> bool {
        self.roots.read().unwrap().is_empty()
    }

    /// A verification pool built from the store's state at call time
    pub fn pool(&self) -> RootCertStore {
        let mut pool = RootCertStore::empty();
        let roots = self.roots.read().unwrap();
        let (added, ignored) =
            pool.add_parsable_certificates(roots.values().map(|cert| cert.der().clone()));
        debug!(added, ignored, "Built verification pool");
        pool
    }
}
