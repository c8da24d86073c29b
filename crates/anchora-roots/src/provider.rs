//! The root-provider capability and its named registry
//!
//! A root provider turns provider-specific metadata into trust-anchor
//! certificates. Providers register under a type name; root definitions
//! select them by that name. Adding a source means registering a new
//! provider, not branching inside the store constructor.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use anchora_core::Certificate;

use crate::error::Result;
use crate::file::FileRoots;
use crate::remote::RemoteRoots;
use crate::system::SystemRoots;

/// A configured source of trust anchors: a provider type plus its metadata
///
/// Immutable once constructed; consumed exactly once while building a
/// trust store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootDefinition {
    /// Provider type name, e.g. `system`, `file`, or `cfssl`
    #[serde(rename = "type")]
    pub kind: String,
    /// Provider-specific settings, e.g. `source` for `file`
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl RootDefinition {
    /// A definition with no metadata
    pub fn new(kind: impl Into<String>) -> Self {
        RootDefinition {
            kind: kind.into(),
            metadata: HashMap::new(),
        }
    }

    /// Add a metadata entry
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// A strategy for sourcing trust-anchor certificates
#[async_trait]
pub trait RootProvider: Send + Sync {
    /// The type name definitions use to select this provider
    fn name(&self) -> &'static str;

    /// Produce trust anchors from the definition's metadata
    async fn resolve(&self, metadata: &HashMap<String, String>) -> Result<Vec<Certificate>>;
}

/// Registry mapping provider type names to provider implementations
pub struct ProviderRegistry {
    providers: HashMap<&'static str, Arc<dyn RootProvider>>,
}

impl ProviderRegistry {
    /// A registry with no providers
    pub fn empty() -> Self {
        ProviderRegistry {
            providers: HashMap::new(),
        }
    }

    /// A registry carrying the built-in providers: `system`, `file`, `cfssl`
    pub fn builtin() -> Self {
        let mut registry = ProviderRegistry::empty();
        registry.register(SystemRoots);
        registry.register(FileRoots);
        registry.register(RemoteRoots::new());
        registry
    }

    /// Register a provider under its type name, replacing any previous
    /// provider with the same name
    pub fn register<P: RootProvider + 'static>(&mut self, provider: P) {
        let name = provider.name();
        info!(provider = name, "Registered root provider");
        self.providers.insert(name, Arc::new(provider));
    }

    /// Look up a provider by type name
    pub fn get(&self, name: &str) -> Option<Arc<dyn RootProvider>> {
        self.providers.get(name).cloned()
    }

    /// Whether a provider is registered under the given name
    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    /// Registered provider type names
    pub fn names(&self) -> Vec<&'static str> {
        self.providers.keys().copied().collect()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        ProviderRegistry::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_knows_all_three_providers() {
        let registry = ProviderRegistry::builtin();
        assert!(registry.contains("system"));
        assert!(registry.contains("file"));
        assert!(registry.contains("cfssl"));
        assert!(!registry.contains("vault"));
    }

    #[test]
    fn test_definition_metadata_builder() {
        let def = RootDefinition::new("file").with("source", "/etc/ssl/bundle.pem");
        assert_eq!(def.kind, "file");
        assert_eq!(
            def.metadata.get("source").map(String::as_str),
            Some("/etc/ssl/bundle.pem")
        );
    }

    #[test]
    fn test_definition_deserializes_from_config_shape() {
        let def: RootDefinition = serde_json::from_str(
            r#"{"type": "cfssl", "metadata": {"host": "ca.internal:8888", "label": "primary"}}"#,
        )
        .unwrap();
        assert_eq!(def.kind, "cfssl");
        assert_eq!(
            def.metadata.get("label").map(String::as_str),
            Some("primary")
        );
    }
}
