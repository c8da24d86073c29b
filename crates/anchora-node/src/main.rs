//! Anchora CA node binary
//!
//! Builds the trust store from configured root definitions, installs the
//! disk-backed key store, and serves the info endpoint.

use std::env;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use anchora_core::KeyStoreHandle;
use anchora_roots::{ProviderRegistry, TrustStore};

use anchora_node::{info_router, Config, FileKeyStore, InfoState, KeyStoreSigner};

#[tokio::main]
async fn main() {
    // Initialize logging
    let log_level = env::var("ANCHORA_LOG_LEVEL")
        .unwrap_or_else(|_| "info".into())
        .parse()
        .unwrap_or(Level::INFO);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    // Configuration
    let config = Config::from_env().expect("Invalid configuration");

    // Build the trust store from the configured root definitions
    let registry = ProviderRegistry::builtin();
    let trust_store = TrustStore::new(&registry, &config.roots)
        .await
        .expect("Failed to build trust store");
    info!(roots = trust_store.len(), "Trust store initialized");

    // Install the key-store backend before anything can sign
    let keystore = Arc::new(KeyStoreHandle::new());
    keystore
        .install(Arc::new(FileKeyStore::new(
            &config.ca_key,
            &config.ca_cert,
            config.trust_bundle.clone(),
        )))
        .expect("Key store already installed");

    let signer = Arc::new(KeyStoreSigner::new(Arc::clone(&keystore)));
    let state = Arc::new(InfoState {
        signer,
        trust_source: Some(Arc::new(trust_store)),
    });

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    info!(addr = %addr, "Anchora node listening");

    axum::serve(listener, info_router(state))
        .await
        .expect("Server error");
}
