//! Node configuration
//!
//! Built once from the environment and passed by reference; nothing here
//! is mutated after startup.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

use anchora_roots::RootDefinition;

/// Configuration errors, all fatal at startup
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {var}: {message}")]
    InvalidEnv { var: &'static str, message: String },

    #[error("Failed to read root definitions from {path}: {source}")]
    RootsFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse root definitions from {path}: {source}")]
    RootsParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Default label {0:?} does not name a configured signer")]
    UnknownDefaultLabel(String),
}

/// Node configuration, read from `ANCHORA_*` environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen port
    pub port: u16,
    /// Path to the CA certificate PEM
    pub ca_cert: PathBuf,
    /// Path to the CA private key PEM
    pub ca_key: PathBuf,
    /// Optional path to a PEM bundle advertised as the node's trust chain
    pub trust_bundle: Option<PathBuf>,
    /// Label substituted when a request names no signing authority
    pub default_label: String,
    /// Root definitions controlling what this node trusts
    pub roots: Vec<RootDefinition>,
}

impl Config {
    /// Build the configuration from the environment
    ///
    /// `ANCHORA_ROOTS` names a JSON file holding a list of
    /// `{"type": ..., "metadata": {...}}` entries; when unset, the platform
    /// trust store is the default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("ANCHORA_PORT") {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnv {
                var: "ANCHORA_PORT",
                message: format!("{value:?} is not a valid port number"),
            })?,
            Err(_) => 8888,
        };

        let ca_cert = env::var("ANCHORA_CA_CERT").unwrap_or_else(|_| "ca.pem".into());
        let ca_key = env::var("ANCHORA_CA_KEY").unwrap_or_else(|_| "ca-key.pem".into());
        let trust_bundle = env::var("ANCHORA_TRUST_BUNDLE").ok().map(PathBuf::from);
        let default_label =
            env::var("ANCHORA_DEFAULT_LABEL").unwrap_or_else(|_| "primary".into());

        let roots = match env::var("ANCHORA_ROOTS") {
            Ok(path) => {
                let contents =
                    std::fs::read_to_string(&path).map_err(|source| ConfigError::RootsFile {
                        path: path.clone(),
                        source,
                    })?;
                serde_json::from_str(&contents)
                    .map_err(|source| ConfigError::RootsParse { path, source })?
            }
            Err(_) => Vec::new(),
        };

        Ok(Config {
            port,
            ca_cert: ca_cert.into(),
            ca_key: ca_key.into(),
            trust_bundle,
            default_label,
            roots,
        })
    }
}
