//! Disk-backed key-store implementation
//!
//! The simplest backend: key material lives as PEM files on local disk and
//! is re-read on every access, so rotation on disk is picked up without a
//! restart. HSM- or vault-backed stores implement the same trait elsewhere.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rustls::pki_types::{
    PrivateKeyDer, PrivatePkcs1KeyDer, PrivatePkcs8KeyDer, PrivateSec1KeyDer,
};

use anchora_core::{Certificate, Error, KeyStore, Result};

/// Key store reading PEM files from configured paths
#[derive(Debug, Clone)]
pub struct FileKeyStore {
    key_path: PathBuf,
    cert_path: PathBuf,
    trust_path: Option<PathBuf>,
}

impl FileKeyStore {
    pub fn new(
        key_path: impl Into<PathBuf>,
        cert_path: impl Into<PathBuf>,
        trust_path: Option<PathBuf>,
    ) -> Self {
        FileKeyStore {
            key_path: key_path.into(),
            cert_path: cert_path.into(),
            trust_path,
        }
    }

    async fn read(&self, path: &Path) -> Result<String> {
        tokio::fs::read_to_string(path).await.map_err(|err| {
            Error::KeyStore(format!("Failed to read {}: {err}", path.display()))
        })
    }
}

#[async_trait]
impl KeyStore for FileKeyStore {
    async fn priv_key(&self) -> Result<PrivateKeyDer<'static>> {
        let contents = self.read(&self.key_path).await?;
        let block = pem::parse(&contents)?;
        let der = block.contents().to_vec();
        match block.tag() {
            "PRIVATE KEY" => Ok(PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(der))),
            "RSA PRIVATE KEY" => Ok(PrivateKeyDer::Pkcs1(PrivatePkcs1KeyDer::from(der))),
            "EC PRIVATE KEY" => Ok(PrivateKeyDer::Sec1(PrivateSec1KeyDer::from(der))),
            tag => Err(Error::KeyStore(format!(
                "Unsupported private key PEM tag {tag:?} in {}",
                self.key_path.display()
            ))),
        }
    }

    async fn cert(&self) -> Result<Certificate> {
        let contents = self.read(&self.cert_path).await?;
        Certificate::from_pem(&contents)
    }

    async fn trust_certs(&self) -> Result<Vec<Certificate>> {
        // No configured bundle means the node advertises no extra chain;
        // a configured bundle that fails to load is an error.
        let Some(path) = &self.trust_path else {
            return Ok(Vec::new());
        };
        let contents = self.read(path).await?;
        Certificate::parse_pem_bundle(&contents)
    }
}
