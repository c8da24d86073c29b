//! The key-store capability: where CA key material actually lives
//!
//! A node's private key, CA certificate, and trust chain may sit on local
//! disk, in an HSM, or behind a vault service. Everything that signs goes
//! through [`KeyStoreHandle`], which the embedding system fills in exactly
//! once at startup. Accessors called before installation fail with
//! [`Error::KeyStoreNotInitialized`] rather than panicking, so a
//! mis-ordered boot is a diagnosable error instead of a crash.

use std::fmt;
use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use rustls::pki_types::PrivateKeyDer;

use crate::cert::Certificate;
use crate::error::{Error, Result};

/// Backend supplying the active CA key material
///
/// Each accessor may fail (backend unreachable, material rotated away) and
/// must surface that failure; none of them returns a usable-looking empty
/// value.
#[async_trait]
pub trait KeyStore: Send + Sync {
    /// The active private signing key
    async fn priv_key(&self) -> Result<PrivateKeyDer<'static>>;

    /// The active CA certificate
    async fn cert(&self) -> Result<Certificate>;

    /// The trust-chain certificates advertised alongside the CA certificate
    async fn trust_certs(&self) -> Result<Vec<Certificate>>;
}

/// Install-once handle through which all key-store access flows
///
/// Constructed empty, handed by reference to every component that needs key
/// material, and filled in by the embedding system before serving starts.
#[derive(Default)]
pub struct KeyStoreHandle {
    backend: OnceLock<Arc<dyn KeyStore>>,
}

impl KeyStoreHandle {
    /// A handle with no backend installed yet
    pub fn new() -> Self {
        KeyStoreHandle {
            backend: OnceLock::new(),
        }
    }

    /// Install the process-wide backend; fails on a second call
    pub fn install(&self, backend: Arc<dyn KeyStore>) -> Result<()> {
        self.backend
            .set(backend)
            .map_err(|_| Error::KeyStoreAlreadyInitialized)
    }

    /// Whether a backend has been installed
    pub fn installed(&self) -> bool {
        self.backend.get().is_some()
    }

    fn backend(&self) -> Result<&Arc<dyn KeyStore>> {
        self.backend.get().ok_or(Error::KeyStoreNotInitialized)
    }

    /// The active private signing key
    pub async fn priv_key(&self) -> Result<PrivateKeyDer<'static>> {
        self.backend()?.priv_key().await
    }

    /// The active CA certificate
    pub async fn cert(&self) -> Result<Certificate> {
        self.backend()?.cert().await
    }

    /// The trust-chain certificates
    pub async fn trust_certs(&self) -> Result<Vec<Certificate>> {
        self.backend()?.trust_certs().await
    }
}

impl fmt::Debug for KeyStoreHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyStoreHandle")
            .field("installed", &self.installed())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedKeyStore {
        cert: Certificate,
    }

    #[async_trait]
    impl KeyStore for FixedKeyStore {
        async fn priv_key(&self) -> Result<PrivateKeyDer<'static>> {
            Err(Error::KeyStore("no key in test backend".to_string()))
        }

        async fn cert(&self) -> Result<Certificate> {
            Ok(self.cert.clone())
        }

        async fn trust_certs(&self) -> Result<Vec<Certificate>> {
            Ok(vec![self.cert.clone()])
        }
    }

    fn test_cert() -> Certificate {
        let key = rcgen::KeyPair::generate().unwrap();
        let cert = rcgen::CertificateParams::new(vec!["ks.example.com".to_string()])
            .unwrap()
            .self_signed(&key)
            .unwrap();
        Certificate::from_der(cert.der().to_vec())
    }

    #[tokio::test]
    async fn test_accessors_fail_before_install() {
        let handle = KeyStoreHandle::new();
        assert!(!handle.installed());
        assert!(matches!(
            handle.cert().await.unwrap_err(),
            Error::KeyStoreNotInitialized
        ));
        assert!(matches!(
            handle.trust_certs().await.unwrap_err(),
            Error::KeyStoreNotInitialized
        ));
    }

    #[tokio::test]
    async fn test_install_is_one_shot() {
        let handle = KeyStoreHandle::new();
        let cert = test_cert();
        handle
            .install(Arc::new(FixedKeyStore { cert: cert.clone() }))
            .unwrap();
        assert!(handle.installed());
        assert_eq!(handle.cert().await.unwrap().digest(), cert.digest());

        let err = handle
            .install(Arc::new(FixedKeyStore { cert }))
            .unwrap_err();
        assert!(matches!(err, Error::KeyStoreAlreadyInitialized));
    }

    #[tokio::test]
    async fn test_backend_failures_pass_through() {
        let handle = KeyStoreHandle::new();
        handle
            .install(Arc::new(FixedKeyStore { cert: test_cert() }))
            .unwrap();
        assert!(matches!(
            handle.priv_key().await.unwrap_err(),
            Error::KeyStore(_)
        ));
    }
}
