//! Trust-store construction tests
//!
//! These exercise the aggregation rules: the system-provider default for an
//! empty configuration, silent skipping of unrecognized provider types, and
//! the all-or-nothing failure policy.

use std::collections::HashMap;
use std::collections::HashSet;
use std::io::Write;

use anchora_core::{CertDigest, Certificate};
use anchora_roots::{
    ProviderRegistry, RootDefinition, RootProvider, RootsError, SystemRoots, TrustStore,
};

fn generate_cert(name: &str) -> Certificate {
    let key = rcgen::KeyPair::generate().unwrap();
    let cert = rcgen::CertificateParams::new(vec![name.to_string()])
        .unwrap()
        .self_signed(&key)
        .unwrap();
    Certificate::from_der(cert.der().to_vec())
}

fn write_bundle(certs: &[Certificate]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for cert in certs {
        writeln!(file, "{}", cert.to_pem()).unwrap();
    }
    file.flush().unwrap();
    file
}

fn digests(certs: &[Certificate]) -> HashSet<CertDigest> {
    certs.iter().map(Certificate::digest).collect()
}

#[tokio::test]
async fn test_empty_config_defaults_to_system_roots() {
    let registry = ProviderRegistry::builtin();
    let store = TrustStore::new(&registry, &[]).await.unwrap();

    let system = SystemRoots.resolve(&HashMap::new()).await.unwrap();
    assert_eq!(digests(&store.certificates()), digests(&system));
}

#[tokio::test]
async fn test_file_definitions_load_and_dedup() {
    let a = generate_cert("store-a.example.com");
    let b = generate_cert("store-b.example.com");
    let bundle = write_bundle(&[a.clone(), b.clone(), a.clone()]);

    let registry = ProviderRegistry::builtin();
    let defs = vec![
        RootDefinition::new("file").with("source", bundle.path().to_str().unwrap())
    ];
    let store = TrustStore::new(&registry, &defs).await.unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(digests(&store.certificates()), digests(&[a, b]));
}

#[tokio::test]
async fn test_construction_is_all_or_nothing() {
    let bundle = write_bundle(&[generate_cert("valid.example.com")]);

    let registry = ProviderRegistry::builtin();
    let defs = vec![
        RootDefinition::new("file").with("source", bundle.path().to_str().unwrap()),
        RootDefinition::new("file").with("source", "/nonexistent/trust-bundle.pem"),
    ];

    let err = TrustStore::new(&registry, &defs).await.unwrap_err();
    assert!(matches!(err, RootsError::Io { .. }));
}

#[tokio::test]
async fn test_only_unrecognized_types_is_an_explicit_error() {
    let registry = ProviderRegistry::builtin();
    let defs = vec![RootDefinition::new("vault").with("path", "secret/ca")];

    let err = TrustStore::new(&registry, &defs).await.unwrap_err();
    assert!(matches!(err, RootsError::NoSupportedProvider));
}

#[tokio::test]
async fn test_unrecognized_types_are_skipped_next_to_valid_ones() {
    let cert = generate_cert("mixed.example.com");
    let bundle = write_bundle(&[cert.clone()]);

    let registry = ProviderRegistry::builtin();
    let defs = vec![
        RootDefinition::new("vault").with("path", "secret/ca"),
        RootDefinition::new("file").with("source", bundle.path().to_str().unwrap()),
    ];
    let store = TrustStore::new(&registry, &defs).await.unwrap();

    assert_eq!(digests(&store.certificates()), digests(&[cert]));
}

#[tokio::test]
async fn test_file_provider_requires_source_metadata() {
    let registry = ProviderRegistry::builtin();
    let defs = vec![RootDefinition::new("file")];

    let err = TrustStore::new(&registry, &defs).await.unwrap_err();
    assert!(matches!(
        err,
        RootsError::MissingMetadata {
            provider: "file",
            key: "source"
        }
    ));
}

#[tokio::test]
async fn test_malformed_bundle_is_a_hard_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "this is not a certificate bundle").unwrap();
    file.flush().unwrap();

    let registry = ProviderRegistry::builtin();
    let defs = vec![
        RootDefinition::new("file").with("source", file.path().to_str().unwrap())
    ];

    let err = TrustStore::new(&registry, &defs).await.unwrap_err();
    assert!(matches!(err, RootsError::Cert(_)));
}
