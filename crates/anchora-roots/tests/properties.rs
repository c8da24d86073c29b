//! Property-based tests for the trust-store dedup invariant
//!
//! For any sequence of `add_certs` calls, the store's certificate count must
//! equal the number of distinct content digests across everything added,
//! regardless of how the additions are grouped or how duplicates are
//! ordered.

use std::collections::HashSet;
use std::sync::OnceLock;

use proptest::prelude::*;

use anchora_core::Certificate;
use anchora_roots::TrustStore;

const POOL_SIZE: usize = 6;

fn cert_pool() -> &'static [Certificate] {
    static POOL: OnceLock<Vec<Certificate>> = OnceLock::new();
    POOL.get_or_init(|| {
        (0..POOL_SIZE)
            .map(|i| {
                let key = rcgen::KeyPair::generate().unwrap();
                let cert =
                    rcgen::CertificateParams::new(vec![format!("pool{i}.example.com")])
                        .unwrap()
                        .self_signed(&key)
                        .unwrap();
                Certificate::from_der(cert.der().to_vec())
            })
            .collect()
    })
}

proptest! {
    /// Store count equals the number of distinct digests, for any grouping
    #[test]
    fn prop_store_count_equals_distinct_digests(
        groups in prop::collection::vec(
            prop::collection::vec(0..POOL_SIZE, 0..12),
            1..8,
        ),
    ) {
        let pool = cert_pool();
        let store = TrustStore::empty();

        let mut distinct = HashSet::new();
        for group in &groups {
            let certs: Vec<Certificate> =
                group.iter().map(|&i| pool[i].clone()).collect();
            distinct.extend(group.iter().copied());
            store.add_certs(certs);
        }

        prop_assert_eq!(store.len(), distinct.len());
    }

    /// Re-encoding any stored certificate reproduces the digest it was
    /// stored under
    #[test]
    fn prop_pem_round_trip_is_digest_stable(index in 0..POOL_SIZE) {
        let cert = &cert_pool()[index];
        let reparsed = Certificate::from_pem(&cert.to_pem()).unwrap();
        prop_assert_eq!(reparsed.digest(), cert.digest());
    }
}
