//! # Anchora Node
//!
//! The HTTP-serving side of the Anchora CA toolkit. A node answers the info
//! protocol for one or more named signing authorities, advertises the trust
//! anchors it aggregated at startup, and sources its own key material
//! through the install-once key-store handle.
//!
//! ## API endpoints
//!
//! - `GET /health` — liveness check
//! - `POST /api/v1/cfssl/info` — resolve a signing authority's certificate
//!   material (single-signer or label-routed, depending on how the router
//!   was built)

pub mod api;
pub mod config;
pub mod keystore;
pub mod signer;

pub use api::handlers::{InfoState, MultiInfoState, TrustAnchorSource};
pub use api::{info_router, multi_info_router};
pub use config::{Config, ConfigError};
pub use keystore::FileKeyStore;
pub use signer::KeyStoreSigner;
