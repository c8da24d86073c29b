//! # Anchora Roots
//!
//! Trust-anchor sourcing for the Anchora CA toolkit. A node declares where
//! its trust comes from as a list of root definitions (`{type, metadata}`);
//! each definition resolves through a registered [`RootProvider`] and the
//! results aggregate into a deduplicating [`TrustStore`].
//!
//! Built-in providers:
//!
//! - `system` — the platform trust store (tolerant of absence)
//! - `file` — a local PEM bundle (strict)
//! - `cfssl` — a peer CA's info endpoint over mutual TLS (strict), used to
//!   bootstrap trust between CA nodes
//!
//! Store construction is all-or-nothing: one failing provider aborts the
//! build, so a node never silently runs with fewer roots than configured.

pub mod error;
pub mod file;
pub mod provider;
pub mod remote;
pub mod store;
pub mod system;

pub use error::{Result, RootsError};
pub use file::FileRoots;
pub use provider::{ProviderRegistry, RootDefinition, RootProvider};
pub use remote::RemoteRoots;
pub use store::TrustStore;
pub use system::SystemRoots;
