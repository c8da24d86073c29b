//! API request handlers

pub mod info;

pub use info::{info, multi_info, InfoState, MultiInfoState, TrustAnchorSource};
