//! Central API
//!
//! - `client`: RAPIDS rogue / suspect detections, paged
//! - `tokens`: access-token resolution and the on-disk token cache

pub mod client;
pub mod tokens;

pub use client::{CentralClient, DetectionSource};
pub use tokens::{resolve_access_token, TokenStore};
