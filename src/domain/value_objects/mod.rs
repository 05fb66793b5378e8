//! Domain Value Objects
//!
//! Immutable value types shared by entities and services.

mod asset_pattern;
mod content_hash;
mod naming;

pub use asset_pattern::AssetPattern;
pub use content_hash::ContentHash;
pub use naming::{is_identifier, NamingRule, TransformError};
