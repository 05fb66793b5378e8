//! Domain Layer
//!
//! Pure types and rules without I/O.
//!
//! ## Structure
//!
//! - `entities/` - AssetClass, AssetFile, GeneratedModule
//! - `value_objects/` - NamingRule, AssetPattern, ContentHash
//! - `ports/` - interfaces implemented by the infrastructure layer

pub mod entities;
pub mod ports;
pub mod value_objects;
