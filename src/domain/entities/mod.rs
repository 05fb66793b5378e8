//! Domain Entities
//!
//! Core domain objects: asset classes, asset files and generated modules.

mod asset_class;
mod asset_file;
mod generated_module;

pub use asset_class::{AssetClass, ICONS_PATTERN, JOBS_PATTERN};
pub use asset_file::AssetFile;
pub use generated_module::{export_line, GeneratedModule, EMPTY_MODULE, INDEX_FILE_NAME};
