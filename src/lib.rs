//! Barrelgen - asset barrel module generator
//!
//! Scans asset directories for SVG files and writes an `index.ts` into each
//! one that re-exports every asset as a named React component. Each asset
//! class runs as its own pipeline; a failure in one class never stops the
//! others.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod project_root;

// Re-exports for convenience
pub use application::{GenerateContext, GenerateReport, GenerateUseCase, ModuleStatus, RunResult};
pub use config::{GeneratorConfig, StyleConfig};
pub use domain::entities::AssetClass;
pub use domain::value_objects::NamingRule;
pub use error::{BarrelError, BarrelResult};
