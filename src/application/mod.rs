//! Application Layer
//!
//! Use cases that orchestrate domain types and infrastructure.
//!
//! ## Use Cases
//!
//! - `prepare_run` - validate the project root and load settings
//! - `GenerateUseCase` - scan every asset class and emit its barrel module

pub mod generate;

pub use generate::{
    prepare_run, CodeEmitter, GenerateContext, GenerateReport, GenerateUseCase, GeneratedIndex,
    ModuleStatus, PreparedRun, RunResult,
};
