//! Generate use case: barrel modules for every configured asset class

mod context;
mod emitter;
mod pipeline;
mod result;
mod setup;
mod use_case;

pub use context::GenerateContext;
pub use emitter::{CodeEmitter, EmittedModule};
pub use pipeline::run_pipeline;
pub use result::{GenerateReport, GeneratedIndex, ModuleStatus, RunResult};
pub use setup::{prepare_run, PreparedRun};
pub use use_case::GenerateUseCase;
