//! Domain Ports (Interfaces)
//!
//! Traits at the boundary of the domain layer. The infrastructure layer
//! provides the implementations.

pub mod formatter;

pub use formatter::{FormatError, ModuleFormatter};
