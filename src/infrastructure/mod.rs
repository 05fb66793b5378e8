//! Infrastructure Layer
//!
//! Concrete implementations of domain ports. All I/O lives here.
//!
//! ## Structure
//!
//! - `fs/` - directory scanner and atomic writer
//! - `formatter/` - builtin and external-command formatters

pub mod formatter;
pub mod fs;

pub use formatter::{formatter_for, BuiltinFormatter, CommandFormatter};
pub use fs::{DirScanner, LocalFs};
