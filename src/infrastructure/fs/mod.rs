//! File System Implementations

mod local;
mod scanner;

pub use local::{atomic_write, LocalFs};
pub use scanner::DirScanner;
