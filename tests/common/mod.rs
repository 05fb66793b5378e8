//! Common test utilities for barrelgen CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project directory plus helpers to run the binary
//! - Assertion macros: `assert_output_contains!`, `assert_index_eq!`

pub mod assertions;
pub mod env;

#[allow(unused_imports)]
pub use assertions::*;
pub use env::*;
