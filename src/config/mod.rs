//! Configuration
//!
//! Precedence, highest first:
//! 1. Environment variables (`BARRELGEN_*`, `NO_COLOR`)
//! 2. Style configuration (`.prettierrc` at the project root)
//! 3. Built-in defaults

mod loader;
mod types;

pub use loader::{
    from_env, load_style_with_warnings, with_env_overrides, with_lenient_env_overrides,
    ConfigWarning, STYLE_CONFIG_FILE,
};
pub use types::{
    EndOfLine, FormatterKind, GeneratorConfig, StyleConfig, TrailingComma, DEFAULT_FORMATTER_CMD,
};
