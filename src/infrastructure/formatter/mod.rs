//! ModuleFormatter implementations

mod builtin;
mod command;

use std::sync::Arc;

pub use builtin::{format_module, BuiltinFormatter};
pub use command::{CommandFormatter, PATH_PLACEHOLDER};

use crate::config::{FormatterKind, GeneratorConfig};
use crate::domain::ports::ModuleFormatter;
use crate::error::ConfigError;

/// Build the formatter selected by `config`
pub fn formatter_for(config: &GeneratorConfig) -> Result<Arc<dyn ModuleFormatter>, ConfigError> {
    match config.formatter {
        FormatterKind::Builtin => Ok(Arc::new(BuiltinFormatter::new())),
        FormatterKind::Command => Ok(Arc::new(CommandFormatter::parse(&config.formatter_cmd)?)),
    }
}
