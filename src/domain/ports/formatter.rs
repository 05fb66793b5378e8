//! ModuleFormatter port - turns accumulated module text into its final form
//!
//! Formatting is a suspension point of a pipeline, so the port is async.

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::StyleConfig;

/// Formatter failures
#[derive(Error, Debug)]
pub enum FormatError {
    /// Text is not a sequence of re-export statements
    #[error("syntax error at line {line}: {message}")]
    Syntax { line: usize, message: String },

    /// External formatter could not be started
    #[error("cannot run formatter '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// External formatter exited unsuccessfully
    #[error("formatter '{program}' exited with {status}: {stderr}")]
    Command {
        program: String,
        status: String,
        stderr: String,
    },

    /// External formatter produced non-UTF-8 output
    #[error("formatter '{program}' produced invalid UTF-8 output")]
    Utf8 { program: String },
}

/// Abstract formatter
///
/// Implementations:
/// - `BuiltinFormatter` - in-process printer for re-export statements
/// - `CommandFormatter` - external program fed on stdin
#[async_trait]
pub trait ModuleFormatter: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &str;

    /// Format `source`, which will be written to `path`.
    async fn format(
        &self,
        source: &str,
        path: &Path,
        style: &StyleConfig,
    ) -> Result<String, FormatError>;
}
