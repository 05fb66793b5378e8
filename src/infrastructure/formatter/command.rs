//! External command formatter
//!
//! Pipes module text through a program such as
//! `prettier --stdin-filepath {path}` and returns its stdout. The program
//! resolves its own style configuration; [`StyleConfig`] is not passed on.

use std::io;
use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use crate::config::StyleConfig;
use crate::domain::ports::{FormatError, ModuleFormatter};
use crate::error::ConfigError;

/// Placeholder replaced with the target path in command arguments
pub const PATH_PLACEHOLDER: &str = "{path}";

/// Formatter backed by an external program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFormatter {
    program: String,
    args: Vec<String>,
}

impl CommandFormatter {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Split a shell-style command line into program and arguments
    pub fn parse(command_line: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::FormatterCommand {
            value: command_line.to_string(),
        };
        let mut words = shlex::split(command_line).ok_or_else(invalid)?;
        if words.is_empty() {
            return Err(invalid());
        }
        let program = words.remove(0);
        Ok(Self::new(program, words))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn args_for(&self, path: &Path) -> Vec<String> {
        let path = path.display().to_string();
        self.args
            .iter()
            .map(|arg| arg.replace(PATH_PLACEHOLDER, &path))
            .collect()
    }
}

#[async_trait]
impl ModuleFormatter for CommandFormatter {
    fn name(&self) -> &str {
        &self.program
    }

    async fn format(
        &self,
        source: &str,
        path: &Path,
        _style: &StyleConfig,
    ) -> Result<String, FormatError> {
        let args = self.args_for(path);
        debug!(program = %self.program, ?args, "running external formatter");

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| FormatError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let stdin = child.stdin.take();
        let input = source.as_bytes();
        let feed = async move {
            if let Some(mut stdin) = stdin {
                stdin.write_all(input).await?;
                stdin.shutdown().await?;
            }
            Ok::<(), io::Error>(())
        };

        let (fed, output) = tokio::join!(feed, child.wait_with_output());
        let output = output.map_err(|source| FormatError::Spawn {
            program: self.program.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(FormatError::Command {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        // A program that exits early without reading stdin closes the pipe
        if let Err(e) = fed {
            if e.kind() != io::ErrorKind::BrokenPipe {
                return Err(FormatError::Spawn {
                    program: self.program.clone(),
                    source: e,
                });
            }
        }

        String::from_utf8(output.stdout).map_err(|_| FormatError::Utf8 {
            program: self.program.clone(),
        })
    }
}
