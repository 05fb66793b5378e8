//! Code emitter
//!
//! Appends one export line per asset and rewrites `index.ts` after every
//! line. Each rewrite formats the whole accumulated module and replaces
//! the file atomically, so the file on disk is always a complete module
//! for some prefix of the scanned assets.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::trace;

use crate::config::StyleConfig;
use crate::domain::entities::{AssetFile, GeneratedModule};
use crate::domain::ports::ModuleFormatter;
use crate::error::{EmitError, EmitErrorKind};
use crate::infrastructure::LocalFs;

use super::context::GenerateContext;

/// Final state of a module once every line was written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedModule {
    pub path: PathBuf,
    pub lines: usize,
    pub content: String,
}

/// Emitter for one asset class
pub struct CodeEmitter {
    class: String,
    module: GeneratedModule,
    formatter: Arc<dyn ModuleFormatter>,
    style: Arc<StyleConfig>,
    fs: LocalFs,
    written: Option<String>,
}

impl CodeEmitter {
    /// Emitter writing `index.ts` inside `dir`
    pub fn new(class: impl Into<String>, dir: &Path, ctx: &GenerateContext) -> Self {
        Self {
            class: class.into(),
            module: GeneratedModule::in_dir(dir),
            formatter: Arc::clone(&ctx.formatter),
            style: Arc::clone(&ctx.style),
            fs: ctx.fs,
            written: None,
        }
    }

    pub fn module(&self) -> &GeneratedModule {
        &self.module
    }

    /// Append the export for `file` and rewrite the module.
    ///
    /// On failure the line is not kept, and the file on disk still holds
    /// the previously written module.
    pub async fn append(&mut self, file: &AssetFile) -> Result<(), EmitError> {
        self.module.push(file).map_err(|kind| self.error(kind))?;
        if let Err(e) = self.persist().await {
            self.module.pop();
            return Err(e);
        }
        trace!(class = %self.class, identifier = file.identifier(), "appended export");
        Ok(())
    }

    /// Complete the module. A module with no lines is written here.
    pub async fn finish(mut self) -> Result<EmittedModule, EmitError> {
        if self.written.is_none() {
            self.persist().await?;
        }
        Ok(EmittedModule {
            path: self.module.target().to_path_buf(),
            lines: self.module.len(),
            content: self.written.unwrap_or_default(),
        })
    }

    async fn persist(&mut self) -> Result<(), EmitError> {
        let target = self.module.target();
        let source = self.module.source_text();

        let formatted = self
            .formatter
            .format(&source, target, &self.style)
            .await
            .map_err(|e| self.error(e.into()))?;

        self.fs
            .write_atomic(target, &formatted)
            .await
            .map_err(|source| {
                self.error(EmitErrorKind::Write {
                    path: target.to_path_buf(),
                    source,
                })
            })?;

        self.written = Some(formatted);
        Ok(())
    }

    fn error(&self, kind: EmitErrorKind) -> EmitError {
        EmitError {
            class: self.class.clone(),
            kind,
        }
    }
}
