//! GeneratedModule entity - the barrel module for one asset class
//!
//! Holds export lines in scan order. Lines are never reordered; a line is
//! only ever removed again by [`GeneratedModule::pop`] when persisting it
//! failed.

use std::path::{Path, PathBuf};

use crate::domain::entities::AssetFile;
use crate::error::EmitErrorKind;

/// File name of every generated barrel module
pub const INDEX_FILE_NAME: &str = "index.ts";

/// Text of a module with zero re-exports
pub const EMPTY_MODULE: &str = "export {};\n";

/// Render the re-export statement for one asset.
pub fn export_line(identifier: &str, file_name: &str) -> String {
    format!("export {{ ReactComponent as {identifier} }} from './{file_name}';")
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ExportEntry {
    identifier: String,
    file_name: String,
    line: String,
}

/// Accumulated export lines plus the path they are written to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModule {
    target: PathBuf,
    entries: Vec<ExportEntry>,
}

impl GeneratedModule {
    /// Module written to `index.ts` inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            target: dir.join(INDEX_FILE_NAME),
            entries: Vec::new(),
        }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Append the export line for `file`.
    ///
    /// Fails without modifying the module if another file already exports
    /// the same identifier.
    pub fn push(&mut self, file: &AssetFile) -> Result<(), EmitErrorKind> {
        if let Some(existing) = self
            .entries
            .iter()
            .find(|e| e.identifier == file.identifier())
        {
            return Err(EmitErrorKind::DuplicateIdentifier {
                identifier: file.identifier().to_string(),
                first: existing.file_name.clone(),
                second: file.file_name().to_string(),
            });
        }

        self.entries.push(ExportEntry {
            identifier: file.identifier().to_string(),
            file_name: file.file_name().to_string(),
            line: export_line(file.identifier(), file.file_name()),
        });
        Ok(())
    }

    /// Remove the most recently appended line
    pub fn pop(&mut self) -> Option<String> {
        self.entries.pop().map(|e| e.line)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.line.as_str())
    }

    /// Unformatted module text: every line followed by a newline.
    ///
    /// A module without lines renders as [`EMPTY_MODULE`].
    pub fn source_text(&self) -> String {
        if self.entries.is_empty() {
            return EMPTY_MODULE.to_string();
        }
        let mut out = String::new();
        for line in self.lines() {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}
