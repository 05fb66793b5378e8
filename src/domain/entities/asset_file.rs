//! AssetFile entity - one matched asset and its export identifier

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{NamingRule, TransformError};

/// A scanned asset file. Read-only once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFile {
    path: PathBuf,
    file_name: String,
    identifier: String,
}

impl AssetFile {
    /// Derive the identifier for `path` from its stem using `naming`.
    ///
    /// Only the final extension is stripped: `icon.min.svg` has the stem
    /// `icon.min`.
    pub fn from_path(path: impl Into<PathBuf>, naming: NamingRule) -> Result<Self, TransformError> {
        let path = path.into();
        let file_name = path
            .file_name()
            .ok_or(TransformError::EmptyName)?
            .to_str()
            .ok_or(TransformError::NonUtf8)?
            .to_string();
        let stem = Path::new(&file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        let identifier = naming.transform(stem)?;

        Ok(Self {
            path,
            file_name,
            identifier,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Base name including extension, e.g. `arrow-up.svg`
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}
