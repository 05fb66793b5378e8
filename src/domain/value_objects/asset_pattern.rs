//! Asset pattern value object
//!
//! A glob such as `src/assets/icons/*.svg`, relative to the project root,
//! split into a literal directory and a file-name glob.

use std::fmt;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};

use crate::error::ConfigError;

const GLOB_META: &[char] = &['*', '?', '[', ']', '{', '}'];

const FILE_MATCH: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// File-name glob rooted in one literal directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPattern {
    raw: String,
    dir: PathBuf,
    file_glob: Pattern,
}

impl AssetPattern {
    /// Parse `raw`. Wildcards are only allowed in the last path component.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidPattern {
            pattern: raw.to_string(),
            reason: reason.to_string(),
        };

        let normalized = raw.replace('\\', "/");
        let (dir, file) = match normalized.rsplit_once('/') {
            Some((dir, file)) => (dir, file),
            None => ("", normalized.as_str()),
        };

        if file.is_empty() {
            return Err(invalid("missing file name pattern"));
        }
        if dir.contains(GLOB_META) {
            return Err(invalid("wildcards are only supported in the file name"));
        }
        if Path::new(dir).is_absolute() {
            return Err(invalid("pattern must be relative to the project root"));
        }

        let file_glob = Pattern::new(file).map_err(|e| invalid(&e.to_string()))?;

        Ok(Self {
            raw: raw.to_string(),
            dir: PathBuf::from(dir),
            file_glob,
        })
    }

    /// Directory part, relative to the project root
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Match a directory entry name. Dotfiles only match a glob that
    /// itself starts with `.`, as in a shell glob.
    pub fn matches_file_name(&self, name: &str) -> bool {
        self.file_glob.matches_with(name, FILE_MATCH)
    }
}

impl fmt::Display for AssetPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
