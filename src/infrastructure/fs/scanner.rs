//! Directory scanner
//!
//! Enumerates regular files in an asset directory whose names match the
//! class's file glob, in lexical path order.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::entities::INDEX_FILE_NAME;
use crate::domain::value_objects::AssetPattern;
use crate::error::ScanError;

/// Scanner rooted at the project directory
#[derive(Debug, Clone)]
pub struct DirScanner {
    root: PathBuf,
}

impl DirScanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute directory that `pattern` scans
    pub fn dir_for(&self, pattern: &AssetPattern) -> PathBuf {
        self.root.join(pattern.dir())
    }

    /// List matching files, sorted.
    ///
    /// Returns `None` when the directory does not exist. Any other failure
    /// to read it is an error. The generated `index.ts` is never part of the
    /// result, even if the glob would match it.
    pub async fn enumerate(
        &self,
        pattern: &AssetPattern,
    ) -> Result<Option<Vec<PathBuf>>, ScanError> {
        let dir = self.dir_for(pattern);
        let scan_err = |source: io::Error| ScanError {
            dir: dir.clone(),
            source,
        };

        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(dir = %dir.display(), "asset directory missing, nothing to scan");
                return Ok(None);
            }
            Err(e) => return Err(scan_err(e)),
        };

        let mut matches = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(scan_err)? {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name == INDEX_FILE_NAME || !pattern.matches_file_name(&name) {
                continue;
            }

            // Follows symlinks, so a linked asset counts as a file. A dangling
            // link, or an entry removed since `read_dir`, is not a file.
            let metadata = match tokio::fs::metadata(entry.path()).await {
                Ok(metadata) => metadata,
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    debug!(path = %entry.path().display(), "skipping vanished entry");
                    continue;
                }
                Err(e) => return Err(scan_err(e)),
            };
            if !metadata.is_file() {
                continue;
            }
            matches.push(entry.path());
        }

        matches.sort();
        debug!(
            pattern = %pattern,
            count = matches.len(),
            "scanned asset directory"
        );
        Ok(Some(matches))
    }
}
