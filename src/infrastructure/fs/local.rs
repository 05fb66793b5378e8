//! Local File System Implementation
//!
//! Atomic writes and optional reads for generated modules. Blocking calls
//! run on tokio's blocking pool so pipeline tasks yield while waiting.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// Local file system access used by the emitter
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }

    /// Replace `path` with `content` in one step.
    ///
    /// The content goes to a temp file in the same directory which is then
    /// renamed over the target, so readers never observe a partial file.
    pub async fn write_atomic(&self, path: &Path, content: &str) -> io::Result<()> {
        let path = path.to_path_buf();
        let content = content.to_owned();
        tokio::task::spawn_blocking(move || atomic_write(&path, content.as_bytes()))
            .await
            .map_err(io::Error::other)?
    }

    /// Read `path`, treating a missing file as `None`
    pub async fn read_optional(&self, path: &Path) -> io::Result<Option<String>> {
        match tokio::fs::read_to_string(path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Write content to a file atomically (tempfile + rename)
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = parent_dir(path);
    let mut tmp = NamedTempFile::new_in(&dir)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
