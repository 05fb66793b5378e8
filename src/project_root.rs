use std::path::{Path, PathBuf};

use crate::config::STYLE_CONFIG_FILE;

/// Discover the project root directory from an invocation directory.
///
/// Heuristics (first match wins, walking upward from `start`):
/// - `package.json` (the package that owns the assets)
/// - `.prettierrc` (style configuration location)
/// - `.git/` or `.git` file (git repo root / worktree)
///
/// Falls back to `start` when no markers are found.
pub fn discover_project_root(start: &Path) -> PathBuf {
    for dir in start.ancestors() {
        if dir.join("package.json").is_file() {
            return dir.to_path_buf();
        }
        if dir.join(STYLE_CONFIG_FILE).is_file() {
            return dir.to_path_buf();
        }
        if dir.join(".git").exists() {
            return dir.to_path_buf();
        }
    }
    start.to_path_buf()
}

/// Root to generate in: the configured override, else the discovered root.
pub fn resolve_project_root(configured: Option<&Path>, cwd: &Path) -> PathBuf {
    match configured {
        Some(root) if root.is_absolute() => root.to_path_buf(),
        Some(root) => cwd.join(root),
        None => discover_project_root(cwd),
    }
}
