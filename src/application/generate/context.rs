//! Shared, immutable inputs of a generate run

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::StyleConfig;
use crate::domain::ports::ModuleFormatter;
use crate::infrastructure::{BuiltinFormatter, DirScanner, LocalFs};

/// Everything a pipeline needs besides its own asset class.
///
/// Cloned into each pipeline task. The style and formatter are shared
/// read-only through `Arc`.
#[derive(Clone)]
pub struct GenerateContext {
    pub scanner: DirScanner,
    pub formatter: Arc<dyn ModuleFormatter>,
    pub style: Arc<StyleConfig>,
    pub fs: LocalFs,
}

impl GenerateContext {
    pub fn new(
        root: impl Into<PathBuf>,
        formatter: Arc<dyn ModuleFormatter>,
        style: StyleConfig,
    ) -> Self {
        Self {
            scanner: DirScanner::new(root),
            formatter,
            style: Arc::new(style),
            fs: LocalFs::new(),
        }
    }

    /// Context using the builtin formatter
    pub fn builtin(root: impl Into<PathBuf>, style: StyleConfig) -> Self {
        Self::new(root, Arc::new(BuiltinFormatter::new()), style)
    }
}

impl std::fmt::Debug for GenerateContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerateContext")
            .field("root", &self.scanner.root())
            .field("formatter", &self.formatter.name())
            .field("style", &self.style)
            .finish()
    }
}
