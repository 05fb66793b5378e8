//! Everything that must succeed before any pipeline starts

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{load_style_with_warnings, ConfigWarning, GeneratorConfig, STYLE_CONFIG_FILE};
use crate::domain::entities::AssetClass;
use crate::error::{BarrelError, BarrelResult, ConfigError};
use crate::infrastructure::formatter_for;

use super::context::GenerateContext;

/// A validated run, ready to hand to [`super::GenerateUseCase`]
#[derive(Debug)]
pub struct PreparedRun {
    pub root: PathBuf,
    pub classes: Vec<AssetClass>,
    pub context: GenerateContext,
    pub warnings: Vec<ConfigWarning>,
}

/// Validate the project root, load the style config and pick the formatter.
///
/// Any error here is fatal for the whole run.
pub fn prepare_run(root: &Path, config: &GeneratorConfig) -> BarrelResult<PreparedRun> {
    let metadata = std::fs::metadata(root).map_err(|source| BarrelError::ProjectRoot {
        path: root.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(ConfigError::InvalidRoot {
            path: root.to_path_buf(),
        }
        .into());
    }
    debug!(root = %root.display(), "resolved project root");

    let (style, warnings) = load_style_with_warnings(&root.join(STYLE_CONFIG_FILE))?;
    let formatter = formatter_for(config)?;
    debug!(formatter = formatter.name(), "selected formatter");
    let classes = AssetClass::defaults()?;

    Ok(PreparedRun {
        root: root.to_path_buf(),
        classes,
        context: GenerateContext::new(root, formatter, style),
        warnings,
    })
}
