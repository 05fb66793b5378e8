//! Asset class pipeline: scan, derive identifiers, emit

use tracing::{debug, info, warn};

use crate::domain::entities::{AssetClass, AssetFile, INDEX_FILE_NAME};
use crate::domain::value_objects::ContentHash;
use crate::error::PipelineError;

use super::context::GenerateContext;
use super::emitter::CodeEmitter;
use super::result::{GeneratedIndex, ModuleStatus, RunResult};

/// Run the full pipeline for `class`. Never panics on pipeline errors;
/// they are returned inside the [`RunResult`].
pub async fn run_pipeline(class: AssetClass, ctx: GenerateContext) -> RunResult {
    let mut files = 0;
    let outcome = generate_index(&class, &ctx, &mut files).await;

    match &outcome {
        Ok(index) => info!(
            class = class.name(),
            files,
            status = index.status.label(),
            "generated index"
        ),
        Err(e) => info!(class = class.name(), files, error = %e, "pipeline failed"),
    }

    RunResult {
        class: class.name().to_string(),
        files,
        outcome,
    }
}

async fn generate_index(
    class: &AssetClass,
    ctx: &GenerateContext,
    files: &mut usize,
) -> Result<GeneratedIndex, PipelineError> {
    let dir = ctx.scanner.dir_for(class.pattern());
    let target = dir.join(INDEX_FILE_NAME);
    let Some(paths) = ctx.scanner.enumerate(class.pattern()).await? else {
        debug!(class = class.name(), dir = %dir.display(), "skipping missing directory");
        return Ok(GeneratedIndex {
            path: target,
            status: ModuleStatus::DirectoryMissing,
        });
    };

    // `None` when no index existed; an unreadable one still counts as existing
    let previous = match ctx.fs.read_optional(&target).await {
        Ok(content) => content.map(|content| Some(ContentHash::of(&content))),
        Err(e) => {
            warn!(
                class = class.name(),
                path = %target.display(),
                error = %e,
                "cannot read previous index"
            );
            Some(None)
        }
    };

    let mut emitter = CodeEmitter::new(class.name(), &dir, ctx);
    for path in paths {
        let file = AssetFile::from_path(&path, class.naming())
            .map_err(|source| PipelineError::Transform { file: path, source })?;
        emitter.append(&file).await?;
        *files += 1;
    }

    let emitted = emitter.finish().await?;
    let hash = ContentHash::of(&emitted.content);
    debug!(class = class.name(), hash = hash.short(), "module content");

    let status = match previous {
        None => ModuleStatus::Created,
        Some(Some(prev)) if prev == hash => ModuleStatus::Unchanged,
        Some(_) => ModuleStatus::Updated,
    };

    Ok(GeneratedIndex {
        path: emitted.path,
        status,
    })
}
