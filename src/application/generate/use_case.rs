//! Generate Use Case
//!
//! Fans out one pipeline task per asset class and collects every result.
//! Pipelines fail independently: an error in one class never cancels the
//! others.

use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::domain::entities::AssetClass;
use crate::error::PipelineError;

use super::context::GenerateContext;
use super::pipeline::run_pipeline;
use super::result::{GenerateReport, RunResult};

/// Generate use case
pub struct GenerateUseCase {
    ctx: GenerateContext,
}

impl GenerateUseCase {
    pub fn new(ctx: GenerateContext) -> Self {
        Self { ctx }
    }

    /// Run all `classes` concurrently and wait for every one of them.
    ///
    /// Results come back in the order of `classes`. Must be called inside
    /// a tokio runtime.
    pub async fn execute(&self, classes: &[AssetClass]) -> GenerateReport {
        let mut set = JoinSet::new();
        for (index, class) in classes.iter().cloned().enumerate() {
            let ctx = self.ctx.clone();
            set.spawn(async move { (index, run_pipeline(class, ctx).await) });
        }

        let mut slots: Vec<Option<RunResult>> = classes.iter().map(|_| None).collect();
        let mut abort_message = None;
        while let Some(joined) = set.join_next().await {
            match joined {
                Ok((index, result)) => {
                    debug!(class = %result.class, "pipeline joined");
                    slots[index] = Some(result);
                }
                Err(e) => {
                    warn!(error = %e, "pipeline task did not complete");
                    abort_message = Some(e.to_string());
                }
            }
        }

        let results = slots
            .into_iter()
            .zip(classes)
            .map(|(slot, class)| {
                slot.unwrap_or_else(|| RunResult {
                    class: class.name().to_string(),
                    files: 0,
                    outcome: Err(PipelineError::Aborted {
                        class: class.name().to_string(),
                        message: abort_message
                            .clone()
                            .unwrap_or_else(|| "task ended without a result".to_string()),
                    }),
                })
            })
            .collect();

        GenerateReport::new(results)
    }
}
