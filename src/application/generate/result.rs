//! Generate Result
//!
//! Result types for a generate run.

use std::path::PathBuf;

use crate::error::PipelineError;

/// What happened to a class's `index.ts`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleStatus {
    /// No module existed before this run
    Created,
    /// Module content changed
    Updated,
    /// Module regenerated byte-identical
    Unchanged,
    /// Asset directory does not exist; nothing written
    DirectoryMissing,
}

impl ModuleStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ModuleStatus::Created => "created",
            ModuleStatus::Updated => "updated",
            ModuleStatus::Unchanged => "unchanged",
            ModuleStatus::DirectoryMissing => "no directory",
        }
    }
}

/// Successful pipeline outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIndex {
    pub path: PathBuf,
    pub status: ModuleStatus,
}

/// Outcome of one asset class pipeline
#[derive(Debug)]
pub struct RunResult {
    pub class: String,
    /// Files whose export line was written before the pipeline ended
    pub files: usize,
    pub outcome: Result<GeneratedIndex, PipelineError>,
}

impl RunResult {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn error(&self) -> Option<&PipelineError> {
        self.outcome.as_ref().err()
    }

    pub fn generated(&self) -> Option<&GeneratedIndex> {
        self.outcome.as_ref().ok()
    }
}

/// All pipeline outcomes of a run, in configuration order
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub results: Vec<RunResult>,
}

impl GenerateReport {
    pub fn new(results: Vec<RunResult>) -> Self {
        Self { results }
    }

    /// True only when every pipeline succeeded
    pub fn is_success(&self) -> bool {
        self.results.iter().all(RunResult::is_success)
    }

    pub fn failures(&self) -> impl Iterator<Item = &RunResult> {
        self.results.iter().filter(|r| !r.is_success())
    }

    pub fn get(&self, class: &str) -> Option<&RunResult> {
        self.results.iter().find(|r| r.class == class)
    }

    pub fn total_files(&self) -> usize {
        self.results.iter().map(|r| r.files).sum()
    }
}
