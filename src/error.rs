//! Error types for barrelgen
//!
//! Uses `thiserror` for library errors. Every pipeline error is local to the
//! asset class that produced it; only [`BarrelError`] aborts a whole run.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::ports::FormatError;
use crate::domain::value_objects::TransformError;

/// Result type alias for barrelgen setup operations
pub type BarrelResult<T> = Result<T, BarrelError>;

/// Top-level error type for everything that aborts a run before any
/// pipeline starts
#[derive(Error, Debug)]
pub enum BarrelError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Project root cannot be inspected
    #[error("cannot access project root {path}")]
    ProjectRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Setup errors raised before any pipeline starts
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Style configuration exists but cannot be read
    #[error("cannot read style config {path}")]
    StyleRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Style configuration is not valid JSON or has wrongly typed values
    #[error("invalid style config {path}: {message}")]
    StyleParse { path: PathBuf, message: String },

    /// Asset pattern cannot be split into a directory and a file glob
    #[error("invalid asset pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// `BARRELGEN_FORMATTER` names an unknown formatter
    #[error("unknown formatter '{value}' (expected 'builtin' or 'command')")]
    UnknownFormatter { value: String },

    /// Project root exists but is not a directory
    #[error("project root {path} is not a directory")]
    InvalidRoot { path: PathBuf },

    /// `BARRELGEN_FORMATTER_CMD` cannot be split into a program and arguments
    #[error("invalid formatter command '{value}'")]
    FormatterCommand { value: String },
}

/// Directory enumeration failed
#[derive(Error, Debug)]
#[error("cannot read asset directory {dir}: {source}")]
pub struct ScanError {
    pub dir: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Emitting the barrel module for one asset class failed
#[derive(Error, Debug)]
#[error("failed to emit index for '{class}': {kind}")]
pub struct EmitError {
    pub class: String,
    #[source]
    pub kind: EmitErrorKind,
}

/// Underlying cause of an [`EmitError`]
#[derive(Error, Debug)]
pub enum EmitErrorKind {
    /// Formatter rejected the accumulated module text
    #[error("{0}")]
    Format(#[from] FormatError),

    /// Writing the module file failed
    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Two files in the same class map to the same export name
    #[error("identifier '{identifier}' is exported by both {first} and {second}")]
    DuplicateIdentifier {
        identifier: String,
        first: String,
        second: String,
    },
}

/// Failure of a single asset class pipeline
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("{0}")]
    Scan(#[from] ScanError),

    /// A file name could not be turned into an identifier
    #[error("cannot derive identifier for {file}: {source}")]
    Transform {
        file: PathBuf,
        #[source]
        source: TransformError,
    },

    #[error("{0}")]
    Emit(#[from] EmitError),

    /// The pipeline task ended without producing a result
    #[error("pipeline for '{class}' aborted: {message}")]
    Aborted { class: String, message: String },
}
