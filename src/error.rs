use std::path::PathBuf;
use thiserror::Error;

/// Fatal pipeline errors. Every stage failure aborts the whole run;
/// there is no retry or partial-result recovery.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    #[error("external tool not found: {tool} (install it or point the matching environment variable at it)")]
    ToolNotFound { tool: String },

    #[error("{tool} exited with {}", .code.map_or_else(|| "no status (terminated by signal)".to_string(), |c| format!("status {c}")))]
    ToolFailed { tool: String, code: Option<i32> },

    #[error("{stage} did not produce expected file: {path}")]
    MissingOutput { stage: &'static str, path: PathBuf },

    #[error("invalid board file {path}: {reason}")]
    InvalidBoard { path: PathBuf, reason: String },

    #[error("invalid SVG {path}: {reason}")]
    InvalidSvg { path: PathBuf, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize board data: {0}")]
    Json(#[from] serde_json::Error),
}
