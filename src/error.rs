use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FsMetaError {
    #[error("Cannot open directory: {}", .0.display())]
    DirectoryOpen(PathBuf),

    #[error("Failed to stat entry: {}", .0.display())]
    Stat(PathBuf),

    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
