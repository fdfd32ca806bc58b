use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("{backend} backend unavailable: {reason}")]
    BackendUnavailable {
        backend: &'static str,
        reason: String,
    },

    #[error("drawing failed: {0}")]
    Draw(String),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode diagram data: {0}")]
    Encode(#[from] serde_json::Error),
}

impl RenderError {
    pub fn draw(err: impl std::fmt::Display) -> Self {
        Self::Draw(err.to_string())
    }
}
