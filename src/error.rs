use std::path::PathBuf;

use thiserror::Error;

use crate::generator::GenerationError;
use crate::session::IdeaError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    Idea(#[from] IdeaError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("Typst compilation failed: {0}")]
    Typst(String),

    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}
