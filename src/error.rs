use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QStylerError {
    #[error("Style sheet error: {0}")]
    Qss(#[from] qss::QssError),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Theme JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No theme named {0:?}")]
    UnknownTheme(String),
}

impl QStylerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, QStylerError>;
