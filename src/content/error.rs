//! Content loading errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading posts. Every variant aborts the whole load.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid front-matter in {path:?}: {source}")]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Post {path:?} has no title")]
    MissingTitle { path: PathBuf },

    #[error("Post loading task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ContentError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = ContentError> = std::result::Result<T, E>;
