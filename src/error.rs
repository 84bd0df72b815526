use std::path::PathBuf;

/// Errors raised by the indexing and lookup core.
#[derive(Debug, thiserror::Error)]
pub enum ManError {
    #[error("IO error on {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed manual page name: {0}")]
    MalformedName(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("Cache error on {}: {}", path.display(), source)]
    Cache {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ManError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManError::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the error only means a query had no match.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ManError::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, ManError>;
