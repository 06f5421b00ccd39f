use thiserror::Error;

/// Failures surfaced by a [`KeyValueStore`](crate::KeyValueStore) or by
/// encoding a value for it.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed for `{key}`: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode `{key}`: {message}")]
    Serialize { key: String, message: String },
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub(crate) fn io(key: &str, source: std::io::Error) -> Self {
        Self::Io {
            key: key.to_string(),
            source,
        }
    }

    pub(crate) fn serialize(key: &str, err: impl std::fmt::Display) -> Self {
        Self::Serialize {
            key: key.to_string(),
            message: err.to_string(),
        }
    }
}

/// Why a stored profile record could not be read back.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("invalid profile data: {0}")]
    Parse(#[from] serde_json::Error),
}
