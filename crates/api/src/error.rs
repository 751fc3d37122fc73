use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ApiError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ApiError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
