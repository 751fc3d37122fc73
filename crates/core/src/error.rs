use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnipscopeError {
    #[error("Watcher error: {0}")]
    Watch(#[from] notify::Error),
    #[error("Invalid directive pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, SnipscopeError>;
