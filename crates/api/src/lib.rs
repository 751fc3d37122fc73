pub mod error;
pub mod models;
pub mod presenter;
pub mod workspace;

// Re-export commonly used types
pub use error::{ApiError, ApiResult};
pub use models::*;
pub use presenter::StatusPresenter;
pub use workspace::Workspace;
