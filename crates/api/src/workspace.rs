use crate::error::ApiResult;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// The host environment as seen by the scanner: the file under edit and
/// the templating files around it.
#[async_trait]
pub trait Workspace: Send + Sync {
    /// The file currently being edited, or `None` when nothing is focused.
    async fn active_file(&self) -> Option<PathBuf>;

    /// Every file under the workspace carrying `extension`.
    ///
    /// Discovery is best effort: unreadable subtrees contribute nothing.
    async fn list_files(&self, extension: &str) -> Vec<PathBuf>;

    /// Full text of a single file.
    async fn read_file_text(&self, path: &Path) -> ApiResult<String>;

    /// Project boundary used to render result paths.
    fn root(&self) -> Option<PathBuf>;
}
