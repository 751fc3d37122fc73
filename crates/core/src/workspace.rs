use async_trait::async_trait;
use ignore::WalkBuilder;
use snipscope_api::{ApiError, ApiResult, ScanConfig, Workspace};
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

/// Workspace backed by the local filesystem.
pub struct FsWorkspace {
    root: Option<PathBuf>,
    active_file: RwLock<Option<PathBuf>>,
    include_hidden: bool,
}

impl FsWorkspace {
    pub fn new(root: Option<PathBuf>, config: &ScanConfig) -> Self {
        Self {
            root,
            active_file: RwLock::new(None),
            include_hidden: config.include_hidden,
        }
    }

    pub async fn set_active_file(&self, path: Option<PathBuf>) {
        *self.active_file.write().await = path;
    }

    pub(crate) fn collect_paths(root: &Path, extension: &str, include_hidden: bool) -> Vec<PathBuf> {
        WalkBuilder::new(root)
            .hidden(!include_hidden)
            .build()
            .filter_map(|entry| {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        tracing::warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                        return None;
                    }
                };
                let is_file = entry.file_type().is_some_and(|t| t.is_file());
                let matches = entry
                    .path()
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| e.eq_ignore_ascii_case(extension));
                if is_file && matches {
                    return Some(entry.into_path());
                }
                None
            })
            .collect()
    }
}

#[async_trait]
impl Workspace for FsWorkspace {
    async fn active_file(&self) -> Option<PathBuf> {
        self.active_file.read().await.clone()
    }

    async fn list_files(&self, extension: &str) -> Vec<PathBuf> {
        let Some(root) = self.root.clone() else {
            tracing::debug!("No workspace root; corpus is empty");
            return Vec::new();
        };
        let extension = extension.to_string();
        let include_hidden = self.include_hidden;

        match tokio::task::spawn_blocking(move || {
            Self::collect_paths(&root, &extension, include_hidden)
        })
        .await
        {
            Ok(paths) => paths,
            Err(e) => {
                tracing::error!("Template discovery task failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Invalid UTF-8 sequences are replaced, not rejected.
    async fn read_file_text(&self, path: &Path) -> ApiResult<String> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ApiError::io(path, e))?;
        Ok(match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!("{} is not valid UTF-8; decoding lossily", path.display());
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        })
    }

    fn root(&self) -> Option<PathBuf> {
        self.root.clone()
    }
}
