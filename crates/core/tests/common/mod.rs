use async_trait::async_trait;
use snipscope_api::{ApiError, ApiResult, StatusPresenter, Workspace};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Notify;

/// In-memory corpus. A `None` body simulates a file that cannot be read.
#[derive(Default)]
pub struct MemoryWorkspace {
    pub files: Vec<(PathBuf, Option<String>)>,
    pub active: Mutex<Option<PathBuf>>,
    pub root: Option<PathBuf>,
    /// When set, the first listing signals `entered` and waits on `release`.
    pub hold_first_listing: Option<(Arc<Notify>, Arc<Notify>)>,
    held: AtomicBool,
}

#[allow(dead_code)]
impl MemoryWorkspace {
    pub fn new(root: Option<&str>, files: &[(&str, Option<&str>)]) -> Self {
        Self {
            files: files
                .iter()
                .map(|(p, body)| (PathBuf::from(p), body.map(str::to_string)))
                .collect(),
            root: root.map(PathBuf::from),
            ..Default::default()
        }
    }

    pub fn with_active(self, path: &str) -> Self {
        self.set_active(Some(path));
        self
    }

    pub fn set_active(&self, path: Option<&str>) {
        *self.active.lock().unwrap() = path.map(PathBuf::from);
    }
}

#[async_trait]
impl Workspace for MemoryWorkspace {
    async fn active_file(&self) -> Option<PathBuf> {
        self.active.lock().unwrap().clone()
    }

    async fn list_files(&self, extension: &str) -> Vec<PathBuf> {
        if let Some((entered, release)) = &self.hold_first_listing {
            if !self.held.swap(true, Ordering::SeqCst) {
                entered.notify_one();
                release.notified().await;
            }
        }
        self.files
            .iter()
            .map(|(p, _)| p.clone())
            .filter(|p| p.extension().is_some_and(|e| e == extension))
            .collect()
    }

    async fn read_file_text(&self, path: &Path) -> ApiResult<String> {
        self.files
            .iter()
            .find(|(p, _)| p == path)
            .and_then(|(_, body)| body.clone())
            .ok_or_else(|| {
                ApiError::io(
                    path,
                    std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
                )
            })
    }

    fn root(&self) -> Option<PathBuf> {
        self.root.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    Hidden,
    Warning(String),
    Active(String),
    Message(String),
}

#[derive(Default)]
pub struct RecordingPresenter {
    pub events: Mutex<Vec<Shown>>,
}

#[allow(dead_code)]
impl RecordingPresenter {
    pub fn events(&self) -> Vec<Shown> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatusPresenter for RecordingPresenter {
    async fn hide(&self) {
        self.events.lock().unwrap().push(Shown::Hidden);
    }

    async fn show_warning(&self, text: &str) {
        self.events
            .lock()
            .unwrap()
            .push(Shown::Warning(text.to_string()));
    }

    async fn show_active(&self, text: &str) {
        self.events
            .lock()
            .unwrap()
            .push(Shown::Active(text.to_string()));
    }

    async fn show_message(&self, text: &str) {
        self.events
            .lock()
            .unwrap()
            .push(Shown::Message(text.to_string()));
    }
}
