use crate::locator::Locator;
use crate::paths::render_paths;
use crate::scanner::ReferenceScanner;
use serde::Serialize;
use snipscope_api::{FragmentDescriptor, ScanConfig, StatusPresenter, Workspace};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;

pub const STATUS_NOT_INCLUDED: &str = "⚠️ Not included anywhere";
pub const STATUS_INCLUDED: &str = "⬇ Included in...";
pub const MESSAGE_PREFIX: &str = "Included in: ";
pub const MESSAGE_SEPARATOR: &str = ", ";

/// What the status indicator should show for the active file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "includes", rename_all = "camelCase")]
pub enum StatusReport {
    Hidden,
    NotIncluded,
    Included(Vec<String>),
}

impl StatusReport {
    pub fn from_includes(descriptor: &FragmentDescriptor, includes: Vec<String>) -> Self {
        if !descriptor.kind.is_fragment() {
            StatusReport::Hidden
        } else if includes.is_empty() {
            StatusReport::NotIncluded
        } else {
            StatusReport::Included(includes)
        }
    }

    pub fn text(&self) -> Option<&'static str> {
        match self {
            StatusReport::Hidden => None,
            StatusReport::NotIncluded => Some(STATUS_NOT_INCLUDED),
            StatusReport::Included(_) => Some(STATUS_INCLUDED),
        }
    }

    pub async fn present(&self, presenter: &dyn StatusPresenter) {
        match self {
            StatusReport::Hidden => presenter.hide().await,
            StatusReport::NotIncluded => presenter.show_warning(STATUS_NOT_INCLUDED).await,
            StatusReport::Included(_) => presenter.show_active(STATUS_INCLUDED).await,
        }
    }
}

/// Message for the "show includes" command, or `None` when there is nothing to list.
pub fn includes_message(includes: &[String]) -> Option<String> {
    if includes.is_empty() {
        return None;
    }
    Some(format!("{}{}", MESSAGE_PREFIX, includes.join(MESSAGE_SEPARATOR)))
}

/// Ties the active file, the scanner and the status indicator together.
///
/// Hosts call [`Session::refresh`] whenever the focused file changes and
/// [`Session::show_includes`] when the user asks for the list. Refreshes may
/// overlap; a result is only presented if no newer refresh has been
/// presented already.
pub struct Session {
    workspace: Arc<dyn Workspace>,
    presenter: Arc<dyn StatusPresenter>,
    locator: Locator,
    scanner: ReferenceScanner,
    generation: AtomicU64,
    presented: Mutex<u64>,
}

impl Session {
    pub fn new(
        workspace: Arc<dyn Workspace>,
        presenter: Arc<dyn StatusPresenter>,
        config: ScanConfig,
    ) -> Self {
        Self {
            workspace,
            presenter,
            locator: Locator::new(&config),
            scanner: ReferenceScanner::new(config),
            generation: AtomicU64::new(0),
            presented: Mutex::new(0),
        }
    }

    pub fn classify(&self, path: Option<&Path>) -> FragmentDescriptor {
        match path {
            Some(path) => self.locator.classify(path),
            None => FragmentDescriptor::none(),
        }
    }

    /// Descriptor of the active file plus the rendered paths of every
    /// template including it. Non-fragments yield an empty list without
    /// scanning.
    pub async fn includes(&self) -> (FragmentDescriptor, Vec<String>) {
        let active = self.workspace.active_file().await;
        let descriptor = self.classify(active.as_deref());
        if !descriptor.is_scannable() {
            return (descriptor, Vec::new());
        }

        let references = self
            .scanner
            .find_references(self.workspace.as_ref(), &descriptor.name, descriptor.kind)
            .await;
        let root = self.workspace.root();
        let rendered = render_paths(&references, root.as_deref());
        (descriptor, rendered)
    }

    /// Recompute the indicator for the current file.
    pub async fn refresh(&self) -> StatusReport {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let (descriptor, includes) = self.includes().await;
        let report = StatusReport::from_includes(&descriptor, includes);

        let mut presented = self.presented.lock().await;
        if ticket < *presented {
            tracing::debug!(
                "Discarding stale status for '{}' (ticket {}, presented {})",
                descriptor.name,
                ticket,
                *presented
            );
            return report;
        }
        *presented = ticket;
        report.present(self.presenter.as_ref()).await;
        report
    }

    /// The "show includes" command.
    pub async fn show_includes(&self) -> Vec<String> {
        let (_, includes) = self.includes().await;
        if let Some(message) = includes_message(&includes) {
            self.presenter.show_message(&message).await;
        }
        includes
    }
}
