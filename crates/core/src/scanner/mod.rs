pub mod pattern;

pub use pattern::DirectivePattern;

use futures::StreamExt;
use futures::future;
use futures::stream;
use snipscope_api::{FragmentKind, FragmentReference, ScanConfig, Workspace};

/// Finds the templates that embed a fragment.
///
/// Every call discovers and reads the corpus from scratch. Failures on
/// individual files only shrink the result.
#[derive(Debug, Clone, Default)]
pub struct ReferenceScanner {
    config: ScanConfig,
}

impl ReferenceScanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Templates referencing `fragment_name`, in discovery order.
    ///
    /// `kind` only matters under `KeywordPolicy::ByKind`.
    pub async fn find_references(
        &self,
        workspace: &dyn Workspace,
        fragment_name: &str,
        kind: FragmentKind,
    ) -> Vec<FragmentReference> {
        let keywords = self.config.keyword_policy.keywords_for(kind);
        let pattern = DirectivePattern::new(fragment_name, keywords, self.config.liquid_blocks);
        let pattern = match pattern {
            Ok(Some(pattern)) => pattern,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::error!("Cannot build directive pattern for '{}': {}", fragment_name, e);
                return Vec::new();
            }
        };

        let files = workspace.list_files(&self.config.extension).await;
        tracing::debug!(
            "Scanning {} .{} files for '{}'",
            files.len(),
            self.config.extension,
            fragment_name
        );

        let pattern = &pattern;
        let references: Vec<FragmentReference> = stream::iter(files)
            .map(|path| async move {
                match workspace.read_file_text(&path).await {
                    Ok(text) => pattern
                        .find(&text)
                        .map(|directive| FragmentReference { path, directive }),
                    Err(e) => {
                        tracing::warn!("Skipping unreadable template: {}", e);
                        None
                    }
                }
            })
            .buffered(self.config.read_concurrency.max(1))
            .filter_map(future::ready)
            .collect()
            .await;

        tracing::debug!(
            "Found {} references to '{}'",
            references.len(),
            fragment_name
        );
        references
    }
}
