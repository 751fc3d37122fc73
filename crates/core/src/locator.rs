use snipscope_api::{FragmentDescriptor, FragmentKind, ScanConfig};
use std::path::{Component, Path};

/// Classifies template paths by the directory convention of a theme.
#[derive(Debug, Clone)]
pub struct Locator {
    extension: String,
    snippets_dir: String,
    sections_dir: String,
    require_extension: bool,
}

impl Default for Locator {
    fn default() -> Self {
        Self::new(&ScanConfig::default())
    }
}

impl Locator {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            extension: config.extension.clone(),
            snippets_dir: config.snippets_dir.clone(),
            sections_dir: config.sections_dir.clone(),
            require_extension: config.require_extension,
        }
    }

    /// Never fails: empty or odd paths resolve to `FragmentKind::None`.
    pub fn classify(&self, path: &Path) -> FragmentDescriptor {
        let name = self.fragment_name(path);
        let kind = if self.require_extension && !self.has_template_extension(path) {
            FragmentKind::None
        } else if self.in_directory(path, &self.snippets_dir) {
            FragmentKind::Snippet
        } else if self.in_directory(path, &self.sections_dir) {
            FragmentKind::Section
        } else {
            FragmentKind::None
        };

        FragmentDescriptor { name, kind }
    }

    /// File name with the templating extension stripped. Other extensions are kept.
    pub fn fragment_name(&self, path: &Path) -> String {
        if self.has_template_extension(path) {
            if let Some(stem) = path.file_stem() {
                return stem.to_string_lossy().into_owned();
            }
        }
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn has_template_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(&self.extension))
    }

    fn in_directory(&self, path: &Path, dir: &str) -> bool {
        let Some(parent) = path.parent() else {
            return false;
        };
        parent
            .components()
            .any(|c| matches!(c, Component::Normal(segment) if segment == dir))
    }
}

/// Classifies `path` with the default theme conventions.
pub fn classify(path: &Path) -> FragmentDescriptor {
    Locator::default().classify(path)
}
