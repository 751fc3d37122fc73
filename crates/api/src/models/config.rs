use super::fragment::{DirectiveKind, FragmentKind};
use serde::{Deserialize, Serialize};

pub const TEMPLATE_EXTENSION: &str = "liquid";
pub const SNIPPETS_DIR: &str = "snippets";
pub const SECTIONS_DIR: &str = "sections";
pub const DEFAULT_READ_CONCURRENCY: usize = 64;

/// Which directive keywords count as a reference to a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeywordPolicy {
    /// `include`, `render` and `section` regardless of the fragment kind.
    #[default]
    Permissive,
    /// Snippets are referenced by `include`/`render`, sections only by `section`.
    ByKind,
}

impl KeywordPolicy {
    pub fn keywords_for(&self, kind: FragmentKind) -> &'static [DirectiveKind] {
        match (self, kind) {
            (KeywordPolicy::Permissive, _) => &DirectiveKind::ALL,
            (KeywordPolicy::ByKind, FragmentKind::Snippet) => {
                &[DirectiveKind::Include, DirectiveKind::Render]
            }
            (KeywordPolicy::ByKind, FragmentKind::Section) => &[DirectiveKind::Section],
            (KeywordPolicy::ByKind, FragmentKind::None) => &[],
        }
    }
}

/// Conventions and limits shared by the locator and the scanner.
///
/// Deserialized from LSP `initializationOptions`, so every field has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScanConfig {
    /// Templating file extension, without the leading dot.
    pub extension: String,
    pub snippets_dir: String,
    pub sections_dir: String,
    /// Also require the templating extension when classifying a fragment.
    pub require_extension: bool,
    pub keyword_policy: KeywordPolicy,
    pub read_concurrency: usize,
    /// Walk into hidden directories during discovery.
    pub include_hidden: bool,
    /// Also match bare tags at the start of a line, as written inside `{% liquid %}`.
    pub liquid_blocks: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extension: TEMPLATE_EXTENSION.to_string(),
            snippets_dir: SNIPPETS_DIR.to_string(),
            sections_dir: SECTIONS_DIR.to_string(),
            require_extension: false,
            keyword_policy: KeywordPolicy::default(),
            read_concurrency: DEFAULT_READ_CONCURRENCY,
            include_hidden: false,
            liquid_blocks: false,
        }
    }
}
