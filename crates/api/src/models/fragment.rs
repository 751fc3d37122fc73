use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Role of a template file, derived from the directory it lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FragmentKind {
    Snippet,
    Section,
    None,
}

impl FragmentKind {
    pub fn is_fragment(&self) -> bool {
        !matches!(self, FragmentKind::None)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FragmentKind::Snippet => "snippet",
            FragmentKind::Section => "section",
            FragmentKind::None => "none",
        }
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name and role of the file under edit. Computed fresh on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentDescriptor {
    pub name: String,
    pub kind: FragmentKind,
}

impl FragmentDescriptor {
    pub fn none() -> Self {
        Self {
            name: String::new(),
            kind: FragmentKind::None,
        }
    }

    /// Whether this descriptor should trigger a corpus scan.
    pub fn is_scannable(&self) -> bool {
        self.kind.is_fragment() && !self.name.is_empty()
    }
}

/// Directive keyword that embeds one fragment inside another template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectiveKind {
    Include,
    Render,
    Section,
}

impl DirectiveKind {
    pub const ALL: [DirectiveKind; 3] = [
        DirectiveKind::Include,
        DirectiveKind::Render,
        DirectiveKind::Section,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            DirectiveKind::Include => "include",
            DirectiveKind::Render => "render",
            DirectiveKind::Section => "section",
        }
    }

    /// Case-insensitive keyword lookup.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.keyword().eq_ignore_ascii_case(keyword))
    }
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A template file that embeds the fragment, with the directive that matched first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentReference {
    pub path: PathBuf,
    pub directive: DirectiveKind,
}
