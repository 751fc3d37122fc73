use snipscope_api::FragmentReference;
use std::path::{Path, PathBuf};

/// Renders reference paths for display.
///
/// With a root every path is made relative to it (`..` for paths outside
/// it). If any path cannot be expressed relative to the root, the whole
/// list falls back to absolute paths so the two forms never mix.
pub fn render_paths(references: &[FragmentReference], root: Option<&Path>) -> Vec<String> {
    let absolute = || {
        references
            .iter()
            .map(|r| display(&r.path))
            .collect::<Vec<_>>()
    };

    let Some(root) = root else {
        return absolute();
    };

    let relative: Option<Vec<PathBuf>> = references
        .iter()
        .map(|r| pathdiff::diff_paths(&r.path, root).filter(|p| p.is_relative()))
        .collect();

    match relative {
        Some(paths) => paths.iter().map(|p| display(p)).collect(),
        None => absolute(),
    }
}

fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
