use snipscope_api::ScanConfig;
use std::path::PathBuf;
use tower_lsp::lsp_types::{InitializeParams, Url};

pub fn uri_to_path(uri: &Url) -> Option<PathBuf> {
    uri.to_file_path().ok()
}

/// Workspace root from `rootUri`, falling back to the first workspace folder.
#[allow(deprecated)]
pub fn workspace_root(params: &InitializeParams) -> Option<PathBuf> {
    params
        .root_uri
        .as_ref()
        .and_then(uri_to_path)
        .or_else(|| {
            params
                .workspace_folders
                .as_ref()?
                .first()
                .and_then(|folder| uri_to_path(&folder.uri))
        })
}

/// Scan settings from `initializationOptions`; anything unparsable falls back to defaults.
pub fn scan_config(options: Option<&serde_json::Value>) -> ScanConfig {
    let Some(options) = options else {
        return ScanConfig::default();
    };
    match serde_json::from_value(options.clone()) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Ignoring invalid initializationOptions: {}", e);
            ScanConfig::default()
        }
    }
}
