pub mod capabilities;
pub mod presenter;
pub mod util;

use crate::presenter::{ACTIVE_EDITOR_METHOD, ActiveEditorParams, LspPresenter};
use crate::util::uri_to_path;
use snipscope_api::{ScanConfig, Workspace};
use snipscope_core::{FsWorkspace, Session};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, ClientSocket, LanguageServer, LspService};

pub const SHOW_INCLUDES_COMMAND: &str = "snipscope.showIncludes";

struct ServerState {
    workspace: Arc<FsWorkspace>,
    session: Arc<Session>,
    config: ScanConfig,
}

pub struct LspServer {
    client: Client,
    state: Arc<RwLock<Option<ServerState>>>,
    cancel_token: CancellationToken,
}

impl LspServer {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            state: Arc::new(RwLock::new(None)),
            cancel_token: CancellationToken::new(),
        }
    }

    /// Make `path` the active file and recompute the status item.
    async fn focus(&self, path: Option<PathBuf>) {
        let session = {
            let lock = self.state.read().await;
            let Some(state) = lock.as_ref() else {
                return;
            };
            state.workspace.set_active_file(path).await;
            state.session.clone()
        };
        let report = session.refresh().await;
        tracing::debug!("Status: {:?}", report);
    }

    pub async fn did_change_active_editor(&self, params: ActiveEditorParams) {
        self.client
            .log_message(
                MessageType::LOG,
                format!(
                    "LSP Event: {} uri={}",
                    ACTIVE_EDITOR_METHOD,
                    params
                        .uri
                        .as_ref()
                        .map(|u| u.as_str())
                        .unwrap_or("<none>")
                ),
            )
            .await;
        self.focus(params.uri.as_ref().and_then(uri_to_path)).await;
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for LspServer {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        let root = util::workspace_root(&params);
        let config = util::scan_config(params.initialization_options.as_ref());
        tracing::info!("Initializing for root {:?} with {:?}", root, config);

        let workspace = Arc::new(FsWorkspace::new(root, &config));
        let presenter = Arc::new(LspPresenter::new(self.client.clone()));
        let session = Arc::new(Session::new(
            workspace.clone(),
            presenter,
            config.clone(),
        ));

        *self.state.write().await = Some(ServerState {
            workspace,
            session,
            config,
        });

        Ok(InitializeResult {
            server_info: Some(ServerInfo {
                name: "Snipscope".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
            capabilities: capabilities::server_capabilities(),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        let lock = self.state.read().await;
        let Some(state) = lock.as_ref() else {
            return;
        };
        let Some(root) = state.workspace.root() else {
            self.client
                .log_message(
                    MessageType::INFO,
                    "No workspace root; template changes will not be watched",
                )
                .await;
            return;
        };

        match snipscope_core::watch::spawn_refresh_on_change(
            state.session.clone(),
            root,
            state.config.extension.clone(),
            self.cancel_token.clone(),
        ) {
            Ok(_) => {
                self.client
                    .log_message(MessageType::INFO, "File watcher started successfully.")
                    .await
            }
            Err(e) => {
                self.client
                    .log_message(
                        MessageType::ERROR,
                        format!("Failed to start file watcher: {}", e),
                    )
                    .await
            }
        }
    }

    async fn shutdown(&self) -> Result<()> {
        self.cancel_token.cancel();
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let uri = params.text_document.uri;
        self.client
            .log_message(MessageType::LOG, format!("LSP Event: did_open uri={}", uri))
            .await;
        self.focus(uri_to_path(&uri)).await;
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        self.client
            .log_message(MessageType::LOG, format!("LSP Event: did_close uri={}", uri))
            .await;

        let closed = uri_to_path(&uri);
        let is_active = {
            let lock = self.state.read().await;
            match lock.as_ref() {
                Some(state) => closed.is_some() && state.workspace.active_file().await == closed,
                None => false,
            }
        };
        if is_active {
            self.focus(None).await;
        }
    }

    async fn execute_command(
        &self,
        params: ExecuteCommandParams,
    ) -> Result<Option<serde_json::Value>> {
        self.client
            .log_message(
                MessageType::LOG,
                format!("LSP Request: workspace/executeCommand command={}", params.command),
            )
            .await;

        if params.command != SHOW_INCLUDES_COMMAND {
            self.client
                .log_message(
                    MessageType::WARNING,
                    format!("Unknown command: {}", params.command),
                )
                .await;
            return Ok(None);
        }

        let session = {
            let lock = self.state.read().await;
            match lock.as_ref() {
                Some(state) => state.session.clone(),
                None => return Ok(None),
            }
        };
        let includes = session.show_includes().await;
        self.client
            .log_message(
                MessageType::LOG,
                format!("LSP Response: found {} includes", includes.len()),
            )
            .await;
        Ok(Some(serde_json::Value::from(includes)))
    }
}

pub fn build_service() -> (LspService<LspServer>, ClientSocket) {
    LspService::build(LspServer::new)
        .custom_method(ACTIVE_EDITOR_METHOD, LspServer::did_change_active_editor)
        .finish()
}

pub async fn run_server() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = build_service();
    tower_lsp::Server::new(stdin, stdout, socket)
        .serve(service)
        .await;

    Ok(())
}
