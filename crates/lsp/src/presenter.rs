use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use snipscope_api::StatusPresenter;
use tower_lsp::Client;
use tower_lsp::lsp_types::notification::Notification;
use tower_lsp::lsp_types::{MessageType, Url};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusState {
    Hidden,
    Warning,
    Active,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusParams {
    pub state: StatusState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Server → client: update the status bar item.
pub enum StatusNotification {}

impl Notification for StatusNotification {
    type Params = StatusParams;
    const METHOD: &'static str = "snipscope/status";
}

/// Client → server: the focused editor changed. `uri` is `None` when no
/// editor is focused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveEditorParams {
    #[serde(default)]
    pub uri: Option<Url>,
}

pub const ACTIVE_EDITOR_METHOD: &str = "snipscope/didChangeActiveEditor";

/// Drives the editor's status item over the LSP connection.
pub struct LspPresenter {
    client: Client,
}

impl LspPresenter {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    async fn send(&self, state: StatusState, text: Option<&str>) {
        self.client
            .send_notification::<StatusNotification>(StatusParams {
                state,
                text: text.map(str::to_string),
            })
            .await;
    }
}

#[async_trait]
impl StatusPresenter for LspPresenter {
    async fn hide(&self) {
        self.send(StatusState::Hidden, None).await;
    }

    async fn show_warning(&self, text: &str) {
        self.send(StatusState::Warning, Some(text)).await;
    }

    async fn show_active(&self, text: &str) {
        self.send(StatusState::Active, Some(text)).await;
    }

    async fn show_message(&self, text: &str) {
        self.client.show_message(MessageType::INFO, text).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_params_wire_format() {
        let params = StatusParams {
            state: StatusState::Warning,
            text: Some("⚠️ Not included anywhere".into()),
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({ "state": "warning", "text": "⚠️ Not included anywhere" })
        );

        let hidden = StatusParams {
            state: StatusState::Hidden,
            text: None,
        };
        assert_eq!(
            serde_json::to_value(&hidden).unwrap(),
            json!({ "state": "hidden" })
        );
    }

    #[test]
    fn test_active_editor_params_accept_missing_uri() {
        let params: ActiveEditorParams = serde_json::from_value(json!({})).unwrap();
        assert_eq!(params.uri, None);

        let params: ActiveEditorParams =
            serde_json::from_value(json!({ "uri": "file:///repo/snippets/card.liquid" })).unwrap();
        assert!(params.uri.is_some());
    }
}
