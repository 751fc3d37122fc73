use async_trait::async_trait;

/// Status indicator owned by the host UI.
///
/// Passed into whichever code needs to update it; the core never keeps a
/// global handle.
#[async_trait]
pub trait StatusPresenter: Send + Sync {
    async fn hide(&self);

    async fn show_warning(&self, text: &str);

    async fn show_active(&self, text: &str);

    /// On-demand message, e.g. the list of including files.
    async fn show_message(&self, text: &str);
}
