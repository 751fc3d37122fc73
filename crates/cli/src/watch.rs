use crate::ScanArgs;
use crate::console::ConsolePresenter;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub async fn run(scan: &ScanArgs, file: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let (session, root) = crate::open_session(scan, &file, ConsolePresenter::new(false)).await?;

    session.refresh().await;

    let cancel_token = CancellationToken::new();
    let handle = snipscope_core::watch::spawn_refresh_on_change(
        session,
        root,
        scan.extension.clone(),
        cancel_token.clone(),
    )?;
    info!("File watcher started. Press Ctrl+C to stop.");

    tokio::signal::ctrl_c().await?;
    cancel_token.cancel();
    handle.await?;
    info!("Watcher stopped.");

    Ok(())
}
