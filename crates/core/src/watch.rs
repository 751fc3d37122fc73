use crate::error::Result;
use crate::session::Session;
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher as NotifyWatcher};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

pub const DEBOUNCE_INTERVAL: Duration = Duration::from_millis(500);

fn is_template(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}

fn touches_template(event: &Event, extension: &str) -> bool {
    event.paths.iter().any(|p| is_template(p, extension))
}

/// Watches `root` recursively and forwards one tick per event that touches a
/// template. Other events are dropped before they reach the debounce loop.
fn watch_templates(
    root: &Path,
    extension: String,
) -> notify::Result<(RecommendedWatcher, mpsc::UnboundedReceiver<()>)> {
    let (tx, rx) = mpsc::unbounded_channel();
    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) if touches_template(&event, &extension) => {
                let _ = tx.send(());
            }
            Ok(_) => {}
            Err(e) => tracing::warn!("Watcher error: {}", e),
        },
        Config::default(),
    )?;
    watcher.watch(root, RecursiveMode::Recursive)?;
    Ok((watcher, rx))
}

/// Refresh `session` once templates under `root` have been quiet for
/// [`DEBOUNCE_INTERVAL`].
///
/// The task ends when `cancel_token` is cancelled or the watcher goes away.
pub fn spawn_refresh_on_change(
    session: Arc<Session>,
    root: PathBuf,
    extension: String,
    cancel_token: CancellationToken,
) -> Result<JoinHandle<()>> {
    let (watcher, mut changes) = watch_templates(&root, extension)?;

    Ok(tokio::spawn(async move {
        let _watcher = watcher;
        tracing::info!("Started watching {}", root.display());
        let mut deadline: Option<Instant> = None;

        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    break;
                }
                change = changes.recv() => {
                    match change {
                        Some(()) => deadline = Some(Instant::now() + DEBOUNCE_INTERVAL),
                        None => break,
                    }
                }
                _ = tokio::time::sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    deadline = None;
                    tracing::debug!("Templates changed. Refreshing status...");
                    session.refresh().await;
                }
            }
        }
        tracing::info!("File watcher task ended for {}", root.display());
    }))
}
