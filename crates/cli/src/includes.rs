use crate::ScanArgs;
use crate::console::ConsolePresenter;
use std::path::PathBuf;
use tracing::info;

pub async fn run(scan: &ScanArgs, file: PathBuf, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (session, _) = crate::open_session(scan, &file, ConsolePresenter::new(json)).await?;

    let includes = session.show_includes().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&includes)?);
    } else if includes.is_empty() {
        info!("No templates include {}", file.display());
    }

    Ok(())
}
