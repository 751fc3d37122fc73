use crate::ScanArgs;
use crate::console::ConsolePresenter;
use nu_ansi_term::Color;
use snipscope_core::StatusReport;
use std::path::PathBuf;

pub async fn run(scan: &ScanArgs, file: PathBuf, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (session, _) = crate::open_session(scan, &file, ConsolePresenter::new(json)).await?;

    let report = session.refresh().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if let StatusReport::Included(paths) = &report {
        for path in paths {
            println!("  {} {}", Color::DarkGray.paint("-"), path);
        }
    }

    Ok(())
}
