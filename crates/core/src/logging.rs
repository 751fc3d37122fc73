use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Overrides the directory log files are written to.
pub const LOG_DIR_ENV: &str = "SNIPSCOPE_LOG_DIR";
/// Filter directives; takes precedence over `RUST_LOG`.
pub const LOG_FILTER_ENV: &str = "SNIPSCOPE_LOG";

pub fn log_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(LOG_DIR_ENV) {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".snipscope/logs")
}

/// Our crates log at `info`, dependencies only at `warn`.
fn default_directives(component: &str) -> String {
    format!("warn,snipscope_api=info,snipscope_core=info,snipscope_{component}=info")
}

fn env_filter(component: &str) -> EnvFilter {
    [LOG_FILTER_ENV, EnvFilter::DEFAULT_ENV]
        .into_iter()
        .find_map(|var| EnvFilter::try_from_env(var).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directives(component)))
}

/// Installs the global subscriber: a daily file named after `component`
/// (e.g. `cli.2026-10-19`) plus, when `to_stderr` is set, colored stderr.
///
/// Keep the returned guard alive until exit or buffered lines are lost.
pub fn init_logging(component: &str, to_stderr: bool) -> WorkerGuard {
    let dir = log_dir();
    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("snipscope: cannot create log directory {}: {}", dir.display(), e);
    }

    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&dir, component));

    let stderr_layer = to_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(env_filter(component))
        .with(
            fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false),
        )
        .with(stderr_layer)
        .init();

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_name_component_crate() {
        let directives = default_directives("lsp");
        assert!(directives.starts_with("warn,"));
        assert!(directives.contains("snipscope_lsp=info"));
        assert!(directives.contains("snipscope_core=info"));
    }
}
