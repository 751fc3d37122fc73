mod console;
mod includes;
mod status;
mod watch;

use clap::{Args, Parser, Subcommand, ValueEnum};
use console::ConsolePresenter;
use snipscope_api::{ApiError, KeywordPolicy, ScanConfig};
use snipscope_core::{FsWorkspace, Session};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "snipscope",
    version,
    about = "Find which Liquid templates include a snippet or section",
    long_about = "Snipscope scans a Liquid theme for include, render and section tags that \
                  reference the given snippet or section file, and reports where it is used."
)]
pub struct Cli {
    #[command(flatten)]
    pub scan: ScanArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Theme root used for discovery and relative paths. Inferred from the file when omitted.
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Which directive keywords count as a reference
    #[arg(long, global = true, value_enum, default_value_t = Keywords::Permissive)]
    pub keywords: Keywords,

    /// Only treat files with the templating extension as fragments
    #[arg(long, global = true)]
    pub require_extension: bool,

    /// Templating file extension, without the dot
    #[arg(long, global = true, default_value = snipscope_api::TEMPLATE_EXTENSION)]
    pub extension: String,

    /// Also scan hidden directories
    #[arg(long, global = true)]
    pub include_hidden: bool,

    /// Also match tags written inside `{% liquid %}` blocks
    #[arg(long, global = true)]
    pub liquid_blocks: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keywords {
    /// include, render and section for every fragment
    Permissive,
    /// include/render for snippets, section for sections
    ByKind,
}

impl ScanArgs {
    pub fn config(&self) -> ScanConfig {
        ScanConfig {
            extension: self.extension.clone(),
            require_extension: self.require_extension,
            keyword_policy: match self.keywords {
                Keywords::Permissive => KeywordPolicy::Permissive,
                Keywords::ByKind => KeywordPolicy::ByKind,
            },
            include_hidden: self.include_hidden,
            liquid_blocks: self.liquid_blocks,
            ..ScanConfig::default()
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the status indicator for a snippet or section
    #[command(
        long_about = "Classifies FILE and reports whether any template includes it: \
                      hidden for files outside snippets/ and sections/, a warning when \
                      nothing includes it, or the list of including templates."
    )]
    Status {
        /// Snippet or section file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the templates that include a snippet or section
    Includes {
        /// Snippet or section file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the list as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Keep the status up to date while templates change
    #[command(
        long_about = "Prints the status for FILE, then watches the theme root and prints it \
                      again whenever a template changes. Stop with Ctrl+C."
    )]
    Watch {
        /// Snippet or section file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Start the Language Server Protocol (LSP) server
    Lsp,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let component = match &cli.command {
        Commands::Lsp => "lsp",
        _ => "cli",
    };
    let _guard =
        snipscope_core::logging::init_logging(component, !matches!(cli.command, Commands::Lsp));

    let rt = tokio::runtime::Runtime::new()?;

    match cli.command {
        Commands::Status { file, json } => rt.block_on(status::run(&cli.scan, file, json)),
        Commands::Includes { file, json } => rt.block_on(includes::run(&cli.scan, file, json)),
        Commands::Watch { file } => rt.block_on(watch::run(&cli.scan, file)),
        Commands::Lsp => rt.block_on(snipscope_lsp::run_server()),
    }
}

/// Session over the local filesystem with `file` as the active file.
pub(crate) async fn open_session(
    scan: &ScanArgs,
    file: &Path,
    presenter: ConsolePresenter,
) -> Result<(Arc<Session>, PathBuf), Box<dyn std::error::Error>> {
    let config = scan.config();
    let file = std::fs::canonicalize(file).map_err(|e| {
        ApiError::InvalidArgument(format!("cannot open {}: {}", file.display(), e))
    })?;
    let root = match &scan.root {
        Some(root) => absolute(root)?,
        None => match infer_root(&file, &config) {
            Some(root) => root,
            None => std::env::current_dir()?,
        },
    };
    tracing::info!("Scanning {} for {}", root.display(), file.display());

    let workspace = Arc::new(FsWorkspace::new(Some(root.clone()), &config));
    workspace.set_active_file(Some(file)).await;
    let session = Session::new(workspace, Arc::new(presenter), config);
    Ok((Arc::new(session), root))
}

fn absolute(path: &Path) -> std::io::Result<PathBuf> {
    match std::fs::canonicalize(path) {
        Ok(path) => Ok(path),
        Err(e) => {
            tracing::debug!("Cannot canonicalize {}: {}", path.display(), e);
            std::path::absolute(path)
        }
    }
}

/// Theme root for a fragment: the directory holding its `snippets`/`sections` folder.
pub fn infer_root(file: &Path, config: &ScanConfig) -> Option<PathBuf> {
    let parent = file.parent()?;
    let mut root = PathBuf::new();
    let mut found = None;
    for component in parent.components() {
        if let Component::Normal(segment) = component {
            if segment == config.snippets_dir.as_str() || segment == config.sections_dir.as_str()
            {
                found = Some(root.clone());
            }
        }
        root.push(component);
    }
    found.filter(|root| !root.as_os_str().is_empty())
}
