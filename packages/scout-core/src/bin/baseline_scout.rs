//! Baseline Scout CLI
//!
//! # Usage
//!
//! ```bash
//! # Scan a project directory
//! baseline-scout scan ./my-site --format markdown
//!
//! # Scan using only the cached catalog
//! baseline-scout scan ./my-site --offline
//!
//! # Show catalog freshness / drop the cached catalog
//! baseline-scout catalog
//! baseline-scout invalidate
//! ```
//!
//! The catalog is cached in `<user cache dir>/baseline-scout/catalog.sqlite`
//! unless the config sets `cache.path` or `cache.persistent: false`.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use scout_core::adapters::discover_files;
use scout_core::report::{JsonReporter, MarkdownReporter, ScanReport, TerminalReporter};
use scout_core::{
    CancellationFlag, CatalogAccessor, CatalogCache, HttpCatalogSource, ScanAggregator,
    ScoutConfig, ScoutResult,
};

#[derive(Parser)]
#[command(name = "baseline-scout")]
#[command(about = "Baseline Scout - web-feature compatibility scanner", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a directory
    Scan {
        /// Project root
        dir: PathBuf,

        /// YAML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Write the report into this directory instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Use the cached catalog only
        #[arg(long)]
        offline: bool,
    },

    /// Show catalog freshness and size
    Catalog {
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(long)]
        offline: bool,
    },

    /// Drop the cached catalog
    Invalidate {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Terminal,
    Json,
    Markdown,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn load_config(path: Option<&Path>) -> ScoutResult<ScoutConfig> {
    Ok(match path {
        Some(path) => ScoutConfig::from_yaml(path)?,
        None => ScoutConfig::from_env()?,
    })
}

fn build_accessor(config: &ScoutConfig, offline: bool) -> ScoutResult<CatalogAccessor> {
    let cache = CatalogCache::open_or_memory(&config.cache);
    tracing::debug!("Catalog cache backend: {}", cache.backend_name());
    if offline {
        return Ok(CatalogAccessor::offline(cache, &config.catalog));
    }
    let source = Arc::new(HttpCatalogSource::new(&config.catalog)?);
    Ok(CatalogAccessor::new(source, cache, &config.catalog))
}

async fn run_scan(
    dir: &Path,
    config: &ScoutConfig,
    format: OutputFormat,
    output: Option<&Path>,
    offline: bool,
) -> ScoutResult<()> {
    let accessor = build_accessor(config, offline)?;
    let catalog = accessor.fetch_catalog().await;
    if catalog.is_offline() {
        tracing::warn!("Catalog service unreachable, using cached data");
    }

    let files = discover_files(dir, &config.workspace)?;
    let aggregator = ScanAggregator::new(&catalog.features, &config.scan);
    let run = aggregator.run_scan_cancellable(
        &files,
        |percent| tracing::debug!("progress {}%", percent),
        &CancellationFlag::new(),
    );

    let report = ScanReport::new(dir.display().to_string(), run, &catalog);
    match (format, output) {
        (OutputFormat::Terminal, _) => TerminalReporter::print(&report),
        (OutputFormat::Json, None) => println!("{}", JsonReporter::render(&report)?),
        (OutputFormat::Json, Some(dir)) => {
            let path = JsonReporter::save(&report, dir)?;
            tracing::info!("Report written to {}", path.display());
        }
        (OutputFormat::Markdown, None) => print!("{}", MarkdownReporter::generate(&report)),
        (OutputFormat::Markdown, Some(dir)) => {
            let path = MarkdownReporter::save(&report, dir)?;
            tracing::info!("Report written to {}", path.display());
        }
    }
    Ok(())
}

async fn run(cli: Cli) -> ScoutResult<()> {
    match cli.command {
        Commands::Scan {
            dir,
            config,
            format,
            output,
            offline,
        } => {
            let config = load_config(config.as_deref())?;
            run_scan(&dir, &config, format, output.as_deref(), offline).await
        }
        Commands::Catalog { config, offline } => {
            let config = load_config(config.as_deref())?;
            let catalog = build_accessor(&config, offline)?.fetch_catalog().await;
            println!("freshness: {:?}", catalog.freshness);
            println!("features:  {}", catalog.len());
            if let Some(error) = &catalog.last_error {
                println!("error:     {}", error);
            }
            Ok(())
        }
        Commands::Invalidate { config } => {
            let config = load_config(config.as_deref())?;
            let cache = CatalogCache::open(&config.cache)?;
            CatalogAccessor::offline(cache, &config.catalog)
                .invalidate()
                .await;
            println!("Catalog cache cleared");
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
