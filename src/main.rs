//! phishscope binary entry point.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use phishscope::model::{Classifier, LinearModel};
use phishscope::{cli, ScanConfig, ScanEngine};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "phishscope", version, about = "Classify URLs as legitimate or suspicious")]
struct Cli {
    /// Emit machine-readable JSON on stdout.
    #[arg(long, global = true)]
    json: bool,

    /// Path to a JSON config file (defaults to ~/.phishscope/config.json).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Path to a JSON model weights file (overrides the config).
    #[arg(long, global = true)]
    model: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify a single URL.
    Check { url: String },
    /// Classify every URL in a file, one per line.
    Batch { file: PathBuf },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("phishscope=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let config = ScanConfig::load(args.config.as_deref())?;

    // The model handle is built once here and shared by reference; there is
    // no ambient global.
    let model_path = args.model.as_ref().or(config.model_path.as_ref());
    let model: Arc<dyn Classifier> = match model_path {
        Some(path) => Arc::new(
            LinearModel::from_file(path)
                .with_context(|| format!("failed to load model: {}", path.display()))?,
        ),
        None => Arc::new(LinearModel::baseline()),
    };

    let engine = ScanEngine::new(config, model).context("failed to build scan engine")?;

    match args.command {
        Command::Check { url } => cli::check_cmd::run(&engine, &url, args.json).await,
        Command::Batch { file } => cli::batch_cmd::run(&engine, &file, args.json).await,
    }
}
