//! API server command.

use anyhow::Result;
use archlens_core::analysis::{load_analyses_file, seed_analyses};
use archlens_core::{MemoryAnalysisService, SharedAnalysisService};
use archlens_redis::RedisAnalysisService;
use clap::{Args, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;

/// Where analyses are stored while serving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    Redis,
    Memory,
}

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "ARCHLENS_PORT", default_value = "3000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "ARCHLENS_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Analysis store backend
    #[arg(long, env = "ARCHLENS_STORE", value_enum, default_value_t = StoreKind::Redis)]
    pub store: StoreKind,

    /// JSON file of analyses to load before serving
    #[arg(long)]
    pub seed: Option<PathBuf>,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path used with --log
    #[arg(long, default_value = "logs/archlens.log")]
    pub log_file: PathBuf,
}

pub async fn execute(args: ServeArgs, redis_url: &str) -> Result<()> {
    let service: SharedAnalysisService = match args.store {
        StoreKind::Redis => Arc::new(RedisAnalysisService::new(redis_url)),
        StoreKind::Memory => Arc::new(MemoryAnalysisService::new()),
    };

    if let Some(path) = &args.seed {
        let analyses = load_analyses_file(path)?;
        let count = seed_analyses(service.as_ref(), &analyses).await?;
        println!("  {} {} analyses from {}", "Seeded".green(), count, path.display());
    }

    println!();
    println!("  {} {}", "ArchLens".cyan().bold(), "API Server".bold());
    println!();
    println!("  {}      http://{}:{}/api", "API".green(), args.host, args.port);
    println!("  {}   http://{}:{}/health", "Health".green(), args.host, args.port);
    println!("  {}    {:?}", "Store".green(), args.store);
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    archlens_web::run_server(service, &args.host, args.port).await?;

    Ok(())
}
