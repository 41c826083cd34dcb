//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod delete;
pub mod seed;
pub mod serve;
pub mod stats;

/// ArchLens - Architecture analysis API
#[derive(Parser)]
#[command(name = "archlens")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Redis connection URL
    #[arg(
        long,
        global = true,
        env = "REDIS_URL",
        default_value = "redis://127.0.0.1:6379"
    )]
    pub redis_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the API server
    Serve(serve::ServeArgs),

    /// Load analyses from a JSON file into Redis
    Seed(seed::SeedArgs),

    /// Print dashboard stats
    Stats,

    /// Delete an analysis
    Delete(delete::DeleteArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::execute(args, &self.redis_url).await,
            Commands::Seed(args) => seed::execute(args, &self.redis_url).await,
            Commands::Stats => stats::execute(&self.redis_url).await,
            Commands::Delete(args) => delete::execute(args, &self.redis_url).await,
        }
    }
}
