//! Seed command.

use anyhow::Result;
use archlens_core::analysis::{load_analyses_file, seed_analyses};
use archlens_redis::RedisAnalysisService;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Args)]
pub struct SeedArgs {
    /// JSON file holding an array of analyses
    pub file: PathBuf,
}

pub async fn execute(args: SeedArgs, redis_url: &str) -> Result<()> {
    let analyses = load_analyses_file(&args.file)?;
    let service = RedisAnalysisService::new(redis_url);
    let count = seed_analyses(&service, &analyses).await?;

    println!(
        "{} {} analyses from {}",
        "✓".green().bold(),
        count,
        args.file.display()
    );

    Ok(())
}
