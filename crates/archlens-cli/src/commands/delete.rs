//! Delete command.

use anyhow::{bail, Result};
use archlens_core::AnalysisService;
use archlens_redis::RedisAnalysisService;
use clap::Args;
use colored::Colorize;

#[derive(Args)]
pub struct DeleteArgs {
    /// Analysis ID
    pub id: String,
}

pub async fn execute(args: DeleteArgs, redis_url: &str) -> Result<()> {
    let service = RedisAnalysisService::new(redis_url);

    if !service.delete_analysis(&args.id).await? {
        bail!("Analysis not found: {}", args.id);
    }

    println!("{} Deleted analysis {}", "✓".green().bold(), args.id.cyan());
    Ok(())
}
