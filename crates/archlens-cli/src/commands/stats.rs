//! Dashboard stats command.

use anyhow::Result;
use archlens_core::AnalysisService;
use archlens_redis::RedisAnalysisService;

use crate::output;

pub async fn execute(redis_url: &str) -> Result<()> {
    let service = RedisAnalysisService::new(redis_url);
    let stats = service.get_dashboard_stats().await?;
    output::print_stats(&stats);
    Ok(())
}
