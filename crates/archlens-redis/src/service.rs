//! Redis-backed analysis service.

use archlens_core::analysis::model::{Analysis, DashboardStats};
use archlens_core::{AnalysisService, ArchLensResult};
use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::client::{init_pool, RedisPool};
use crate::queries::analyses as queries;

/// Analysis service over a lazily opened Redis connection.
///
/// The connection is opened by the first call that needs it and reused
/// afterwards, so `connect` may be called on every request.
pub struct RedisAnalysisService {
    redis_url: String,
    pool: OnceCell<RedisPool>,
}

impl RedisAnalysisService {
    pub fn new(redis_url: impl Into<String>) -> Self {
        Self {
            redis_url: redis_url.into(),
            pool: OnceCell::new(),
        }
    }

    async fn pool(&self) -> ArchLensResult<&RedisPool> {
        let pool = self
            .pool
            .get_or_try_init(|| async {
                info!("Connecting to Redis");
                init_pool(&self.redis_url).await
            })
            .await?;
        Ok(pool)
    }
}

#[async_trait]
impl AnalysisService for RedisAnalysisService {
    async fn connect(&self) -> ArchLensResult<()> {
        self.pool().await.map(|_| ())
    }

    async fn get_analysis_by_id(&self, id: &str) -> ArchLensResult<Option<Analysis>> {
        let pool = self.pool().await?;
        Ok(queries::get_analysis(pool, id).await?)
    }

    async fn get_dashboard_stats(&self) -> ArchLensResult<DashboardStats> {
        let pool = self.pool().await?;
        let analyses = queries::list_analyses(pool).await?;
        debug!(count = analyses.len(), "Aggregating dashboard stats");
        Ok(DashboardStats::from_analyses(&analyses))
    }

    async fn delete_analysis(&self, id: &str) -> ArchLensResult<bool> {
        let pool = self.pool().await?;
        Ok(queries::delete_analysis(pool, id).await?)
    }

    async fn save_analysis(&self, analysis: &Analysis) -> ArchLensResult<()> {
        let pool = self.pool().await?;
        Ok(queries::save_analysis(pool, analysis).await?)
    }

    async fn list_analyses(&self) -> ArchLensResult<Vec<Analysis>> {
        let pool = self.pool().await?;
        Ok(queries::list_analyses(pool).await?)
    }
}
