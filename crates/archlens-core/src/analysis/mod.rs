//! Analysis storage contract and the in-memory implementation.

pub mod model;

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::error::ArchLensResult;
use model::{Analysis, DashboardStats};

/// Data access for analyses.
///
/// Lookups report a missing record as `None` / `false`; errors are reserved
/// for failures of the backing store itself.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Establish the backing connection. Calling it again is a no-op.
    async fn connect(&self) -> ArchLensResult<()>;

    async fn get_analysis_by_id(&self, id: &str) -> ArchLensResult<Option<Analysis>>;

    async fn get_dashboard_stats(&self) -> ArchLensResult<DashboardStats>;

    /// Returns `true` when a record was removed.
    async fn delete_analysis(&self, id: &str) -> ArchLensResult<bool>;

    /// Insert or replace an analysis; a replaced record counts as the newest.
    async fn save_analysis(&self, analysis: &Analysis) -> ArchLensResult<()>;

    /// All analyses, oldest first.
    async fn list_analyses(&self) -> ArchLensResult<Vec<Analysis>>;
}

/// Service handle shared across request handlers.
pub type SharedAnalysisService = Arc<dyn AnalysisService>;

/// Analysis store kept in process memory.
#[derive(Debug, Default)]
pub struct MemoryAnalysisService {
    analyses: RwLock<Vec<Analysis>>,
}

impl MemoryAnalysisService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `analyses`, oldest first.
    pub fn with_analyses(analyses: Vec<Analysis>) -> Self {
        Self {
            analyses: RwLock::new(analyses),
        }
    }
}

#[async_trait]
impl AnalysisService for MemoryAnalysisService {
    async fn connect(&self) -> ArchLensResult<()> {
        Ok(())
    }

    async fn get_analysis_by_id(&self, id: &str) -> ArchLensResult<Option<Analysis>> {
        let analyses = self.analyses.read().await;
        Ok(analyses.iter().find(|a| a.id == id).cloned())
    }

    async fn get_dashboard_stats(&self) -> ArchLensResult<DashboardStats> {
        let analyses = self.analyses.read().await;
        Ok(DashboardStats::from_analyses(&analyses))
    }

    async fn delete_analysis(&self, id: &str) -> ArchLensResult<bool> {
        let mut analyses = self.analyses.write().await;
        let before = analyses.len();
        analyses.retain(|a| a.id != id);
        Ok(analyses.len() != before)
    }

    async fn save_analysis(&self, analysis: &Analysis) -> ArchLensResult<()> {
        let mut analyses = self.analyses.write().await;
        analyses.retain(|a| a.id != analysis.id);
        analyses.push(analysis.clone());
        Ok(())
    }

    async fn list_analyses(&self) -> ArchLensResult<Vec<Analysis>> {
        Ok(self.analyses.read().await.clone())
    }
}

/// Read a JSON array of analyses from disk.
pub fn load_analyses_file(path: &Path) -> ArchLensResult<Vec<Analysis>> {
    let content = std::fs::read_to_string(path)?;
    let analyses: Vec<Analysis> = serde_json::from_str(&content)?;
    debug!(path = %path.display(), count = analyses.len(), "Loaded analyses file");
    Ok(analyses)
}

/// Store every analysis in order. Returns the number written.
pub async fn seed_analyses(
    service: &dyn AnalysisService,
    analyses: &[Analysis],
) -> ArchLensResult<usize> {
    service.connect().await?;
    for analysis in analyses {
        service.save_analysis(analysis).await?;
    }
    info!(count = analyses.len(), "Seeded analyses");
    Ok(analyses.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str, app: &str) -> Analysis {
        Analysis::new(id, app, format!("{}-component", id), format!("{}.rs", id))
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let service = MemoryAnalysisService::new();
        assert!(service.get_analysis_by_id("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_and_get() {
        let service = MemoryAnalysisService::new();
        let analysis = sample("a1", "shop");
        service.save_analysis(&analysis).await.unwrap();

        let found = service.get_analysis_by_id("a1").await.unwrap();
        assert_eq!(found, Some(analysis));
    }

    #[tokio::test]
    async fn test_resave_moves_to_newest() {
        let service = MemoryAnalysisService::with_analyses(vec![
            sample("a1", "shop"),
            sample("a2", "shop"),
        ]);
        service.save_analysis(&sample("a1", "billing")).await.unwrap();

        let ids: Vec<String> = service
            .list_analyses()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec!["a2", "a1"]);
    }

    #[tokio::test]
    async fn test_delete_reports_presence() {
        let service = MemoryAnalysisService::with_analyses(vec![sample("a1", "shop")]);
        assert!(service.delete_analysis("a1").await.unwrap());
        assert!(!service.delete_analysis("a1").await.unwrap());
        assert!(service.get_analysis_by_id("a1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_stats_follow_deletes() {
        let service = MemoryAnalysisService::with_analyses(vec![
            sample("a1", "shop"),
            sample("a2", "billing"),
        ]);
        service.delete_analysis("a2").await.unwrap();

        let stats = service.get_dashboard_stats().await.unwrap();
        assert_eq!(stats.total_analyses, 1);
        assert_eq!(stats.total_apps, 1);
        assert_eq!(stats.recent_analyses[0].id, "a1");
    }

    #[tokio::test]
    async fn test_seed_analyses() {
        let service = MemoryAnalysisService::new();
        let written = seed_analyses(&service, &[sample("a1", "shop"), sample("a2", "shop")])
            .await
            .unwrap();
        assert_eq!(written, 2);
        assert_eq!(service.list_analyses().await.unwrap().len(), 2);
    }

    #[test]
    fn test_load_analyses_file() {
        let path = std::env::temp_dir().join(format!("archlens-seed-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"[{"_id":"a1","appId":"shop","componentName":"Cart","fileName":"cart.ts","depth":3}]"#,
        )
        .unwrap();

        let analyses = load_analyses_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(analyses.len(), 1);
        assert_eq!(analyses[0].extra["depth"], 3);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_analyses_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, crate::ArchLensError::Io(_)));
    }
}
