//! Analysis domain models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Number of entries kept in `DashboardStats::recent_analyses`.
pub const RECENT_ANALYSES_LIMIT: usize = 5;

/// A stored architecture analysis of a single component.
///
/// Only the identifying fields are typed. Everything else the producer
/// stored is kept in `extra` and written back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Analysis {
    /// Create an analysis with no additional content.
    pub fn new(
        id: impl Into<String>,
        app_id: impl Into<String>,
        component_name: impl Into<String>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            app_id: Some(app_id.into()),
            component_name: Some(component_name.into()),
            file_name: Some(file_name.into()),
            extra: Map::new(),
        }
    }

    /// Attach an extra field, replacing any previous value.
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Parse from a stored JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Identifying fields of an analysis, listed on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

impl From<&Analysis> for AnalysisSummary {
    fn from(analysis: &Analysis) -> Self {
        Self {
            id: analysis.id.clone(),
            app_id: analysis.app_id.clone(),
            component_name: analysis.component_name.clone(),
            file_name: analysis.file_name.clone(),
        }
    }
}

/// Aggregate figures shown on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_analyses: usize,
    pub total_apps: usize,
    pub components_by_app: BTreeMap<String, usize>,
    pub recent_analyses: Vec<AnalysisSummary>,
}

impl DashboardStats {
    /// Aggregate analyses given oldest first.
    pub fn from_analyses(analyses: &[Analysis]) -> Self {
        let mut components_by_app = BTreeMap::new();
        for app_id in analyses.iter().filter_map(|a| a.app_id.as_deref()) {
            *components_by_app.entry(app_id.to_string()).or_insert(0) += 1;
        }

        let recent_analyses = analyses
            .iter()
            .rev()
            .take(RECENT_ANALYSES_LIMIT)
            .map(AnalysisSummary::from)
            .collect();

        Self {
            total_analyses: analyses.len(),
            total_apps: components_by_app.len(),
            components_by_app,
            recent_analyses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_analysis_keeps_unknown_fields() {
        let raw = json!({
            "_id": "a1",
            "appId": "shop",
            "componentName": "Cart",
            "fileName": "cart.ts",
            "layers": ["ui", "domain"],
            "score": 7.5
        });

        let analysis: Analysis = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(analysis.id, "a1");
        assert_eq!(analysis.app_id.as_deref(), Some("shop"));
        assert_eq!(analysis.extra["score"], json!(7.5));
        assert_eq!(serde_json::to_value(&analysis).unwrap(), raw);
    }

    #[test]
    fn test_analysis_without_optional_fields() {
        let analysis = Analysis::from_json(r#"{"_id":"bare"}"#).unwrap();
        assert!(analysis.app_id.is_none());
        assert_eq!(analysis.to_json().unwrap(), r#"{"_id":"bare"}"#);
    }

    #[test]
    fn test_stats_aggregation() {
        let analyses: Vec<Analysis> = (0..7)
            .map(|i| {
                let app = if i % 2 == 0 { "shop" } else { "billing" };
                Analysis::new(format!("a{}", i), app, format!("C{}", i), "x.ts")
            })
            .collect();

        let stats = DashboardStats::from_analyses(&analyses);
        assert_eq!(stats.total_analyses, 7);
        assert_eq!(stats.total_apps, 2);
        assert_eq!(stats.components_by_app["shop"], 4);
        assert_eq!(stats.components_by_app["billing"], 3);
        assert_eq!(stats.recent_analyses.len(), RECENT_ANALYSES_LIMIT);
        assert_eq!(stats.recent_analyses[0].id, "a6");
        assert_eq!(stats.recent_analyses[4].id, "a2");
    }

    #[test]
    fn test_stats_wire_format() {
        let stats = DashboardStats::from_analyses(&[]);
        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(
            value,
            json!({
                "totalAnalyses": 0,
                "totalApps": 0,
                "componentsByApp": {},
                "recentAnalyses": []
            })
        );
    }
}
