//! Response DTOs for a finished recommendation.

use serde::{Deserialize, Serialize};

use super::architecture::ArchitectureRecommendation;
use super::comparison::LayerComparison;
use super::context::Level;

/// Comparison tables keyed by layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonTables {
    pub compute: LayerComparison,
    pub database: LayerComparison,
    pub storage: LayerComparison,
    pub api_load_balancing: LayerComparison,
}

impl ComparisonTables {
    /// Tables in pipeline order.
    pub fn iter(&self) -> impl Iterator<Item = &LayerComparison> {
        [
            &self.compute,
            &self.database,
            &self.storage,
            &self.api_load_balancing,
        ]
        .into_iter()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CostTradeoffSummary {
    pub estimated_cost_level: Level,
    pub gains: Vec<String>,
    pub sacrifices: Vec<String>,
}

/// Complete recommendation returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FormattedOutput {
    pub user_context_summary: String,
    pub comparison_tables: ComparisonTables,
    /// Markdown, starting with `## Decision Analysis`.
    pub decision_analysis: String,
    /// Markdown, starting with `## Final Recommended Architecture`.
    pub final_architecture: String,
    pub cost_tradeoff_summary: CostTradeoffSummary,
    pub architecture: ArchitectureRecommendation,
}
