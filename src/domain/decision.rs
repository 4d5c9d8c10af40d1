//! Per-layer decision records.

use serde::{Deserialize, Serialize};

use super::comparison::{Layer, Service};

/// An alternative that lost, and why.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RejectedAlternative {
    pub service_name: Service,
    pub rejection_reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecommendation {
    pub service_name: Service,
    pub reason: String,
    pub alternatives: Vec<RejectedAlternative>,
}

/// The single chosen service for a layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LayerDecision {
    pub layer_name: Layer,
    /// Name of the rule that fired.
    pub rule: String,
    pub recommendation: ServiceRecommendation,
}

impl LayerDecision {
    pub fn service(&self) -> Service {
        self.recommendation.service_name
    }
}
