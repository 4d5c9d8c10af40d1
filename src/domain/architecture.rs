//! Whole-stack architecture types.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::comparison::Service;

/// Named classification of the four chosen services.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ArchitecturePattern {
    /// Lambda + DynamoDB + API Gateway
    #[serde(rename = "fully-serverless")]
    Serverless,
    /// EC2 + RDS + ALB
    #[serde(rename = "fully-traditional")]
    Traditional,
    /// Any stack computing on ECS
    #[serde(rename = "containerized")]
    Containerized,
    /// Lambda + RDS
    #[serde(rename = "hybrid-serverless-relational")]
    HybridServerlessRelational,
    /// EC2 + DynamoDB
    #[serde(rename = "hybrid-traditional-nosql")]
    HybridTraditionalNoSql,
    #[serde(rename = "generic")]
    Generic,
}

impl ArchitecturePattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Serverless => "fully-serverless",
            Self::Traditional => "fully-traditional",
            Self::Containerized => "containerized",
            Self::HybridServerlessRelational => "hybrid-serverless-relational",
            Self::HybridTraditionalNoSql => "hybrid-traditional-nosql",
            Self::Generic => "generic",
        }
    }
}

impl fmt::Display for ArchitecturePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The synthesized stack with its narrative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArchitectureRecommendation {
    pub compute: Service,
    pub database: Service,
    pub storage: Service,
    pub api_load_balancing: Service,
    pub pattern: ArchitecturePattern,
    /// Why the combination works.
    pub rationale: String,
    /// How the pieces connect.
    pub integration: String,
}
