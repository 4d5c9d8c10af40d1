//! Layer and candidate service types plus comparison tables.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four independently decided architecture concerns.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Layer {
    Compute,
    Database,
    Storage,
    #[serde(rename = "API/Load Balancing")]
    ApiLoadBalancing,
}

impl Layer {
    /// Pipeline order.
    pub const ALL: [Layer; 4] = [
        Layer::Compute,
        Layer::Database,
        Layer::Storage,
        Layer::ApiLoadBalancing,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Compute => "Compute",
            Self::Database => "Database",
            Self::Storage => "Storage",
            Self::ApiLoadBalancing => "API/Load Balancing",
        }
    }

    /// Candidates evaluated for this layer, in table order.
    pub fn candidates(&self) -> &'static [Service] {
        match self {
            Self::Compute => &[Service::Ec2, Service::Ecs, Service::Lambda],
            Self::Database => &[Service::Rds, Service::DynamoDb],
            Self::Storage => &[Service::S3, Service::Ebs, Service::Efs],
            Self::ApiLoadBalancing => &[Service::ApiGateway, Service::Alb],
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A candidate AWS service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Service {
    #[serde(rename = "EC2")]
    Ec2,
    #[serde(rename = "ECS")]
    Ecs,
    Lambda,
    #[serde(rename = "RDS")]
    Rds,
    #[serde(rename = "DynamoDB")]
    DynamoDb,
    S3,
    #[serde(rename = "EBS")]
    Ebs,
    #[serde(rename = "EFS")]
    Efs,
    #[serde(rename = "API Gateway")]
    ApiGateway,
    #[serde(rename = "ALB")]
    Alb,
}

impl Service {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ec2 => "EC2",
            Self::Ecs => "ECS",
            Self::Lambda => "Lambda",
            Self::Rds => "RDS",
            Self::DynamoDb => "DynamoDB",
            Self::S3 => "S3",
            Self::Ebs => "EBS",
            Self::Efs => "EFS",
            Self::ApiGateway => "API Gateway",
            Self::Alb => "ALB",
        }
    }

    pub fn layer(&self) -> Layer {
        match self {
            Self::Ec2 | Self::Ecs | Self::Lambda => Layer::Compute,
            Self::Rds | Self::DynamoDb => Layer::Database,
            Self::S3 | Self::Ebs | Self::Efs => Layer::Storage,
            Self::ApiGateway | Self::Alb => Layer::ApiLoadBalancing,
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of a comparison table. All fields are descriptive prose.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceComparison {
    pub service_name: Service,
    pub cost: String,
    pub scalability: String,
    pub maintenance: String,
    pub performance: String,
    pub best_for: String,
}

/// Every candidate for a single layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LayerComparison {
    pub layer_name: Layer,
    pub services: Vec<ServiceComparison>,
}

impl LayerComparison {
    /// Render as a markdown section with one row per candidate.
    pub fn to_markdown(&self) -> String {
        let mut table = format!("## {} Services\n\n", self.layer_name);
        table.push_str("| Service | Cost | Scaling | Maintenance | Performance | Best For |\n");
        table.push_str("|---------|------|---------|-------------|-------------|----------|\n");

        for s in &self.services {
            table.push_str(&format!(
                "| **{}** | {} | {} | {} | {} | {} |\n",
                s.service_name, s.cost, s.scalability, s.maintenance, s.performance, s.best_for
            ));
        }

        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn services_serialize_with_display_names() {
        assert_eq!(
            serde_json::to_value(Service::ApiGateway).unwrap(),
            serde_json::json!("API Gateway")
        );
        assert_eq!(
            serde_json::to_value(Layer::ApiLoadBalancing).unwrap(),
            serde_json::json!("API/Load Balancing")
        );
    }

    #[test]
    fn candidates_belong_to_their_layer() {
        for layer in Layer::ALL {
            for service in layer.candidates() {
                assert_eq!(service.layer(), layer);
            }
        }
    }
}
