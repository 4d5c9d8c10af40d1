//! Architecture synthesis
//!
//! Turns the four layer decisions into a named pattern with a canned rationale,
//! and builds the integration narrative clause by clause.

use crate::domain::architecture::{ArchitecturePattern, ArchitectureRecommendation};
use crate::domain::comparison::{Layer, Service};
use crate::domain::decision::LayerDecision;

/// Used only when a layer decision is absent, which the pipeline never produces.
fn default_service(layer: Layer) -> Service {
    match layer {
        Layer::Compute => Service::Lambda,
        Layer::Database => Service::DynamoDb,
        Layer::Storage => Service::S3,
        Layer::ApiLoadBalancing => Service::ApiGateway,
    }
}

fn chosen(decisions: &[LayerDecision], layer: Layer) -> Service {
    decisions
        .iter()
        .find(|d| d.layer_name == layer)
        .map(LayerDecision::service)
        .unwrap_or_else(|| {
            tracing::warn!(layer = %layer, "Missing layer decision, using default service");
            default_service(layer)
        })
}

/// Classify a stack. Checked in order; storage never affects the pattern.
pub fn classify(compute: Service, database: Service, api: Service) -> ArchitecturePattern {
    use Service::*;

    match (compute, database, api) {
        (Lambda, DynamoDb, ApiGateway) => ArchitecturePattern::Serverless,
        (Ec2, Rds, Alb) => ArchitecturePattern::Traditional,
        (Ecs, _, _) => ArchitecturePattern::Containerized,
        (Lambda, Rds, _) => ArchitecturePattern::HybridServerlessRelational,
        (Ec2, DynamoDb, _) => ArchitecturePattern::HybridTraditionalNoSql,
        _ => ArchitecturePattern::Generic,
    }
}

pub fn rationale(pattern: ArchitecturePattern) -> &'static str {
    match pattern {
        ArchitecturePattern::Serverless => "This serverless architecture provides optimal cost-efficiency with pay-per-use pricing across all layers, automatic scaling without capacity planning, and minimal operational overhead. The combination of Lambda, DynamoDB, API Gateway, and S3 creates a fully managed stack that scales seamlessly from zero to massive traffic while maintaining low latency.",
        ArchitecturePattern::Traditional => "This traditional architecture provides maximum control and predictable performance. EC2 offers full infrastructure control, RDS provides robust relational database capabilities with ACID transactions, ALB delivers efficient load balancing at scale, and the combination supports complex enterprise workloads with proven reliability.",
        ArchitecturePattern::Containerized => "This containerized architecture balances operational efficiency with flexibility. ECS provides excellent orchestration for microservices, enabling independent scaling of components while maintaining lower operational overhead than raw EC2. The architecture supports modern DevOps practices with efficient resource utilization.",
        ArchitecturePattern::HybridServerlessRelational => "This hybrid architecture combines serverless compute benefits with relational database capabilities. Lambda provides cost-efficient, auto-scaling compute while RDS offers robust data integrity and complex query support. This combination works well for applications needing both serverless benefits and relational data features.",
        ArchitecturePattern::HybridTraditionalNoSql => "This architecture pairs traditional compute control with modern NoSQL scalability. EC2 provides the control needed for complex workloads while DynamoDB offers seamless scaling and low-latency data access. This combination suits applications requiring both compute flexibility and database performance at scale.",
        ArchitecturePattern::Generic => "This architecture is optimized for your specific requirements, balancing cost, performance, scalability, and operational overhead across all layers. Each service selection addresses your stated needs while maintaining compatibility and efficient integration.",
    }
}

fn api_clause(api: Service, compute: Service) -> &'static str {
    match (api, compute) {
        (Service::ApiGateway, Service::Lambda) => "API Gateway receives incoming requests and triggers Lambda functions directly through native integration.",
        (Service::ApiGateway, _) => "API Gateway routes requests to your compute layer through HTTP integration.",
        _ => "Application Load Balancer distributes traffic across your compute instances with health checks and automatic failover.",
    }
}

fn database_clause(compute: Service, database: Service) -> String {
    match compute {
        Service::Lambda => format!("Lambda functions connect to {database} using AWS SDK, with connection pooling managed through environment variables or Lambda layers."),
        Service::Ecs => format!("ECS containers connect to {database} using connection strings stored in AWS Secrets Manager or Parameter Store."),
        _ => format!("EC2 instances connect to {database} through VPC networking with security groups controlling access."),
    }
}

fn storage_clauses(storage: Service, compute: Service) -> Vec<&'static str> {
    match storage {
        Service::S3 => {
            let mut clauses = vec!["S3 stores static assets, user uploads, and backups, accessible via AWS SDK from your compute layer."];
            if compute == Service::Lambda {
                clauses.push("Lambda can be triggered by S3 events for automated processing.");
            }
            clauses
        }
        Service::Ebs => vec!["EBS volumes attach directly to EC2 instances providing block-level storage for databases and applications."],
        _ => vec!["EFS provides shared file storage accessible from multiple compute instances simultaneously."],
    }
}

fn network_clause(compute: Service, database: Service) -> &'static str {
    if compute == Service::Lambda && database == Service::DynamoDb {
        "All services communicate securely using IAM roles and policies, with no VPC configuration required for basic setups."
    } else {
        "Services communicate within a VPC with security groups and network ACLs controlling traffic flow, ensuring secure and isolated networking."
    }
}

/// API ingress, then data access, then storage, then network posture.
pub fn integration(compute: Service, database: Service, storage: Service, api: Service) -> String {
    let mut clauses: Vec<String> = vec![
        api_clause(api, compute).to_string(),
        database_clause(compute, database),
    ];
    clauses.extend(storage_clauses(storage, compute).into_iter().map(str::to_string));
    clauses.push(network_clause(compute, database).to_string());
    clauses.join(" ")
}

/// Combine layer decisions into one recommendation.
pub fn synthesize(decisions: &[LayerDecision]) -> ArchitectureRecommendation {
    let compute = chosen(decisions, Layer::Compute);
    let database = chosen(decisions, Layer::Database);
    let storage = chosen(decisions, Layer::Storage);
    let api_load_balancing = chosen(decisions, Layer::ApiLoadBalancing);

    let pattern = classify(compute, database, api_load_balancing);

    ArchitectureRecommendation {
        compute,
        database,
        storage,
        api_load_balancing,
        pattern,
        rationale: rationale(pattern).to_string(),
        integration: integration(compute, database, storage, api_load_balancing),
    }
}
