//! Service comparison tables.
//!
//! Purely descriptive: each candidate gets canned prose, with a few cells
//! flavored by budget, traffic, security level or an ML workload. Nothing here
//! is scored and the decision engine never reads these tables.

use crate::domain::comparison::{Layer, LayerComparison, Service, ServiceComparison};
use crate::domain::context::{Level, UserContext};

/// Context facts the table wording branches on.
#[derive(Debug, Clone, Copy)]
struct Flavor {
    low_budget: bool,
    high_traffic: bool,
    high_security: bool,
    ml_workload: bool,
}

impl Flavor {
    fn of(context: &UserContext) -> Self {
        Self {
            low_budget: context.budget == Level::Low,
            high_traffic: context.traffic == Level::High,
            high_security: context.security_level == Level::High,
            ml_workload: context.workload_lower().contains("ml"),
        }
    }
}

fn pick(condition: bool, when_true: &str, otherwise: &str) -> String {
    let text = if condition { when_true } else { otherwise };
    text.to_string()
}

fn row(
    service: Service,
    cost: String,
    scalability: String,
    maintenance: String,
    performance: String,
    best_for: &str,
) -> ServiceComparison {
    ServiceComparison {
        service_name: service,
        cost,
        scalability,
        maintenance,
        performance,
        best_for: best_for.to_string(),
    }
}

fn describe(service: Service, f: Flavor) -> ServiceComparison {
    match service {
        Service::Ec2 => row(
            service,
            pick(
                f.low_budget,
                "Moderate to high - pay for running instances even when idle",
                "Predictable costs with reserved instances, cost-effective at scale",
            ),
            pick(
                f.high_traffic,
                "Excellent - manual or auto-scaling groups, handles high sustained load",
                "Good - requires configuration of auto-scaling groups",
            ),
            "High - requires OS patching, security updates, monitoring, and infrastructure management".into(),
            pick(
                f.ml_workload,
                "Excellent - full control over hardware, GPU support, ideal for ML workloads",
                "Excellent - full control over resources, consistent performance",
            ),
            "Long-running applications, complex workloads, ML/AI, applications requiring specific OS configurations",
        ),
        Service::Ecs => row(
            service,
            pick(
                f.low_budget,
                "Moderate - pay for underlying EC2/Fargate, better than raw EC2 for variable loads",
                "Cost-effective with Fargate for containerized apps, no idle costs with proper scaling",
            ),
            "Excellent - automatic container orchestration, scales containers independently".into(),
            "Medium - AWS manages orchestration, you manage container images and task definitions".into(),
            "Excellent - efficient resource utilization through containerization, fast deployment".into(),
            "Containerized applications, microservices, applications needing orchestration",
        ),
        Service::Lambda => row(
            service,
            pick(
                f.low_budget,
                "Excellent - pay only for execution time, no idle costs, generous free tier",
                "Cost-effective for variable workloads, can be expensive at very high scale",
            ),
            pick(
                f.high_traffic,
                "Good - automatic scaling but may hit concurrency limits at extreme scale",
                "Excellent - automatic scaling, handles variable load perfectly",
            ),
            "Very Low - fully managed, no infrastructure to maintain, automatic scaling".into(),
            pick(
                f.ml_workload,
                "Limited - 15-minute execution limit, not suitable for long-running ML training",
                "Good - cold starts can add latency, excellent for event-driven workloads",
            ),
            "Event-driven applications, APIs with variable traffic, serverless architectures, startups",
        ),
        Service::Rds => row(
            service,
            pick(
                f.low_budget,
                "Moderate to high - pay for running instances even during low usage",
                "Predictable costs, cost-effective for steady workloads with reserved instances",
            ),
            pick(
                f.high_traffic,
                "Good - vertical scaling and read replicas, but requires planning",
                "Moderate - vertical scaling has downtime, read replicas help with reads",
            ),
            pick(
                f.high_security,
                "Low - AWS manages patching and backups, strong compliance features (encryption, audit logs)",
                "Low - AWS manages patching, backups, and infrastructure",
            ),
            "Excellent - consistent performance, complex queries, ACID transactions, relational integrity".into(),
            "Relational data, complex queries, transactions, existing SQL applications, enterprise apps",
        ),
        Service::DynamoDb => row(
            service,
            pick(
                f.low_budget,
                "Good - pay per request option available, scales to zero, generous free tier",
                "Cost-effective at scale with provisioned capacity, can be expensive for small workloads",
            ),
            "Excellent - automatic horizontal scaling, handles massive scale seamlessly".into(),
            "Very Low - fully managed, automatic scaling, no infrastructure management".into(),
            pick(
                f.high_traffic,
                "Excellent - single-digit millisecond latency at any scale, perfect for high-traffic apps",
                "Excellent - consistent low latency, but limited query flexibility",
            ),
            "Key-value data, high-traffic applications, serverless architectures, simple access patterns",
        ),
        Service::S3 => row(
            service,
            "Excellent - pay only for storage used, very low cost per GB, lifecycle policies reduce costs".into(),
            "Excellent - unlimited storage, automatic scaling, globally distributed".into(),
            "Very Low - fully managed, automatic durability (99.999999999%), no infrastructure".into(),
            "Good - high throughput for large files, not suitable for low-latency random access".into(),
            "Object storage, static files, backups, data lakes, media files, serverless architectures",
        ),
        Service::Ebs => row(
            service,
            pick(
                f.low_budget,
                "Moderate - pay for provisioned storage even if unused, snapshots add cost",
                "Predictable costs, cost-effective for applications needing block storage",
            ),
            "Limited - attached to single EC2 instance, requires manual volume resizing".into(),
            "Low - AWS manages physical storage, you manage volumes and snapshots".into(),
            "Excellent - low latency, high IOPS, ideal for databases and applications needing block storage".into(),
            "EC2 instance storage, databases, applications requiring low-latency block storage",
        ),
        Service::Efs => row(
            service,
            "Moderate to high - more expensive than S3, pay for storage used with lifecycle management".into(),
            "Excellent - automatically scales, shared across multiple instances".into(),
            "Very Low - fully managed, automatic scaling, no capacity planning".into(),
            "Good - shared file system performance, suitable for concurrent access".into(),
            "Shared file storage, content management, web serving, applications needing NFS",
        ),
        Service::ApiGateway => {
            let cost = if f.high_traffic {
                "Expensive at high scale - pay per million requests, costs add up quickly"
            } else if f.low_budget {
                "Good - pay per request, no minimum costs, generous free tier"
            } else {
                "Moderate - pay per request model works well for variable traffic"
            };
            row(
                service,
                cost.into(),
                "Excellent - automatic scaling, handles traffic spikes seamlessly".into(),
                "Very Low - fully managed, built-in features (throttling, caching, auth)".into(),
                "Good - adds some latency, excellent for serverless and microservices".into(),
                "Serverless APIs, Lambda integration, REST/WebSocket APIs, low to medium traffic, startups",
            )
        }
        Service::Alb => row(
            service,
            pick(
                f.high_traffic,
                "Cost-effective at high scale - fixed hourly cost plus data processing, better economics at volume",
                "Moderate - fixed hourly cost regardless of traffic, less economical for low traffic",
            ),
            "Excellent - automatic scaling, handles millions of requests".into(),
            "Low - managed by AWS, requires configuration of target groups and health checks".into(),
            pick(
                f.high_traffic,
                "Excellent - very low latency, optimized for high throughput",
                "Excellent - consistent low latency, efficient routing",
            ),
            "High-traffic applications, EC2/ECS workloads, applications needing advanced routing, enterprise apps",
        ),
    }
}

/// Build the comparison table for one layer.
pub fn compare_layer(layer: Layer, context: &UserContext) -> LayerComparison {
    let flavor = Flavor::of(context);
    LayerComparison {
        layer_name: layer,
        services: layer
            .candidates()
            .iter()
            .map(|&service| describe(service, flavor))
            .collect(),
    }
}

pub fn compare_compute(context: &UserContext) -> LayerComparison {
    compare_layer(Layer::Compute, context)
}

pub fn compare_database(context: &UserContext) -> LayerComparison {
    compare_layer(Layer::Database, context)
}

pub fn compare_storage(context: &UserContext) -> LayerComparison {
    compare_layer(Layer::Storage, context)
}

pub fn compare_api(context: &UserContext) -> LayerComparison {
    compare_layer(Layer::ApiLoadBalancing, context)
}

/// All four tables in pipeline order.
pub fn compare_all(context: &UserContext) -> Vec<LayerComparison> {
    Layer::ALL
        .iter()
        .map(|&layer| compare_layer(layer, context))
        .collect()
}
