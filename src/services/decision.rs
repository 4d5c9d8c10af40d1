//! Decision engine
//!
//! Each layer is decided by an ordered rule table. Rules are tried in order and
//! the first whose predicate holds wins; if none hold, the table's fallback
//! verdict applies. Predicates overlap on purpose (a low-budget ML startup
//! matches three compute rules), so table order *is* the precedence:
//!
//! - Compute: ML workload, then low budget + low traffic, then startup or low
//!   budget, then high traffic, then the Lambda fallback.
//! - Database: high security, then enterprise, then high traffic, then low
//!   budget, then the DynamoDB fallback.
//! - Storage: always S3.
//! - API/Load Balancing: high traffic, then low budget or low traffic, then
//!   the API Gateway fallback.
//!
//! Decisions depend only on the context. The comparison table is accepted for
//! symmetry with the comparison stage but never consulted.

use crate::domain::comparison::{Layer, LayerComparison, Service};
use crate::domain::context::{Level, UserContext};
use crate::domain::decision::{LayerDecision, RejectedAlternative, ServiceRecommendation};

/// Boolean facts the rules are written against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signals {
    pub ml_workload: bool,
    pub startup: bool,
    pub enterprise: bool,
    pub budget: Level,
    pub traffic: Level,
    pub security: Level,
}

impl Signals {
    /// Substring checks are case-insensitive. Note that "ml" also matches
    /// workloads such as "HTML app".
    pub fn from_context(context: &UserContext) -> Self {
        let workload = context.workload_lower();
        let app_type = context.app_type_lower();
        Self {
            ml_workload: workload.contains("ml") || workload.contains("machine learning"),
            startup: app_type.contains("startup"),
            enterprise: app_type.contains("enterprise"),
            budget: context.budget,
            traffic: context.traffic,
            security: context.security_level,
        }
    }

    fn low_budget(&self) -> bool {
        self.budget == Level::Low
    }

    fn low_traffic(&self) -> bool {
        self.traffic == Level::Low
    }

    fn high_traffic(&self) -> bool {
        self.traffic == Level::High
    }

    fn high_security(&self) -> bool {
        self.security == Level::High
    }
}

/// Canned outcome of a rule.
#[derive(Debug)]
pub struct Verdict {
    pub service: Service,
    pub reason: &'static str,
    pub rejected: &'static [(Service, &'static str)],
}

impl Verdict {
    fn to_recommendation(&self) -> ServiceRecommendation {
        ServiceRecommendation {
            service_name: self.service,
            reason: self.reason.to_string(),
            alternatives: self
                .rejected
                .iter()
                .map(|&(service, reason)| RejectedAlternative {
                    service_name: service,
                    rejection_reason: reason.to_string(),
                })
                .collect(),
        }
    }
}

pub struct Rule {
    pub name: &'static str,
    pub applies: fn(&Signals) -> bool,
    pub verdict: Verdict,
}

/// Ordered rules plus the verdict used when none match.
pub struct RuleSet {
    pub layer: Layer,
    pub rules: &'static [Rule],
    pub fallback: Verdict,
}

pub const FALLBACK_RULE: &str = "default";

impl RuleSet {
    /// First matching rule wins.
    pub fn evaluate(&self, signals: &Signals) -> (&'static str, &Verdict) {
        self.rules
            .iter()
            .find(|rule| (rule.applies)(signals))
            .map(|rule| (rule.name, &rule.verdict))
            .unwrap_or((FALLBACK_RULE, &self.fallback))
    }
}

// --- Compute ---------------------------------------------------------------

fn ml_workload(s: &Signals) -> bool {
    s.ml_workload
}

fn low_budget_and_low_traffic(s: &Signals) -> bool {
    s.low_budget() && s.low_traffic()
}

fn startup_or_low_budget(s: &Signals) -> bool {
    s.startup || (s.low_budget() && !s.ml_workload)
}

fn high_traffic(s: &Signals) -> bool {
    s.high_traffic()
}

pub static COMPUTE_RULES: RuleSet = RuleSet {
    layer: Layer::Compute,
    rules: &[
        Rule {
            name: "ml-workload",
            applies: ml_workload,
            verdict: Verdict {
                service: Service::Ec2,
                reason: "EC2 provides full control over hardware with GPU support, essential for ML workloads that require long execution times and specialized compute resources.",
                rejected: &[
                    (Service::Ecs, "While ECS can handle ML workloads, EC2 provides more direct hardware control and is better suited for intensive ML training."),
                    (Service::Lambda, "Lambda has a 15-minute execution limit, making it unsuitable for ML training workloads that typically run for hours."),
                ],
            },
        },
        Rule {
            name: "low-budget-low-traffic",
            applies: low_budget_and_low_traffic,
            verdict: Verdict {
                service: Service::Lambda,
                reason: "Lambda is ideal for your low budget and low traffic scenario - you only pay for actual execution time with no idle costs, and the generous free tier further reduces expenses.",
                rejected: &[
                    (Service::Ec2, "EC2 requires paying for running instances even when idle, which is cost-inefficient for low traffic applications."),
                    (Service::Ecs, "ECS still requires underlying compute resources (EC2 or Fargate) that incur costs even during low usage periods."),
                ],
            },
        },
        Rule {
            name: "startup-or-low-budget",
            applies: startup_or_low_budget,
            verdict: Verdict {
                service: Service::Lambda,
                reason: "Lambda offers the best balance for startups - minimal operational overhead, automatic scaling, and pay-per-use pricing that grows with your business.",
                rejected: &[
                    (Service::Ec2, "EC2 requires significant operational overhead for management, patching, and scaling - resources better spent on product development."),
                    (Service::Ecs, "ECS adds container orchestration complexity that may be premature for early-stage startups."),
                ],
            },
        },
        Rule {
            name: "high-traffic",
            applies: high_traffic,
            verdict: Verdict {
                service: Service::Ecs,
                reason: "ECS provides excellent scalability and resource efficiency for high-traffic applications through container orchestration, with lower operational overhead than raw EC2.",
                rejected: &[
                    (Service::Ec2, "While EC2 handles high traffic well, ECS provides better resource utilization and easier scaling through containerization."),
                    (Service::Lambda, "Lambda can become expensive at very high sustained traffic levels, and may hit concurrency limits at extreme scale."),
                ],
            },
        },
    ],
    fallback: Verdict {
        service: Service::Lambda,
        reason: "Lambda provides the best balance of cost-efficiency, automatic scaling, and minimal operational overhead for your use case.",
        rejected: &[
            (Service::Ec2, "EC2 requires more operational overhead and incurs costs even during idle periods."),
            (Service::Ecs, "ECS adds container orchestration complexity that may not be necessary for your workload."),
        ],
    },
};

// --- Database --------------------------------------------------------------

fn high_security(s: &Signals) -> bool {
    s.high_security()
}

fn enterprise(s: &Signals) -> bool {
    s.enterprise
}

fn low_budget(s: &Signals) -> bool {
    s.low_budget()
}

pub static DATABASE_RULES: RuleSet = RuleSet {
    layer: Layer::Database,
    rules: &[
        Rule {
            name: "high-security",
            applies: high_security,
            verdict: Verdict {
                service: Service::Rds,
                reason: "RDS provides robust security features including encryption at rest and in transit, automated backups, and audit logging - essential for high-security requirements and compliance.",
                rejected: &[
                    (Service::DynamoDb, "While DynamoDB offers encryption, RDS provides more comprehensive compliance features and audit capabilities required for high-security environments."),
                ],
            },
        },
        Rule {
            name: "enterprise",
            applies: enterprise,
            verdict: Verdict {
                service: Service::Rds,
                reason: "RDS offers enterprise-grade reliability, ACID transactions, and familiar SQL interfaces that integrate well with existing enterprise applications.",
                rejected: &[
                    (Service::DynamoDb, "DynamoDB's NoSQL model may require significant application changes and lacks the relational integrity features enterprise applications often depend on."),
                ],
            },
        },
        Rule {
            name: "high-traffic",
            applies: high_traffic,
            verdict: Verdict {
                service: Service::DynamoDb,
                reason: "DynamoDB excels at high-traffic scenarios with single-digit millisecond latency at any scale, automatic horizontal scaling, and no performance degradation as traffic grows.",
                rejected: &[
                    (Service::Rds, "RDS requires careful capacity planning and read replicas for high traffic, and vertical scaling has limitations compared to DynamoDB's seamless horizontal scaling."),
                ],
            },
        },
        Rule {
            name: "low-budget",
            applies: low_budget,
            verdict: Verdict {
                service: Service::DynamoDb,
                reason: "DynamoDB's pay-per-request pricing model is ideal for low budgets - you only pay for actual usage with no minimum costs, and it scales to zero during idle periods.",
                rejected: &[
                    (Service::Rds, "RDS requires paying for running database instances even during low usage, making it less cost-effective for budget-constrained applications."),
                ],
            },
        },
    ],
    fallback: Verdict {
        service: Service::DynamoDb,
        reason: "DynamoDB provides excellent scalability, minimal operational overhead, and cost-effective pay-per-use pricing that aligns well with modern application architectures.",
        rejected: &[
            (Service::Rds, "RDS requires more operational management and capacity planning, with higher baseline costs due to always-running instances."),
        ],
    },
};

// --- Storage ---------------------------------------------------------------

pub static STORAGE_RULES: RuleSet = RuleSet {
    layer: Layer::Storage,
    rules: &[],
    fallback: Verdict {
        service: Service::S3,
        reason: "S3 provides unlimited scalable object storage at very low cost, perfect for static assets, backups, and data storage. It integrates seamlessly with serverless architectures and requires zero operational overhead.",
        rejected: &[
            (Service::Ebs, "EBS is block storage tied to EC2 instances, only necessary if you're running databases or applications that require low-latency block-level access. For general storage needs, S3 is more cost-effective and scalable."),
            (Service::Efs, "EFS is more expensive than S3 and is only needed when you require a shared file system across multiple instances. For object storage and static content, S3 is the better choice."),
        ],
    },
};

// --- API / Load Balancing ---------------------------------------------------

fn low_budget_or_low_traffic(s: &Signals) -> bool {
    s.low_budget() || s.low_traffic()
}

pub static API_RULES: RuleSet = RuleSet {
    layer: Layer::ApiLoadBalancing,
    rules: &[
        Rule {
            name: "high-traffic",
            applies: high_traffic,
            verdict: Verdict {
                service: Service::Alb,
                reason: "ALB is more cost-effective at high traffic volumes with its fixed hourly cost plus data processing fees. It provides excellent performance and low latency for high-throughput applications.",
                rejected: &[
                    (Service::ApiGateway, "API Gateway's per-request pricing becomes expensive at high traffic volumes. ALB offers better economics and lower latency for sustained high-traffic scenarios."),
                ],
            },
        },
        Rule {
            name: "low-budget-or-low-traffic",
            applies: low_budget_or_low_traffic,
            verdict: Verdict {
                service: Service::ApiGateway,
                reason: "API Gateway's pay-per-request model is ideal for low traffic - you only pay for actual API calls with no minimum costs. It includes built-in features like throttling, caching, and authentication.",
                rejected: &[
                    (Service::Alb, "ALB has a fixed hourly cost regardless of traffic volume, making it less economical for low-traffic applications where API Gateway's pay-per-request model is more cost-effective."),
                ],
            },
        },
    ],
    fallback: Verdict {
        service: Service::ApiGateway,
        reason: "API Gateway integrates seamlessly with Lambda and provides a fully managed API solution with built-in features for authentication, throttling, and monitoring.",
        rejected: &[
            (Service::Alb, "ALB is better suited for EC2/ECS workloads. For serverless architectures, API Gateway provides better integration and more API-specific features."),
        ],
    },
};

pub fn rules_for(layer: Layer) -> &'static RuleSet {
    match layer {
        Layer::Compute => &COMPUTE_RULES,
        Layer::Database => &DATABASE_RULES,
        Layer::Storage => &STORAGE_RULES,
        Layer::ApiLoadBalancing => &API_RULES,
    }
}

/// Decide a single layer from the context alone.
pub fn decide_layer(layer: Layer, context: &UserContext) -> LayerDecision {
    let signals = Signals::from_context(context);
    let (rule, verdict) = rules_for(layer).evaluate(&signals);

    tracing::debug!(
        layer = %layer,
        rule = rule,
        service = %verdict.service,
        "Layer decided"
    );

    LayerDecision {
        layer_name: layer,
        rule: rule.to_string(),
        recommendation: verdict.to_recommendation(),
    }
}

pub fn decide_compute(context: &UserContext, _comparison: &LayerComparison) -> LayerDecision {
    decide_layer(Layer::Compute, context)
}

pub fn decide_database(context: &UserContext, _comparison: &LayerComparison) -> LayerDecision {
    decide_layer(Layer::Database, context)
}

pub fn decide_storage(context: &UserContext, _comparison: &LayerComparison) -> LayerDecision {
    decide_layer(Layer::Storage, context)
}

pub fn decide_api(context: &UserContext, _comparison: &LayerComparison) -> LayerDecision {
    decide_layer(Layer::ApiLoadBalancing, context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::context::ExpectedUsers;

    fn context(
        app_type: &str,
        budget: Level,
        traffic: Level,
        security: Level,
        workload: &str,
    ) -> UserContext {
        UserContext {
            app_type: app_type.into(),
            budget,
            expected_users: ExpectedUsers::default(),
            traffic,
            security_level: security,
            workload_type: workload.into(),
            project_description: None,
        }
    }

    fn every_context() -> Vec<UserContext> {
        let mut all = Vec::new();
        for app in ["Startup", "Enterprise", "SaaS"] {
            for workload in ["API-based", "Machine Learning", "Web App"] {
                for budget in Level::ALL {
                    for traffic in Level::ALL {
                        for security in Level::ALL {
                            all.push(context(app, budget, traffic, security, workload));
                        }
                    }
                }
            }
        }
        all
    }

    fn chosen(layer: Layer, ctx: &UserContext) -> (Service, String) {
        let decision = decide_layer(layer, ctx);
        (decision.service(), decision.rule)
    }

    #[test]
    fn ml_rule_wins_over_startup_and_low_budget() {
        let ctx = context("Startup", Level::Low, Level::Low, Level::Low, "ML pipeline");
        assert_eq!(
            chosen(Layer::Compute, &ctx),
            (Service::Ec2, "ml-workload".to_string())
        );
    }

    #[test]
    fn compute_rule_order() {
        let low_low = context("SaaS", Level::Low, Level::Low, Level::Medium, "Web App");
        assert_eq!(chosen(Layer::Compute, &low_low).1, "low-budget-low-traffic");

        let startup_high = context("Startup", Level::High, Level::High, Level::Medium, "Web App");
        assert_eq!(
            chosen(Layer::Compute, &startup_high),
            (Service::Lambda, "startup-or-low-budget".to_string())
        );

        let high_traffic = context("SaaS", Level::Medium, Level::High, Level::Medium, "Web App");
        assert_eq!(
            chosen(Layer::Compute, &high_traffic),
            (Service::Ecs, "high-traffic".to_string())
        );

        let plain = context("SaaS", Level::Medium, Level::Medium, Level::Medium, "Web App");
        assert_eq!(
            chosen(Layer::Compute, &plain),
            (Service::Lambda, FALLBACK_RULE.to_string())
        );
    }

    #[test]
    fn html_workload_counts_as_ml() {
        let ctx = context("SaaS", Level::Medium, Level::Medium, Level::Medium, "HTML site");
        assert_eq!(chosen(Layer::Compute, &ctx).0, Service::Ec2);
    }

    #[test]
    fn database_security_reason_beats_enterprise_reason() {
        let secure = context("Enterprise", Level::High, Level::High, Level::High, "Web App");
        let decision = decide_layer(Layer::Database, &secure);
        assert_eq!(decision.service(), Service::Rds);
        assert_eq!(decision.rule, "high-security");
        assert!(decision.recommendation.reason.contains("security"));

        let enterprise = context("Enterprise", Level::High, Level::High, Level::Medium, "Web App");
        let decision = decide_layer(Layer::Database, &enterprise);
        assert_eq!(decision.service(), Service::Rds);
        assert_eq!(decision.rule, "enterprise");
    }

    #[test]
    fn database_falls_through_to_dynamodb() {
        let high = context("SaaS", Level::Medium, Level::High, Level::Medium, "Web App");
        assert_eq!(chosen(Layer::Database, &high).1, "high-traffic");
        let low = context("SaaS", Level::Low, Level::Medium, Level::Low, "Web App");
        assert_eq!(chosen(Layer::Database, &low).1, "low-budget");
        let plain = context("SaaS", Level::Medium, Level::Medium, Level::Low, "Web App");
        assert_eq!(
            chosen(Layer::Database, &plain),
            (Service::DynamoDb, FALLBACK_RULE.to_string())
        );
    }

    #[test]
    fn api_rule_order() {
        let high = context("SaaS", Level::Low, Level::High, Level::Medium, "API");
        assert_eq!(chosen(Layer::ApiLoadBalancing, &high).0, Service::Alb);
        let low = context("SaaS", Level::High, Level::Low, Level::Medium, "API");
        assert_eq!(
            chosen(Layer::ApiLoadBalancing, &low),
            (Service::ApiGateway, "low-budget-or-low-traffic".to_string())
        );
        let plain = context("SaaS", Level::High, Level::Medium, Level::Medium, "API");
        assert_eq!(
            chosen(Layer::ApiLoadBalancing, &plain),
            (Service::ApiGateway, FALLBACK_RULE.to_string())
        );
    }

    #[test]
    fn storage_is_always_s3_with_fixed_alternatives() {
        for ctx in every_context() {
            let decision = decide_layer(Layer::Storage, &ctx);
            assert_eq!(decision.service(), Service::S3);
            let rejected: Vec<Service> = decision
                .recommendation
                .alternatives
                .iter()
                .map(|a| a.service_name)
                .collect();
            assert_eq!(rejected, vec![Service::Ebs, Service::Efs]);
        }
    }

    #[test]
    fn decisions_are_deterministic() {
        for ctx in every_context() {
            for layer in Layer::ALL {
                assert_eq!(decide_layer(layer, &ctx), decide_layer(layer, &ctx));
            }
        }
    }

    #[test]
    fn winner_never_rejected_and_stays_in_layer() {
        for ctx in every_context() {
            for layer in Layer::ALL {
                let decision = decide_layer(layer, &ctx);
                assert_eq!(decision.layer_name, layer);
                assert_eq!(decision.service().layer(), layer);
                let alternatives = &decision.recommendation.alternatives;
                assert!(!alternatives.is_empty());
                for alt in alternatives {
                    assert_ne!(alt.service_name, decision.service());
                    assert_eq!(alt.service_name.layer(), layer);
                }
            }
        }
    }

    #[test]
    fn comparison_argument_does_not_affect_the_outcome() {
        let ctx = context("SaaS", Level::Medium, Level::High, Level::Medium, "Web App");
        let empty = LayerComparison {
            layer_name: Layer::Compute,
            services: Vec::new(),
        };
        let full = crate::services::comparison::compare_compute(&ctx);
        assert_eq!(decide_compute(&ctx, &empty), decide_compute(&ctx, &full));
    }
}
