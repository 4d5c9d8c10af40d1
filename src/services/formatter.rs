//! Output formatting
//!
//! Assembles the structured response and renders it as a single markdown
//! document.

use crate::domain::architecture::{ArchitecturePattern, ArchitectureRecommendation};
use crate::domain::comparison::{Layer, LayerComparison, Service};
use crate::domain::context::{Level, UserContext};
use crate::domain::decision::LayerDecision;
use crate::domain::output::{ComparisonTables, CostTradeoffSummary, FormattedOutput};
use crate::error::PipelineError;

/// Canned gains and sacrifices for a family of architectures.
struct Tradeoffs {
    gains: &'static [&'static str],
    sacrifices: &'static [&'static str],
}

const SERVERLESS_TRADEOFFS: Tradeoffs = Tradeoffs {
    gains: &[
        "Pay-per-use pricing with no idle costs",
        "Automatic scaling without capacity planning",
        "Minimal operational overhead and maintenance",
        "Fast deployment and iteration cycles",
    ],
    sacrifices: &[
        "Cold start latency for Lambda functions",
        "15-minute execution time limit on Lambda",
        "Less control over underlying infrastructure",
        "Vendor lock-in to AWS services",
    ],
};

const TRADITIONAL_TRADEOFFS: Tradeoffs = Tradeoffs {
    gains: &[
        "Full control over infrastructure and configuration",
        "Predictable performance with no cold starts",
        "Support for long-running processes",
        "Familiar technology stack for traditional teams",
    ],
    sacrifices: &[
        "Higher operational overhead for management and patching",
        "Manual capacity planning and scaling configuration",
        "Paying for idle capacity during low traffic",
        "Longer deployment and setup times",
    ],
};

const CONTAINERIZED_TRADEOFFS: Tradeoffs = Tradeoffs {
    gains: &[
        "Efficient resource utilization through containers",
        "Excellent orchestration for microservices",
        "Balance of control and managed services",
        "Support for modern DevOps practices",
    ],
    sacrifices: &[
        "Container management complexity",
        "Learning curve for container orchestration",
        "More operational overhead than pure serverless",
    ],
};

const HYBRID_TRADEOFFS: Tradeoffs = Tradeoffs {
    gains: &[
        "Flexibility to use best service for each layer",
        "Balance of cost-efficiency and performance",
        "Scalability where needed most",
    ],
    sacrifices: &[
        "Mixed operational models across layers",
        "More complex architecture to manage",
    ],
};

fn tradeoffs_for(pattern: ArchitecturePattern) -> &'static Tradeoffs {
    match pattern {
        ArchitecturePattern::Serverless => &SERVERLESS_TRADEOFFS,
        ArchitecturePattern::Traditional => &TRADITIONAL_TRADEOFFS,
        ArchitecturePattern::Containerized => &CONTAINERIZED_TRADEOFFS,
        ArchitecturePattern::HybridServerlessRelational
        | ArchitecturePattern::HybridTraditionalNoSql
        | ArchitecturePattern::Generic => &HYBRID_TRADEOFFS,
    }
}

pub fn context_summary(context: &UserContext) -> String {
    let mut summary = format!(
        "You're building a {} application with a {} budget, expecting {} users with {} traffic levels. \
         Your workload is {} with {} security requirements.",
        context.app_type,
        context.budget.as_str().to_lowercase(),
        context.expected_users,
        context.traffic.as_str().to_lowercase(),
        context.workload_type,
        context.security_level.as_str().to_lowercase(),
    );

    if let Some(description) = context
        .project_description
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
    {
        summary.push_str(&format!("\n\n**Project Details:** {description}"));
    }

    summary
}

pub fn decision_analysis(decisions: &[LayerDecision]) -> String {
    let mut analysis = String::from("## Decision Analysis\n\n");

    for decision in decisions {
        let rec = &decision.recommendation;
        analysis.push_str(&format!(
            "### {}: {}\n\n**Why {}?**\n{}\n\n",
            decision.layer_name, rec.service_name, rec.service_name, rec.reason
        ));

        if !rec.alternatives.is_empty() {
            analysis.push_str("**Why not the alternatives?**\n\n");
            for alt in &rec.alternatives {
                analysis.push_str(&format!(
                    "- **{}**: {}\n",
                    alt.service_name, alt.rejection_reason
                ));
            }
            analysis.push('\n');
        }
    }

    analysis
}

pub fn final_architecture(architecture: &ArchitectureRecommendation) -> String {
    format!(
        "## Final Recommended Architecture\n\n\
         **{} + {} + {} + {}**\n\n\
         ### Why This Combination?\n\n{}\n\n\
         ### How It Works Together\n\n{}\n",
        architecture.compute,
        architecture.api_load_balancing,
        architecture.database,
        architecture.storage,
        architecture.rationale,
        architecture.integration,
    )
}

/// Low beats High: a low budget is always a low tier.
pub fn estimated_cost_level(context: &UserContext, pattern: ArchitecturePattern) -> Level {
    if context.budget == Level::Low
        || (pattern == ArchitecturePattern::Serverless && context.traffic == Level::Low)
    {
        Level::Low
    } else if context.budget == Level::High
        || (pattern == ArchitecturePattern::Traditional && context.traffic == Level::High)
    {
        Level::High
    } else {
        Level::Medium
    }
}

pub fn cost_tradeoff_summary(
    context: &UserContext,
    architecture: &ArchitectureRecommendation,
) -> CostTradeoffSummary {
    let tradeoffs = tradeoffs_for(architecture.pattern);
    let mut gains: Vec<String> = tradeoffs.gains.iter().map(|g| g.to_string()).collect();
    let sacrifices = tradeoffs.sacrifices.iter().map(|s| s.to_string()).collect();

    if context.security_level == Level::High && architecture.database == Service::Rds {
        gains.push("Enterprise-grade security and compliance features".to_string());
    }
    if context.traffic == Level::High && architecture.api_load_balancing == Service::Alb {
        gains.push("Cost-effective load balancing at high scale".to_string());
    }

    CostTradeoffSummary {
        estimated_cost_level: estimated_cost_level(context, architecture.pattern),
        gains,
        sacrifices,
    }
}

fn table_for(comparisons: &[LayerComparison], layer: Layer) -> Result<LayerComparison, PipelineError> {
    comparisons
        .iter()
        .find(|c| c.layer_name == layer)
        .cloned()
        .ok_or(PipelineError::MissingComparison(layer))
}

/// Assemble the full response. Fails only if a layer's comparison is missing.
pub fn format_output(
    context: &UserContext,
    comparisons: &[LayerComparison],
    decisions: &[LayerDecision],
    architecture: &ArchitectureRecommendation,
) -> Result<FormattedOutput, PipelineError> {
    let comparison_tables = ComparisonTables {
        compute: table_for(comparisons, Layer::Compute)?,
        database: table_for(comparisons, Layer::Database)?,
        storage: table_for(comparisons, Layer::Storage)?,
        api_load_balancing: table_for(comparisons, Layer::ApiLoadBalancing)?,
    };

    Ok(FormattedOutput {
        user_context_summary: context_summary(context),
        comparison_tables,
        decision_analysis: decision_analysis(decisions),
        final_architecture: final_architecture(architecture),
        cost_tradeoff_summary: cost_tradeoff_summary(context, architecture),
        architecture: architecture.clone(),
    })
}

/// Flatten into one markdown document with five numbered sections.
pub fn format_as_string(output: &FormattedOutput) -> String {
    let mut result = String::from("# AWS Cloud Architecture Recommendation\n\n");

    result.push_str("## 1. User Context\n\n");
    result.push_str(&output.user_context_summary);
    result.push_str("\n\n");

    result.push_str("## 2. Service Comparison Tables\n\n");
    for table in output.comparison_tables.iter() {
        result.push_str(&table.to_markdown());
        result.push('\n');
    }

    // The sections already start with "## ", so the number is spliced in.
    result.push_str("## 3. ");
    result.push_str(output.decision_analysis.trim_start_matches("## "));

    result.push_str("## 4. ");
    result.push_str(output.final_architecture.trim_start_matches("## "));

    let summary = &output.cost_tradeoff_summary;
    result.push_str("\n## 5. Cost & Trade-Off Summary\n\n");
    result.push_str(&format!(
        "**Estimated Cost Level:** {}\n\n",
        summary.estimated_cost_level
    ));
    result.push_str("**What You Gain:**\n");
    for gain in &summary.gains {
        result.push_str(&format!("- {gain}\n"));
    }
    result.push_str("\n**What You Sacrifice:**\n");
    for sacrifice in &summary.sacrifices {
        result.push_str(&format!("- {sacrifice}\n"));
    }

    result
}
