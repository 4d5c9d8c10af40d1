//! Recommendation pipeline entry points.
//!
//! capture + validate → compare → decide → synthesize → format. Every stage is
//! a synchronous pure function over the request-scoped context, so callers can
//! invoke this from any thread without coordination.

use serde_json::{json, Value};

use crate::domain::comparison::Layer;
use crate::domain::decision::LayerDecision;
use crate::domain::output::FormattedOutput;
use crate::error::{ErrorResponse, RecommendationError};
use crate::services::{comparison, context_capture, decision, formatter, synthesis};

/// Run the full pipeline on untyped input.
#[tracing::instrument(skip_all)]
pub fn generate_recommendation(raw: &Value) -> Result<FormattedOutput, RecommendationError> {
    let context = context_capture::capture_and_validate(raw)?;

    let comparisons = comparison::compare_all(&context);

    let decisions: Vec<LayerDecision> = Layer::ALL
        .iter()
        .zip(&comparisons)
        .map(|(&layer, table)| match layer {
            Layer::Compute => decision::decide_compute(&context, table),
            Layer::Database => decision::decide_database(&context, table),
            Layer::Storage => decision::decide_storage(&context, table),
            Layer::ApiLoadBalancing => decision::decide_api(&context, table),
        })
        .collect();

    let architecture = synthesis::synthesize(&decisions);

    tracing::info!(
        app_type = %context.app_type,
        compute = %architecture.compute,
        database = %architecture.database,
        storage = %architecture.storage,
        api = %architecture.api_load_balancing,
        pattern = %architecture.pattern,
        "Architecture recommended"
    );

    let output = formatter::format_output(&context, &comparisons, &decisions, &architecture)?;
    Ok(output)
}

/// Same as [`generate_recommendation`], rendered as one markdown document.
///
/// Failures become `Error: <message>` followed by the pretty-printed details.
pub fn generate_recommendation_string(raw: &Value) -> String {
    match generate_recommendation(raw) {
        Ok(output) => formatter::format_as_string(&output),
        Err(err) => error_string(&ErrorResponse::from(&err)),
    }
}

fn error_string(response: &ErrorResponse) -> String {
    let details = response
        .details
        .as_ref()
        .and_then(|d| serde_json::to_string_pretty(d).ok())
        .unwrap_or_default();
    format!("Error: {}\n{}", response.message, details)
}

/// Example request body.
pub fn sample_input() -> Value {
    json!({
        "appType": "Startup",
        "budget": "Low",
        "expectedUsers": 1000,
        "traffic": "Low",
        "securityLevel": "Medium",
        "workloadType": "API-based"
    })
}
