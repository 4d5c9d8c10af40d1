//! Context capture and validation.
//!
//! Raw request JSON is normalized into a [`CapturedContext`] (defaults filled
//! in), then validated into a typed [`UserContext`]. Validation never stops at
//! the first problem; every violation is reported together.

use serde_json::{Map, Value};

use crate::domain::context::{CapturedContext, ExpectedUsers, Level, UserContext};
use crate::error::{CaptureError, RecommendationError};

const DEFAULT_LEVEL: &str = "Medium";

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// JSON values that count as "not given": `null`, `false`, `0` and `""`.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn given<'a>(input: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    input.get(field).filter(|v| !is_falsy(v))
}

/// Read a free-text field. Anything not given falls back to `default`; any
/// other non-string value cannot be read as text.
fn string_field(
    input: &Map<String, Value>,
    field: &'static str,
    default: &str,
) -> Result<String, CaptureError> {
    match given(input, field) {
        None => Ok(default.to_string()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(CaptureError::NotAString {
            field,
            found: kind_of(other),
        }),
    }
}

/// Read a level field. Non-string values are carried through as their JSON
/// text so validation reports them as out of set.
fn level_field(input: &Map<String, Value>, field: &str) -> String {
    match given(input, field) {
        None => DEFAULT_LEVEL.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Anything not given becomes `0`; every other value is kept as supplied.
fn expected_users_field(input: &Map<String, Value>) -> ExpectedUsers {
    match given(input, "expectedUsers") {
        None => ExpectedUsers::default(),
        Some(Value::Number(n)) => ExpectedUsers::Count(n.clone()),
        Some(Value::String(s)) => ExpectedUsers::Text(s.clone()),
        Some(other) => ExpectedUsers::Other(other.clone()),
    }
}

/// Normalize raw input, filling defaults for anything not supplied.
pub fn capture(raw: &Value) -> Result<CapturedContext, CaptureError> {
    let input = raw
        .as_object()
        .ok_or_else(|| CaptureError::NotAnObject(kind_of(raw)))?;

    let project_description = match given(input, "projectDescription") {
        None => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            return Err(CaptureError::NotAString {
                field: "projectDescription",
                found: kind_of(other),
            })
        }
    };

    Ok(CapturedContext {
        app_type: string_field(input, "appType", "")?,
        budget: level_field(input, "budget"),
        expected_users: Some(expected_users_field(input)),
        traffic: level_field(input, "traffic"),
        security_level: level_field(input, "securityLevel"),
        workload_type: string_field(input, "workloadType", "")?,
        project_description,
    })
}

fn check_level(field: &str, value: &str, errors: &mut Vec<String>) -> Option<Level> {
    let level = Level::parse(value);
    if level.is_none() {
        errors.push(format!(
            "{field} must be one of: {}",
            Level::allowed_values()
        ));
    }
    level
}

/// Validate a captured context, accumulating every violation.
///
/// `expectedUsers` is only checked for presence; any value passes.
pub fn validate(captured: CapturedContext) -> Result<UserContext, RecommendationError> {
    let mut errors = Vec::new();

    if captured.app_type.trim().is_empty() {
        errors.push("appType is required and cannot be empty".to_string());
    }
    if captured.workload_type.trim().is_empty() {
        errors.push("workloadType is required and cannot be empty".to_string());
    }

    let budget = check_level("budget", &captured.budget, &mut errors);
    let traffic = check_level("traffic", &captured.traffic, &mut errors);
    let security_level = check_level("securityLevel", &captured.security_level, &mut errors);

    if captured.expected_users.is_none() {
        errors.push("expectedUsers is required".to_string());
    }

    match (budget, traffic, security_level, captured.expected_users) {
        (Some(budget), Some(traffic), Some(security_level), Some(expected_users))
            if errors.is_empty() =>
        {
            Ok(UserContext {
                app_type: captured.app_type,
                budget,
                expected_users,
                traffic,
                security_level,
                workload_type: captured.workload_type,
                project_description: captured.project_description,
            })
        }
        _ => Err(RecommendationError::Validation { errors }),
    }
}

/// Capture then validate, converting either failure into a [`RecommendationError`].
pub fn capture_and_validate(raw: &Value) -> Result<UserContext, RecommendationError> {
    let captured = capture(raw)?;
    validate(captured).map_err(|err| {
        if let RecommendationError::Validation { errors } = &err {
            tracing::warn!(errors = ?errors, "User context failed validation");
        }
        err
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validation_errors(raw: Value) -> Vec<String> {
        match capture_and_validate(&raw) {
            Err(RecommendationError::Validation { errors }) => errors,
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn capture_fills_defaults() {
        let captured = capture(&json!({})).unwrap();
        assert_eq!(captured.app_type, "");
        assert_eq!(captured.budget, "Medium");
        assert_eq!(captured.traffic, "Medium");
        assert_eq!(captured.security_level, "Medium");
        assert_eq!(captured.workload_type, "");
        assert_eq!(captured.expected_users, Some(ExpectedUsers::default()));
        assert_eq!(captured.project_description, None);
    }

    #[test]
    fn omitted_levels_default_to_medium_and_pass() {
        let ctx = capture_and_validate(&json!({
            "appType": "SaaS",
            "workloadType": "Web App"
        }))
        .unwrap();
        assert_eq!(ctx.budget, Level::Medium);
        assert_eq!(ctx.traffic, Level::Medium);
        assert_eq!(ctx.security_level, Level::Medium);
    }

    #[test]
    fn whitespace_only_required_fields_are_rejected() {
        let errors = validation_errors(json!({
            "appType": "   ",
            "workloadType": "\t"
        }));
        assert_eq!(
            errors,
            vec![
                "appType is required and cannot be empty",
                "workloadType is required and cannot be empty",
            ]
        );
    }

    #[test]
    fn out_of_set_levels_are_all_reported() {
        let errors = validation_errors(json!({
            "appType": "SaaS",
            "workloadType": "Web App",
            "budget": "Cheap",
            "traffic": "high",
            "securityLevel": "Extreme"
        }));
        assert_eq!(
            errors,
            vec![
                "budget must be one of: Low, Medium, High",
                "traffic must be one of: Low, Medium, High",
                "securityLevel must be one of: Low, Medium, High",
            ]
        );
    }

    #[test]
    fn missing_app_type_and_bad_budget_yield_two_errors() {
        let errors = validation_errors(json!({
            "budget": "Cheap",
            "expectedUsers": 10,
            "traffic": "Low",
            "securityLevel": "Low",
            "workloadType": "API-based"
        }));
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("appType"));
        assert!(errors[1].contains("budget"));
    }

    #[test]
    fn expected_users_is_not_numerically_checked() {
        let ctx = capture_and_validate(&json!({
            "appType": "SaaS",
            "workloadType": "Web App",
            "expectedUsers": "abc"
        }))
        .unwrap();
        assert_eq!(ctx.expected_users, ExpectedUsers::Text("abc".into()));
    }

    #[test]
    fn missing_expected_users_is_reported_when_validating_directly() {
        let mut captured = capture(&json!({
            "appType": "SaaS",
            "workloadType": "Web App"
        }))
        .unwrap();
        captured.expected_users = None;
        match validate(captured) {
            Err(RecommendationError::Validation { errors }) => {
                assert_eq!(errors, vec!["expectedUsers is required"]);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn malformed_shapes_are_capture_errors() {
        assert_eq!(
            capture_and_validate(&json!(["not", "an", "object"])),
            Err(RecommendationError::Capture(CaptureError::NotAnObject("array")))
        );
        assert_eq!(
            capture_and_validate(&json!({ "appType": 5 })),
            Err(RecommendationError::Capture(CaptureError::NotAString {
                field: "appType",
                found: "number",
            }))
        );
        assert_eq!(
            capture_and_validate(&json!({ "appType": "SaaS", "workloadType": ["Web"] })),
            Err(RecommendationError::Capture(CaptureError::NotAString {
                field: "workloadType",
                found: "array",
            }))
        );
    }

    #[test]
    fn falsy_values_take_defaults() {
        let captured = capture(&json!({
            "appType": false,
            "budget": false,
            "expectedUsers": false,
            "traffic": 0,
            "securityLevel": null,
            "workloadType": 0,
            "projectDescription": false
        }))
        .unwrap();
        assert_eq!(captured.app_type, "");
        assert_eq!(captured.budget, "Medium");
        assert_eq!(captured.traffic, "Medium");
        assert_eq!(captured.security_level, "Medium");
        assert_eq!(captured.workload_type, "");
        assert_eq!(captured.expected_users, Some(ExpectedUsers::default()));
        assert_eq!(captured.project_description, None);
    }

    #[test]
    fn non_string_levels_are_validation_errors() {
        let errors = validation_errors(json!({ "budget": 5, "workloadType": "Web" }));
        assert_eq!(
            errors,
            vec![
                "appType is required and cannot be empty",
                "budget must be one of: Low, Medium, High",
            ]
        );

        let errors = validation_errors(json!({
            "appType": "SaaS",
            "workloadType": "Web",
            "traffic": true,
            "securityLevel": ["High"]
        }));
        assert_eq!(
            errors,
            vec![
                "traffic must be one of: Low, Medium, High",
                "securityLevel must be one of: Low, Medium, High",
            ]
        );
    }

    #[test]
    fn false_budget_defaults_to_medium() {
        let ctx = capture_and_validate(&json!({
            "appType": "SaaS",
            "workloadType": "Web",
            "budget": false
        }))
        .unwrap();
        assert_eq!(ctx.budget, Level::Medium);
    }

    #[test]
    fn expected_users_accepts_any_given_value() {
        let ctx = capture_and_validate(&json!({
            "appType": "SaaS",
            "workloadType": "Web",
            "expectedUsers": true
        }))
        .unwrap();
        assert_eq!(ctx.expected_users, ExpectedUsers::Other(json!(true)));

        let ctx = capture_and_validate(&json!({
            "appType": "SaaS",
            "workloadType": "Web",
            "expectedUsers": { "peak": 500 }
        }))
        .unwrap();
        assert_eq!(ctx.expected_users.to_string(), r#"{"peak":500}"#);
    }

    #[test]
    fn project_description_is_kept() {
        let ctx = capture_and_validate(&json!({
            "appType": "SaaS",
            "workloadType": "Web App",
            "projectDescription": "Invoice portal"
        }))
        .unwrap();
        assert_eq!(ctx.project_description.as_deref(), Some("Invoice portal"));
    }
}
