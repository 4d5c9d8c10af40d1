//! User context domain types
//!
//! The request facts a recommendation is derived from.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse three-step scale shared by budget, traffic and security level.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Level {
    Low,
    #[default]
    Medium,
    High,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Low, Level::Medium, Level::High];

    /// Exact, case-sensitive match against the wire names.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Low" => Some(Self::Low),
            "Medium" => Some(Self::Medium),
            "High" => Some(Self::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// "Low, Medium, High"
    pub fn allowed_values() -> String {
        Self::ALL
            .iter()
            .map(Level::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expected user count. Kept exactly as supplied; never coerced to a number.
///
/// Only presence is checked, so anything JSON can hold ends up here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ExpectedUsers {
    Count(serde_json::Number),
    Text(String),
    Other(serde_json::Value),
}

impl Default for ExpectedUsers {
    fn default() -> Self {
        Self::Count(0.into())
    }
}

impl fmt::Display for ExpectedUsers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Other(v) => write!(f, "{v}"),
        }
    }
}

/// Normalized but not yet validated input.
///
/// Enumerated fields are still raw strings here so validation can report
/// out-of-set values instead of failing deserialization.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedContext {
    pub app_type: String,
    pub budget: String,
    pub expected_users: Option<ExpectedUsers>,
    pub traffic: String,
    pub security_level: String,
    pub workload_type: String,
    pub project_description: Option<String>,
}

/// Validated request context. Immutable for the lifetime of one request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserContext {
    pub app_type: String,
    pub budget: Level,
    pub expected_users: ExpectedUsers,
    pub traffic: Level,
    pub security_level: Level,
    pub workload_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_description: Option<String>,
}

impl UserContext {
    pub fn workload_lower(&self) -> String {
        self.workload_type.to_lowercase()
    }

    pub fn app_type_lower(&self) -> String {
        self.app_type.to_lowercase()
    }
}
