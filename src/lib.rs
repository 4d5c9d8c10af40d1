//! InfraJudge: rule-based AWS architecture recommendations.
//!
//! The core is a synchronous pipeline ([`services::generate_recommendation`])
//! that turns a handful of facts about an application into one service per
//! layer, a named architecture pattern and a cost/trade-off summary. The HTTP
//! app and CLI are thin shells around it.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod services;

pub use error::{ErrorResponse, RecommendationError};
pub use services::{generate_recommendation, generate_recommendation_string};
