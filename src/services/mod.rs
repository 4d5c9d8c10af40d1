//! Recommendation pipeline stages.
//!
//! Context capture, per-layer comparison and decision, architecture synthesis
//! and output formatting, plus the orchestrator that runs them in order.

pub mod comparison;
pub mod context_capture;
pub mod decision;
pub mod formatter;
pub mod referee;
pub mod synthesis;

pub use referee::{generate_recommendation, generate_recommendation_string, sample_input};
