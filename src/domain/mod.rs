//! Domain types and DTOs
//!
//! These types define the data flowing through the recommendation pipeline.

pub mod architecture;
pub mod comparison;
pub mod context;
pub mod decision;
pub mod output;

// Re-export commonly used types
pub use architecture::*;
pub use comparison::*;
pub use context::*;
pub use decision::*;
pub use output::*;
