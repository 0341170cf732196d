//! Signal scoring, prediction assembly and trade levels.

pub mod aggregation;
pub mod categories;
pub mod decision;
pub mod engine;
pub mod prediction;
pub mod scoring;

pub use aggregation::*;
pub use categories::*;
pub use decision::*;
pub use engine::*;
pub use prediction::*;
pub use scoring::*;
