//! Predict template constants (modulus, judge method, yes/no tokens and
//! section excerpts) from competitive-programming problem statements.

pub mod config;
pub mod prediction;

pub use config::PredictionConfig;
pub use prediction::{predict_constants, predict_report, ProblemConstantSet, PredictionReport};
