//! Heuristic risk scoring, independent of clustering.

mod engine;

pub use engine::{score_url, RiskEngine, RiskLevel, RiskResult, MAX_SCORE};
