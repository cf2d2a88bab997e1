//! Phishscope: behavioral clustering and heuristic risk scoring for URL
//! phishing triage.
//!
//! Modular structure:
//! - [`dataset`]: URL record model, JSON datasets, synthetic generation
//! - [`features`]: fixed-order feature extraction and min-max normalization
//! - [`cluster`]: k-means partitioning with cooperative cancellation
//! - [`risk`]: heuristic risk scoring engine
//! - [`report`]: cluster summaries, dataset stats, analysis report
//! - [`engine`]: one-shot pipeline orchestration
//! - [`logging`]: structured JSON logging

pub mod cluster;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod features;
pub mod logging;
pub mod report;
pub mod risk;

pub use cluster::{partition, CancelToken, Partition, Termination};
pub use config::AnalysisConfig;
pub use dataset::UrlRecord;
pub use engine::analyze;
pub use error::{AnalysisError, Result};
pub use features::{FeatureVector, FEATURE_DIM};
pub use logging::StructuredLogger;
pub use report::{AnalysisReport, ClusterSummary};
pub use risk::{RiskEngine, RiskLevel};
