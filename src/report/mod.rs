//! Analysis output: per-cluster summaries, headline dataset stats, and the
//! final report. Consumed read-only by presentation surfaces; derived fields
//! never feed back into extraction or scoring.

mod summary;

pub use summary::{cluster_color, summarize, ClusterSummary, CLUSTER_PALETTE};

use crate::cluster::Termination;
use crate::config::RiskConfig;
use crate::dataset::UrlRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Headline figures for the operator view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetStats {
    pub total_urls: usize,
    /// Records scoring at or above the configured high threshold
    pub high_risk_urls: usize,
    pub avg_risk_score: f64,
    /// Share of records served over HTTPS, in percent
    pub https_share_pct: f64,
}

impl DatasetStats {
    pub fn from_records(records: &[UrlRecord], config: &RiskConfig) -> Self {
        let total = records.len();
        if total == 0 {
            return Self {
                total_urls: 0,
                high_risk_urls: 0,
                avg_risk_score: 0.0,
                https_share_pct: 0.0,
            };
        }
        let high_risk_urls = records
            .iter()
            .filter(|r| r.risk_score.unwrap_or(0.0) >= config.high_threshold)
            .count();
        let avg_risk_score = records
            .iter()
            .map(|r| r.risk_score.unwrap_or(0.0))
            .sum::<f64>()
            / total as f64;
        let https_share_pct =
            records.iter().filter(|r| r.has_https).count() as f64 / total as f64 * 100.0;
        Self {
            total_urls: total,
            high_risk_urls,
            avg_risk_score,
            https_share_pct,
        }
    }
}

/// Complete result of one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analysis_id: String,
    pub generated_at: DateTime<Utc>,
    pub k: usize,
    pub iterations: usize,
    pub termination: Termination,
    pub stats: DatasetStats,
    pub clusters: Vec<ClusterSummary>,
    /// Input records with `cluster` and `risk_score` filled in
    pub records: Vec<UrlRecord>,
}
