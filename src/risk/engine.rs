//! Additive scoring rules over the unnormalized record with configurable
//! level thresholds; produces a 0-100 score and a risk level.

use crate::config::RiskConfig;
use crate::dataset::UrlRecord;
use serde::{Deserialize, Serialize};

pub const MAX_SCORE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_score(score: f64, config: &RiskConfig) -> Self {
        if score > config.high_threshold {
            RiskLevel::High
        } else if score > config.medium_threshold {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

/// Risk result for a single record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskResult {
    pub record_id: String,
    pub score: f64,
    pub level: RiskLevel,
}

/// Pure additive heuristic; deterministic, no dependency on other records.
/// Terms are uncapped individually, and the total is clamped to 100 at the
/// end only.
pub fn score_url(record: &UrlRecord) -> f64 {
    let mut score = 0.0;

    if record.url_length > 75 {
        score += 25.0;
    } else if record.url_length > 50 {
        score += 15.0;
    }

    if !record.has_https {
        score += 20.0;
    }

    score += record.suspicious_char_count as f64 * 10.0;

    if record.domain_age_days < 180 {
        score += 20.0;
    } else if record.domain_age_days < 365 {
        score += 10.0;
    }

    if record.subdomain_count > 3 {
        score += 15.0;
    } else if record.subdomain_count > 2 {
        score += 10.0;
    }

    score.min(MAX_SCORE)
}

pub struct RiskEngine {
    config: RiskConfig,
}

impl RiskEngine {
    pub fn new(config: RiskConfig) -> Self {
        Self { config }
    }

    pub fn score(&self, record: &UrlRecord) -> RiskResult {
        let score = score_url(record);
        RiskResult {
            record_id: record.id.clone(),
            score,
            level: RiskLevel::from_score(score, &self.config),
        }
    }

    pub fn config(&self) -> &RiskConfig {
        &self.config
    }
}
