//! Analysis configuration: dataset source, clustering parameters, risk
//! thresholds, logging.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Where records come from (file or synthetic)
    pub dataset: DatasetConfig,
    /// K-means parameters
    pub clustering: ClusteringConfig,
    /// Risk level thresholds
    pub risk: RiskConfig,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Synthetic record count when no input file is given
    pub count: usize,
    /// JSON array of records; overrides synthetic generation
    pub input_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusteringConfig {
    /// Cluster count; must be at least 2 and at most the record count
    pub k: usize,
    /// Iteration cap; hitting it returns the best assignment so far
    pub max_iterations: usize,
    /// Fixed RNG seed for reproducible runs; entropy-seeded when absent
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Average score above this is high risk (0-100)
    pub high_threshold: f64,
    /// Average score above this is medium risk
    pub medium_threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            dataset: DatasetConfig::default(),
            clustering: ClusteringConfig::default(),
            risk: RiskConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            count: 100,
            input_path: None,
        }
    }
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            k: 3,
            max_iterations: 100,
            seed: None,
        }
    }
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            high_threshold: 70.0,
            medium_threshold: 40.0,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: true,
        }
    }
}

impl AnalysisConfig {
    /// Load from JSON file if present; otherwise return default
    pub fn load(path: &std::path::Path) -> Self {
        if path.exists() {
            if let Ok(data) = std::fs::read_to_string(path) {
                if let Ok(c) = serde_json::from_str::<AnalysisConfig>(&data) {
                    return c;
                }
            }
        }
        Self::default()
    }
}
