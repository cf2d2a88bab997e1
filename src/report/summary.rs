//! Per-cluster summaries: member count, average risk, characteristic tags in
//! fixed order, and a stable display color.

use crate::config::RiskConfig;
use crate::dataset::UrlRecord;
use serde::{Deserialize, Serialize};

/// Display colors by cluster id. When the cluster count exceeds the palette,
/// colors repeat cyclically; the collision is cosmetic, not an error.
pub const CLUSTER_PALETTE: [&str; 8] = [
    "#3B82F6", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6", "#EC4899", "#14B8A6", "#F97316",
];

pub fn cluster_color(cluster_id: usize) -> &'static str {
    CLUSTER_PALETTE[cluster_id % CLUSTER_PALETTE.len()]
}

const LONG_URL_MEAN: f64 = 70.0;
const HTTPS_SHARE_MIN_PCT: f64 = 50.0;
const SUBDOMAIN_MEAN: f64 = 2.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterSummary {
    pub cluster_id: usize,
    pub count: usize,
    /// Mean member risk score; 0.0 by convention for an empty cluster
    pub avg_risk_score: f64,
    /// Threshold tags in fixed order; the risk tier is exclusive and last
    pub characteristics: Vec<String>,
    pub color: String,
}

/// One summary per cluster id in [0, k), including empty clusters. All
/// matching threshold tags are included except the risk tier, where only the
/// single highest qualifying tier is added.
pub fn summarize(
    records: &[UrlRecord],
    labels: &[usize],
    scores: &[f64],
    k: usize,
    risk: &RiskConfig,
) -> Vec<ClusterSummary> {
    (0..k)
        .map(|cluster_id| {
            let members: Vec<usize> = labels
                .iter()
                .enumerate()
                .filter(|(_, &label)| label == cluster_id)
                .map(|(i, _)| i)
                .collect();
            let count = members.len();

            let avg_risk_score = if count == 0 {
                0.0
            } else {
                members.iter().map(|&i| scores[i]).sum::<f64>() / count as f64
            };

            let mut characteristics = Vec::new();
            if count > 0 {
                let n = count as f64;
                let avg_length =
                    members.iter().map(|&i| records[i].url_length as f64).sum::<f64>() / n;
                let https_pct =
                    members.iter().filter(|&&i| records[i].has_https).count() as f64 / n * 100.0;
                let avg_subdomains = members
                    .iter()
                    .map(|&i| records[i].subdomain_count as f64)
                    .sum::<f64>()
                    / n;

                if avg_length > LONG_URL_MEAN {
                    characteristics.push("Long URLs".to_string());
                }
                if https_pct < HTTPS_SHARE_MIN_PCT {
                    characteristics.push("Non-HTTPS".to_string());
                }
                if avg_subdomains > SUBDOMAIN_MEAN {
                    characteristics.push("Multiple Subdomains".to_string());
                }
            }

            let tier = if avg_risk_score > risk.high_threshold {
                "High Risk"
            } else if avg_risk_score > risk.medium_threshold {
                "Medium Risk"
            } else {
                "Low Risk"
            };
            characteristics.push(tier.to_string());

            ClusterSummary {
                cluster_id,
                count,
                avg_risk_score,
                characteristics,
                color: cluster_color(cluster_id).to_string(),
            }
        })
        .collect()
}
