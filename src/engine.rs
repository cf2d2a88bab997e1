//! One-shot analysis pipeline: extract, normalize, partition, score,
//! summarize. A pure function of its inputs; no state is retained between
//! runs, so concurrent or repeated runs are independent.

use crate::cluster::{self, CancelToken};
use crate::config::{ClusteringConfig, RiskConfig};
use crate::dataset::UrlRecord;
use crate::error::{AnalysisError, Result};
use crate::features;
use crate::report::{summarize, AnalysisReport, DatasetStats};
use crate::risk::{RiskEngine, RiskLevel};
use chrono::Utc;
use rand::Rng;
use tracing::info;
use uuid::Uuid;

/// Run the full pipeline over `records` and assemble the report. Each
/// record's `cluster` and `risk_score` are written exactly once, here.
///
/// Fails with [`AnalysisError::EmptyInput`] or
/// [`AnalysisError::InvalidConfiguration`] before any work is done; there is
/// no partial success. The configuration surface requires `k >= 2`.
pub fn analyze<R: Rng + ?Sized>(
    mut records: Vec<UrlRecord>,
    clustering: &ClusteringConfig,
    risk: &RiskConfig,
    rng: &mut R,
    cancel: &CancelToken,
) -> Result<AnalysisReport> {
    if records.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    if clustering.k < 2 || clustering.k > records.len() {
        return Err(AnalysisError::InvalidConfiguration(format!(
            "cluster count {} must be between 2 and the record count {}",
            clustering.k,
            records.len()
        )));
    }
    if clustering.max_iterations == 0 {
        return Err(AnalysisError::InvalidConfiguration(
            "maximum iterations must be positive".to_string(),
        ));
    }

    let vectors = features::extract_batch(&records);
    let matrix = features::normalize(&vectors)?;
    let partition = cluster::partition(
        &matrix,
        clustering.k,
        clustering.max_iterations,
        rng,
        cancel,
    )?;
    info!(
        k = clustering.k,
        iterations = partition.iterations,
        termination = ?partition.termination,
        "partitioning finished"
    );

    let risk_engine = RiskEngine::new(risk.clone());
    let mut scores = Vec::with_capacity(records.len());
    let mut high_risk_records = 0usize;
    for (record, &label) in records.iter_mut().zip(&partition.labels) {
        let result = risk_engine.score(record);
        if result.level == RiskLevel::High {
            high_risk_records += 1;
        }
        record.cluster = Some(label);
        record.risk_score = Some(result.score);
        scores.push(result.score);
    }
    info!(scored = scores.len(), high_risk_records, "risk scoring complete");

    let clusters = summarize(&records, &partition.labels, &scores, clustering.k, risk);
    let stats = DatasetStats::from_records(&records, risk);

    Ok(AnalysisReport {
        analysis_id: Uuid::new_v4().to_string(),
        generated_at: Utc::now(),
        k: clustering.k,
        iterations: partition.iterations,
        termination: partition.termination,
        stats,
        clusters,
        records,
    })
}
