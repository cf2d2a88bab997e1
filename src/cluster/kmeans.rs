//! K-means core: seed K centroids from distinct records, then alternate
//! nearest-centroid assignment and coordinate-wise mean updates until the
//! assignment stops changing or the iteration cap is reached.

use super::CancelToken;
use crate::error::{AnalysisError, Result};
use ndarray::{Array2, ArrayView1};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How a partitioning run ended. Hitting the iteration cap is not an error;
/// the best assignment found so far is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    Converged,
    MaxIterations,
    Cancelled,
}

/// Final assignment plus the K centroids (exposed for diagnostics).
#[derive(Debug, Clone)]
pub struct Partition {
    /// One cluster label in [0, k) per input row
    pub labels: Vec<usize>,
    /// k × dim centroid matrix
    pub centroids: Array2<f64>,
    /// Completed update+assign cycles
    pub iterations: usize,
    pub termination: Termination,
}

/// Partition `data` (rows = records) into `k` clusters. Stateless: all
/// centroid state lives inside the call, and the RNG is injected so seeded
/// runs are reproducible. Independent runs without a fixed seed may converge
/// to different, equally valid partitions.
///
/// Configuration errors (`k` out of [1, rows], zero iteration cap, empty
/// input) are reported before any iteration begins. The loop itself is total:
/// an empty cluster keeps its previous centroid, so no NaN can appear.
pub fn partition<R: Rng + ?Sized>(
    data: &Array2<f64>,
    k: usize,
    max_iterations: usize,
    rng: &mut R,
    cancel: &CancelToken,
) -> Result<Partition> {
    let n = data.nrows();
    if n == 0 {
        return Err(AnalysisError::EmptyInput);
    }
    if k < 1 || k > n {
        return Err(AnalysisError::InvalidConfiguration(format!(
            "cluster count {} out of range for {} records",
            k, n
        )));
    }
    if max_iterations == 0 {
        return Err(AnalysisError::InvalidConfiguration(
            "maximum iterations must be positive".to_string(),
        ));
    }

    // Seed centroids by copying k distinct rows, chosen uniformly without
    // replacement.
    let mut centroids = Array2::zeros((k, data.ncols()));
    for (c, i) in rand::seq::index::sample(rng, n, k).into_iter().enumerate() {
        centroids.row_mut(c).assign(&data.row(i));
    }

    let mut labels = assign_labels(data, &centroids);
    let mut iterations = 0;
    let mut termination = Termination::MaxIterations;

    for _ in 0..max_iterations {
        if cancel.is_cancelled() {
            termination = Termination::Cancelled;
            break;
        }

        update_centroids(data, &labels, &mut centroids);
        let next = assign_labels(data, &centroids);
        iterations += 1;

        let converged = next == labels;
        labels = next;
        if converged {
            termination = Termination::Converged;
            break;
        }
    }

    Ok(Partition {
        labels,
        centroids,
        iterations,
        termination,
    })
}

/// Label every row with its nearest centroid. Exposed so a converged
/// partition can be re-checked against fresh data or its own input.
pub fn assign_labels(data: &Array2<f64>, centroids: &Array2<f64>) -> Vec<usize> {
    data.rows()
        .into_iter()
        .map(|row| nearest_centroid(&row, centroids))
        .collect()
}

fn nearest_centroid(point: &ArrayView1<f64>, centroids: &Array2<f64>) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (c, centroid) in centroids.rows().into_iter().enumerate() {
        // Squared distance preserves the Euclidean argmin; strict < keeps the
        // lowest-indexed centroid on exact ties.
        let dist = point
            .iter()
            .zip(centroid.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>();
        if dist < best_dist {
            best_dist = dist;
            best = c;
        }
    }
    best
}

fn update_centroids(data: &Array2<f64>, labels: &[usize], centroids: &mut Array2<f64>) {
    let k = centroids.nrows();
    let mut sums = Array2::<f64>::zeros(centroids.raw_dim());
    let mut counts = vec![0usize; k];

    for (row, &label) in data.rows().into_iter().zip(labels) {
        counts[label] += 1;
        let mut sum = sums.row_mut(label);
        sum += &row;
    }

    for c in 0..k {
        // A cluster with no current members keeps its previous centroid.
        if counts[c] > 0 {
            let mut row = centroids.row_mut(c);
            row.assign(&sums.row(c));
            row /= counts[c] as f64;
        }
    }
}
