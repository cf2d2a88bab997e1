//! Unsupervised partitioning: k-means over normalized vectors, with
//! cooperative cancellation for long runs.

mod kmeans;

pub use kmeans::{assign_labels, partition, Partition, Termination};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative cancellation flag. The partitioner checks it once per outer
/// iteration, between full assign/update cycles, so a cancelled run always
/// reports a fully consistent assignment.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
