//! Record → feature vector. Pure; never fails for a well-formed record.

use super::FeatureVector;
use crate::dataset::UrlRecord;

/// Extract the fixed 5-dimension vector in [`super::FEATURE_ORDER`].
/// The HTTPS flag is encoded as 1.0/0.0; everything else is the raw count.
pub fn extract(record: &UrlRecord) -> FeatureVector {
    FeatureVector {
        record_id: record.id.clone(),
        values: vec![
            record.url_length as f64,
            if record.has_https { 1.0 } else { 0.0 },
            record.suspicious_char_count as f64,
            record.domain_age_days as f64,
            record.subdomain_count as f64,
        ],
    }
}

pub fn extract_batch(records: &[UrlRecord]) -> Vec<FeatureVector> {
    records.iter().map(extract).collect()
}
