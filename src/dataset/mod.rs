//! URL record model and dataset sources: operator-supplied JSON files or
//! synthetic records for demos and tests.

mod synthetic;

pub use synthetic::generate;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One analyzed URL. The `cluster` and `risk_score` fields start empty and are
/// filled in exactly once per analysis run by the engine; a record never
/// determines its own label or score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlRecord {
    pub id: String,
    pub url: String,
    pub url_length: u32,
    pub has_https: bool,
    pub suspicious_char_count: u32,
    /// Registration age of the domain in days
    pub domain_age_days: u32,
    pub subdomain_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<f64>,
}

impl UrlRecord {
    /// Build a record from raw URL text, deriving every attribute except the
    /// domain age (which comes from WHOIS-style data the caller supplies).
    pub fn from_url(id: impl Into<String>, url: impl Into<String>, domain_age_days: u32) -> Self {
        let url = url.into();
        Self {
            id: id.into(),
            url_length: url.len() as u32,
            has_https: url.starts_with("https"),
            suspicious_char_count: count_suspicious_chars(&url),
            domain_age_days,
            subdomain_count: subdomain_count_of(&url),
            url,
            cluster: None,
            risk_score: None,
        }
    }
}

/// Count `-`, `_`, and ASCII digits anywhere in the URL text.
pub fn count_suspicious_chars(url: &str) -> u32 {
    url.chars()
        .filter(|c| *c == '-' || *c == '_' || c.is_ascii_digit())
        .count() as u32
}

/// Number of host labels before the registered domain and TLD.
pub fn subdomain_count_of(url: &str) -> u32 {
    let host = url
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(url);
    let host = host.split('/').next().unwrap_or(host);
    let labels = host.split('.').filter(|l| !l.is_empty()).count() as u32;
    labels.saturating_sub(2)
}

/// Load records from a JSON array file (operator-supplied dataset).
pub fn load_records(path: &Path) -> Result<Vec<UrlRecord>> {
    let data = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
