//! JSON log lines: one JSON object per line (ndjson) for ingestion and audit.
//! Diagnostics go to stderr; stdout is reserved for the report payload.

use serde::Serialize;
use std::io::Write;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Initialize tracing with JSON format (one JSON object per line)
pub struct StructuredLogger;

impl StructuredLogger {
    /// Install the global subscriber. Level comes from RUST_LOG when set,
    /// otherwise `default_level`; log lines are written to stderr so the
    /// report emitted on stdout stays machine-readable.
    pub fn init(json: bool, default_level: &str) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));
        let registry = tracing_subscriber::registry().with(filter);
        if json {
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_span_events(FmtSpan::NONE)
                .with_writer(std::io::stderr);
            registry.with(layer).init();
        } else {
            let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
            registry.with(layer).init();
        }
    }

    /// Emit one structured JSON line (the analysis report) without going
    /// through tracing
    pub fn emit_json(value: &impl Serialize, w: &mut impl Write) {
        if let Ok(line) = serde_json::to_string(value) {
            let _ = writeln!(w, "{}", line);
        }
    }
}
