//! Phishscope entrypoint: load or generate a URL dataset, run the clustering
//! and scoring pipeline once, and emit the analysis report as a JSON line on
//! stdout. Ctrl+C cancels a long partitioning run between iterations.

use phishscope::{
    cluster::CancelToken, config::AnalysisConfig, dataset, engine::analyze,
    logging::StructuredLogger,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config_path = std::env::var("PHISHSCOPE_CONFIG_PATH")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| std::path::PathBuf::from("config.json"));
    let config = AnalysisConfig::load(&config_path);

    StructuredLogger::init(config.log.json, &config.log.level);

    let cancel = CancelToken::new();
    {
        let cancel = cancel.clone();
        let _ = ctrlc::set_handler(move || cancel.cancel());
    }

    let mut rng: StdRng = match config.clustering.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let records = match &config.dataset.input_path {
        Some(path) => {
            let records = dataset::load_records(path)?;
            info!(count = records.len(), path = %path.display(), "dataset loaded");
            records
        }
        None => {
            let records = dataset::generate(config.dataset.count, &mut rng);
            info!(count = records.len(), "synthetic dataset generated");
            records
        }
    };

    let report = analyze(records, &config.clustering, &config.risk, &mut rng, &cancel)?;

    for cluster in &report.clusters {
        info!(
            cluster_id = cluster.cluster_id,
            count = cluster.count,
            avg_risk = cluster.avg_risk_score,
            characteristics = ?cluster.characteristics,
            "cluster summary"
        );
    }
    info!(
        analysis_id = %report.analysis_id,
        iterations = report.iterations,
        termination = ?report.termination,
        high_risk = report.stats.high_risk_urls,
        "analysis complete"
    );

    StructuredLogger::emit_json(&report, &mut std::io::stdout());

    Ok(())
}
