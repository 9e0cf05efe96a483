use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::fmt::SubscriberBuilder;

use hullcluster::prelude::cluster_with_defaults;

mod dataset;
mod summary;

#[derive(Parser)]
#[command(name = "hullcluster")]
#[command(about = "Label-pure convex hull clustering over labeled point sets")]
struct Cmd {
    /// Input dataset: one CSV record per point, d coordinates then an
    /// integer label
    dataset: PathBuf,

    /// Output path for the JSON cluster array
    clusters: PathBuf,

    /// Output path for the JSON summary record
    summary: PathBuf,

    /// Optional log file; logs go to stderr when omitted
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    init_logging(cmd.log_file.as_deref())?;
    run(&cmd.dataset, &cmd.clusters, &cmd.summary)
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let builder = SubscriberBuilder::default().with_target(false);
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.init(),
    }
    Ok(())
}

fn run(dataset_path: &Path, clusters_path: &Path, summary_path: &Path) -> Result<()> {
    tracing::info!("start");

    let (store, dataset) = dataset::load_dataset(dataset_path)?;
    tracing::info!(rows = dataset.len(), dim = store.dim(), "dataset loaded");

    let clusters = cluster_with_defaults(&store, dataset)?;
    tracing::info!(clusters = clusters.len(), "data points clustered");

    write_json(clusters_path, &serde_json::to_vec(&clusters)?)?;
    tracing::info!(path = %clusters_path.display(), "clusters written");

    let features = summary::meta_features(&clusters);
    write_json(summary_path, &serde_json::to_vec(&features)?)?;
    tracing::info!(path = %summary_path.display(), "summary written");

    tracing::info!("completed");
    Ok(())
}

fn write_json(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn pipeline_writes_clusters_and_summary() {
        let dir = tempfile::tempdir().unwrap();
        let dataset = dir.path().join("points.csv");
        let clusters = dir.path().join("out/clusters.json");
        let summary = dir.path().join("out/summary.json");
        let mut f = File::create(&dataset).unwrap();
        writeln!(f, "0.0,0.0,0").unwrap();
        writeln!(f, "1.0,0.0,0").unwrap();
        writeln!(f, "0.0,1.0,0").unwrap();
        writeln!(f, "10.0,10.0,1").unwrap();
        writeln!(f, "11.0,10.0,1").unwrap();
        writeln!(f, "10.0,11.0,1").unwrap();

        run(&dataset, &clusters, &summary).unwrap();

        let emitted: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&clusters).unwrap()).unwrap();
        let arr = emitted.as_array().unwrap();
        assert_eq!(arr.len(), 2);
        for c in arr {
            assert_eq!(c["size"], 3);
            assert!(c["volume"].as_f64().unwrap() > 0.0);
            assert!(c["vertices"].is_array());
            assert!(c["points"].is_array());
        }

        let report: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&summary).unwrap()).unwrap();
        assert_eq!(report["Number of Clusters"], 2);
        assert_eq!(report["Size versus Number of Clusters"], 3);
        assert!(report["Volume versus Size"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn empty_dataset_reports_zero_clusters() {
        let dir = tempfile::tempdir().unwrap();
        let dataset = dir.path().join("points.csv");
        let clusters = dir.path().join("clusters.json");
        let summary = dir.path().join("summary.json");
        std::fs::write(&dataset, "").unwrap();

        run(&dataset, &clusters, &summary).unwrap();

        let emitted: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&clusters).unwrap()).unwrap();
        assert_eq!(emitted.as_array().unwrap().len(), 0);
        let report: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&summary).unwrap()).unwrap();
        assert_eq!(report["Number of Clusters"], 0);
        assert_eq!(report["Size versus Number of Clusters"], 0);
        assert_eq!(report["Volume versus Size"], 0.0);
    }
}
