//! Problem constant prediction CLI
//!
//! Usage:
//!   constprediction_predict predict --html problem.html
//!   constprediction_predict predict --html problem.html --config config/constprediction.toml
//!   constprediction_predict batch --dir statements/ --out data/constants.jsonl

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use constprediction::config::PredictionConfig;
use constprediction::prediction::{
    aggregate::{predict_report, PredictionReport},
    outputs::{write_reports_jsonl, ReportStats},
};

#[derive(Parser)]
#[command(name = "constprediction_predict")]
#[command(about = "Predict modulus, judge method and yes/no tokens from problem statements")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict constants for one statement and print the report as JSON
    Predict {
        #[arg(long)]
        html: PathBuf,
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Predict constants for every *.html under a directory
    Batch {
        #[arg(long)]
        dir: PathBuf,
        #[arg(long, default_value = "data/constants.jsonl")]
        out: PathBuf,
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        append: bool,
    },
}

fn read_statement(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read statement {:?}", path))
}

fn run_predict_command(html: &Path, config: &PredictionConfig) -> Result<PredictionReport> {
    tracing::info!("Predicting constants for {:?}", html);

    let content = read_statement(html)?;
    let report = predict_report(&content, config);

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(report)
}

fn collect_statements(dir: &Path) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().map_or(false, |ext| ext == "html"))
        .map(|e| e.into_path())
        .collect();
    paths.sort();
    paths
}

fn run_batch_command(
    dir: &Path,
    out: &Path,
    config: &PredictionConfig,
    append: bool,
) -> Result<Vec<PredictionReport>> {
    if !dir.is_dir() {
        anyhow::bail!("Statement directory not found: {:?}", dir);
    }

    let paths = collect_statements(dir);
    tracing::info!("Found {} statements under {:?}", paths.len(), dir);

    let mut reports = Vec::new();
    for path in &paths {
        match read_statement(path) {
            Ok(content) => {
                let report = predict_report(&content, config);
                if report.is_degraded() {
                    tracing::info!("{:?}: degraded fields {:?}", path, report.degraded_fields());
                }
                reports.push(report);
            }
            Err(e) => {
                tracing::warn!("Skipping {:?}: {:#}", path, e);
            }
        }
    }

    write_reports_jsonl(out, &reports, append)?;

    let stats = ReportStats::from_reports(&reports);
    println!("\n=== Prediction Summary ===");
    println!("Statements: {}", stats.total);
    println!("With modulus: {}", stats.with_modulus);
    println!("Decimal judge: {}", stats.decimal);
    println!("Interactive judge: {}", stats.interactive);
    println!("Yes/No tokens: {}", stats.yes_no);
    println!("Degraded (see warnings): {}", stats.degraded);

    Ok(reports)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Predict { html, config } => {
            let config = PredictionConfig::load_or_default(config)?;
            run_predict_command(&html, &config)?;
        }
        Commands::Batch { dir, out, config, append } => {
            let config = PredictionConfig::load_or_default(config)?;
            run_batch_command(&dir, &out, &config, append)?;
        }
    }

    Ok(())
}
