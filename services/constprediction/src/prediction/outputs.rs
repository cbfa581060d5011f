//! JSONL persistence of prediction reports

use anyhow::{Context, Result};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use crate::prediction::aggregate::PredictionReport;

/// Write one report per line, creating parent directories as needed
pub fn write_reports_jsonl<P: AsRef<Path>>(
    path: P,
    reports: &[PredictionReport],
    append: bool,
) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }

    let mut file = if append && path.exists() {
        std::fs::OpenOptions::new()
            .append(true)
            .open(path)?
    } else {
        std::fs::File::create(path)?
    };

    for report in reports {
        let json = serde_json::to_string(report)?;
        writeln!(file, "{}", json)?;
    }

    tracing::info!("Wrote {} prediction reports to {:?}", reports.len(), path);
    Ok(())
}

/// Load reports written by [`write_reports_jsonl`]; a missing file is empty
pub fn load_reports_jsonl<P: AsRef<Path>>(path: P) -> Result<Vec<PredictionReport>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open reports file: {:?}", path))?;
    let reader = BufReader::new(file);

    let mut reports = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let report: PredictionReport = serde_json::from_str(&line)
            .with_context(|| format!("Failed to parse report: {}", line))?;
        reports.push(report);
    }

    Ok(reports)
}

/// Summary counts over a batch of reports
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportStats {
    pub total: usize,
    pub degraded: usize,
    pub with_modulus: usize,
    pub decimal: usize,
    pub interactive: usize,
    pub yes_no: usize,
}

impl ReportStats {
    pub fn from_reports(reports: &[PredictionReport]) -> Self {
        use crate::prediction::constant_set::JudgeMethod;

        let mut stats = Self {
            total: reports.len(),
            ..Self::default()
        };
        for r in reports {
            let cs = &r.constants;
            if r.is_degraded() {
                stats.degraded += 1;
            }
            if cs.modulus().is_some() {
                stats.with_modulus += 1;
            }
            match cs.judge_method() {
                JudgeMethod::DecimalTolerance(_) => stats.decimal += 1,
                JudgeMethod::Interactive => stats.interactive += 1,
                JudgeMethod::Exact => {}
            }
            if cs.yes_token().is_some() || cs.no_token().is_some() {
                stats.yes_no += 1;
            }
        }
        stats
    }
}
