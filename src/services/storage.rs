use crate::domain::models::{ComplianceReport, RunRecord};
use std::path::{Path, PathBuf};

pub fn config_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/oddcheck"))
}

fn runs_path() -> anyhow::Result<PathBuf> {
    Ok(config_dir()?.join("runs.jsonl"))
}

/// Appends one line to the run log. Failures are ignored.
pub fn record_run(record: &RunRecord) {
    let path = match runs_path() {
        Ok(p) => p,
        Err(_) => return,
    };
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let line = match serde_json::to_string(record) {
        Ok(l) => format!("{}\n", l),
        Err(_) => return,
    };
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
}

/// Reads the run log, skipping lines that no longer parse.
pub fn load_runs() -> anyhow::Result<Vec<RunRecord>> {
    let p = runs_path()?;
    if !p.exists() {
        return Ok(vec![]);
    }
    Ok(std::fs::read_to_string(p)?
        .lines()
        .filter(|l| !l.trim().is_empty())
        .filter_map(|l| serde_json::from_str(l).ok())
        .collect())
}

pub fn save_report(path: &Path, report: &ComplianceReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, serde_json::to_string_pretty(report)?)?;
    Ok(())
}

pub fn load_report(path: &Path) -> anyhow::Result<ComplianceReport> {
    if !path.exists() {
        anyhow::bail!("report not found: {}", path.display());
    }
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw)
        .map_err(|e| anyhow::anyhow!("invalid report {}: {}", path.display(), e))
}
