use crate::domain::models::ConfigFile;
use crate::services::checker::odd_questions;
use crate::services::config::resolve_images_dir;
use crate::services::images::list_images;
use crate::services::output::{print_one, print_out, render_report};
use crate::services::storage::{load_report, load_runs};
use std::path::{Path, PathBuf};

pub fn handle_questions(json: bool) -> anyhow::Result<()> {
    print_out(json, &odd_questions(), |q| q.clone())
}

pub fn handle_scan(
    json: bool,
    config: &ConfigFile,
    images_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    let dir = resolve_images_dir(images_dir, config);
    let images = list_images(&dir)?;
    print_out(json, &images, |i| {
        format!("{}\t{}\t{}", i.name, i.mime, i.sha256)
    })
}

pub fn handle_report(json: bool, path: &Path) -> anyhow::Result<()> {
    let report = load_report(path)?;
    print_one(json, &report, |r| {
        format!(
            "report: {} ({} backend, model {}, compliant when all answers are {})\n{}",
            r.generated_at,
            r.backend,
            r.model,
            r.compliant_when,
            render_report(r)
        )
    })
}

pub fn handle_history(json: bool) -> anyhow::Result<()> {
    let runs = load_runs()?;
    print_out(json, &runs, |r| {
        format!(
            "{}\t{}\t{}\t{}/{} compliant\t{}",
            r.ts,
            r.backend,
            r.model,
            r.compliant,
            r.images,
            r.report
        )
    })
}
