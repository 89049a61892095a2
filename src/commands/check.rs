use crate::domain::models::{ConfigFile, RunRecord};
use crate::services::backends::build_backend;
use crate::services::checker::{odd_questions, run_check};
use crate::services::config::{resolve_check, CheckOverrides};
use crate::services::images::list_images;
use crate::services::output::{print_one, render_report};
use crate::services::storage::{record_run, save_report};
use tracing::info;

pub fn handle_check(
    json: bool,
    config: &ConfigFile,
    overrides: CheckOverrides,
) -> anyhow::Result<()> {
    let plan = resolve_check(overrides, config)?;
    let images = list_images(&plan.images_dir)?;
    info!(
        dir = %plan.images_dir.display(),
        images = images.len(),
        backend = ?plan.backend.kind,
        model = %plan.backend.model,
        "starting check"
    );

    let backend = build_backend(plan.backend)?;
    let report = run_check(
        backend.as_ref(),
        &images,
        &odd_questions(),
        plan.compliant_when,
    );
    save_report(&plan.output, &report)?;

    record_run(&RunRecord {
        ts: report.generated_at.clone(),
        backend: report.backend,
        model: report.model.clone(),
        images: report.summary.total,
        compliant: report.summary.compliant,
        report: plan.output.to_string_lossy().to_string(),
    });

    let saved_to = plan.output.display().to_string();
    print_one(json, &report, |r| {
        format!(
            "{}\n\nCompliance report saved to '{}'",
            render_report(r),
            saved_to
        )
    })?;
    Ok(())
}
