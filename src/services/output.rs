use crate::domain::models::{ComplianceReport, JsonOut};
use serde::Serialize;

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// Text rendering of a report: per-image status, then the question-by-question matrix.
pub fn render_report(report: &ComplianceReport) -> String {
    let mut out = String::from("Compliance Results:\n");
    for (image, status) in &report.results {
        out.push_str(&format!("{}: {}\n", image, status));
    }
    out.push_str("\nCompliance Matrix:\n");
    for (image, answers) in &report.matrix {
        out.push_str(&format!("{}:\n", image));
        for (question, answer) in report.questions.iter().zip(answers) {
            out.push_str(&format!("  {}: {}\n", question, answer));
        }
    }
    let s = &report.summary;
    out.push_str(&format!(
        "\n{} images: {} compliant, {} non-compliant ({} with errors)",
        s.total, s.compliant, s.non_compliant, s.errored
    ));
    out
}
