use crate::cli::ExpectedAnswer;
use crate::domain::constants::{ODD_QUESTIONS, REPORT_VERSION};
use crate::domain::models::{Answer, ComplianceReport, ImageFile};
use crate::services::answers::error_answers;
use crate::services::backends::OddBackend;
use crate::services::compliance::{classify_all, summarize};
use std::collections::BTreeMap;
use tracing::{info, warn};

pub fn odd_questions() -> Vec<String> {
    ODD_QUESTIONS.iter().map(|q| q.to_string()).collect()
}

/// Asks every question for every image, one image at a time, and builds the report.
///
/// A failed model call never aborts the run: the image gets `Error` answers.
pub fn run_check(
    backend: &dyn OddBackend,
    images: &[ImageFile],
    questions: &[String],
    compliant_when: ExpectedAnswer,
) -> ComplianceReport {
    let mut matrix: BTreeMap<String, Vec<Answer>> = BTreeMap::new();
    let mut digests = BTreeMap::new();

    for (i, image) in images.iter().enumerate() {
        info!(image = %image.name, "analyzing image {}/{}", i + 1, images.len());
        let mut answers = match backend.assess(image, questions) {
            Ok(a) => a,
            Err(err) => {
                warn!(image = %image.name, error = %err, "model call failed; recording error answers");
                error_answers(questions.len())
            }
        };
        answers.resize(questions.len(), Answer::Error);
        matrix.insert(image.name.clone(), answers);
        digests.insert(image.name.clone(), image.sha256.clone());
    }

    let results = classify_all(&matrix, compliant_when);
    let summary = summarize(&results, &matrix);
    info!(
        total = summary.total,
        compliant = summary.compliant,
        errored = summary.errored,
        "check complete"
    );

    ComplianceReport {
        version: REPORT_VERSION,
        generated_at: chrono::Utc::now().to_rfc3339(),
        backend: backend.kind(),
        model: backend.model().to_string(),
        compliant_when,
        questions: questions.to_vec(),
        summary,
        results,
        matrix,
        digests,
    }
}
