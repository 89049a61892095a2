use crate::cli::ExpectedAnswer;
use crate::domain::models::{Answer, ComplianceStatus, ReportSummary};
use std::collections::BTreeMap;

fn expected_answer(expected: ExpectedAnswer) -> Answer {
    match expected {
        ExpectedAnswer::Yes => Answer::Yes,
        ExpectedAnswer::No => Answer::No,
    }
}

/// An image is compliant only if every answer equals `expected`; `Error` never does.
pub fn classify(answers: &[Answer], expected: ExpectedAnswer) -> ComplianceStatus {
    let want = expected_answer(expected);
    if !answers.is_empty() && answers.iter().all(|a| *a == want) {
        ComplianceStatus::Compliant
    } else {
        ComplianceStatus::NonCompliant
    }
}

pub fn classify_all(
    matrix: &BTreeMap<String, Vec<Answer>>,
    expected: ExpectedAnswer,
) -> BTreeMap<String, ComplianceStatus> {
    matrix
        .iter()
        .map(|(name, answers)| (name.clone(), classify(answers, expected)))
        .collect()
}

pub fn summarize(
    results: &BTreeMap<String, ComplianceStatus>,
    matrix: &BTreeMap<String, Vec<Answer>>,
) -> ReportSummary {
    let compliant = results
        .values()
        .filter(|s| **s == ComplianceStatus::Compliant)
        .count();
    ReportSummary {
        total: results.len(),
        compliant,
        non_compliant: results.len() - compliant,
        errored: matrix
            .values()
            .filter(|answers| answers.contains(&Answer::Error))
            .count(),
    }
}
