use crate::domain::models::Answer;

/// Normalizes free model text to `Yes`/`No`.
///
/// The first standalone `yes` or `no` word decides; text with neither counts as `No`.
pub fn normalize(response: &str) -> Answer {
    let lowered = response.to_lowercase();
    for word in lowered.split(|c: char| !c.is_alphanumeric()) {
        match word {
            "yes" => return Answer::Yes,
            "no" => return Answer::No,
            _ => {}
        }
    }
    Answer::No
}

/// Splits a multi-line completion into exactly `expected` answers.
///
/// Blank lines are dropped, extra lines ignored and missing answers padded with `Error`.
pub fn parse_completion(text: &str, expected: usize) -> Vec<Answer> {
    let mut answers: Vec<Answer> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take(expected)
        .map(normalize)
        .collect();
    answers.resize(expected, Answer::Error);
    answers
}

pub fn error_answers(expected: usize) -> Vec<Answer> {
    vec![Answer::Error; expected]
}
