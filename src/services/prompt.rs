const COMPLETION_PREAMBLE: &str = "The image is from a front-facing camera in a car. Based on this description, answer the following questions with 'yes' or 'no':\n\n";

const VISION_SUFFIX: &str = "Respond with only 'Yes' or 'No'.";

/// Single text prompt carrying every question, one per line.
pub fn completion_prompt(image_name: &str, questions: &[String]) -> String {
    let mut prompt = String::from(COMPLETION_PREAMBLE);
    prompt.push_str(&format!("Image: {}\n", image_name));
    prompt.push_str(&questions.join("\n"));
    prompt
}

pub fn vision_prompt(question: &str) -> String {
    format!("{} {}", question.trim(), VISION_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::constants::ODD_QUESTIONS;

    fn questions() -> Vec<String> {
        ODD_QUESTIONS.iter().map(|q| q.to_string()).collect()
    }

    #[test]
    fn completion_prompt_lists_every_question_after_preamble() {
        let prompt = completion_prompt("road_01.jpg", &questions());
        assert!(prompt.starts_with("The image is from a front-facing camera in a car."));
        assert!(prompt.contains("Image: road_01.jpg\n1. Does this image have poor visibility"));
        assert!(prompt.ends_with("11. Is the road in this image on a hill?"));
        assert_eq!(prompt.lines().filter(|l| l.starts_with(char::is_numeric)).count(), 11);
    }

    #[test]
    fn vision_prompt_asks_for_single_word() {
        assert_eq!(
            vision_prompt("3. Is the road in this image a sharp curve?"),
            "3. Is the road in this image a sharp curve? Respond with only 'Yes' or 'No'."
        );
    }
}
