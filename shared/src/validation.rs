use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::quiz::{Question, QuizConfig};

pub const MAX_TITLE_LENGTH: usize = 80;
pub const MAX_QUESTION_LENGTH: usize = 300;
pub const MAX_OPTION_LENGTH: usize = 120;

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap()
});

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() || title.chars().count() > MAX_TITLE_LENGTH {
        return Err(ValidationError::new("invalid_title"));
    }
    Ok(())
}

pub fn validate_hex_color(color: &str) -> Result<(), ValidationError> {
    if !HEX_COLOR.is_match(color) {
        return Err(ValidationError::new("invalid_color"));
    }
    Ok(())
}

pub fn validate_question(question: &Question) -> Result<(), ValidationError> {
    if question.text.trim().is_empty() || question.text.chars().count() > MAX_QUESTION_LENGTH {
        return Err(ValidationError::new("invalid_question_text"));
    }
    if question
        .options
        .iter()
        .any(|option| option.trim().is_empty() || option.chars().count() > MAX_OPTION_LENGTH)
    {
        return Err(ValidationError::new("invalid_question_options"));
    }
    if question.correct_index >= question.options.len() {
        return Err(ValidationError::new("invalid_correct_index"));
    }
    Ok(())
}

/// Checks a whole configuration before it is saved. The wheel needs at
/// least one question and one color to have any geometry at all.
pub fn validate_config(config: &QuizConfig) -> Result<(), ValidationError> {
    validate_title(&config.title)?;
    if config.questions.is_empty() {
        return Err(ValidationError::new("empty_question_bank"));
    }
    for question in &config.questions {
        validate_question(question)?;
    }
    if config.wheel_colors.is_empty() {
        return Err(ValidationError::new("empty_color_list"));
    }
    for color in &config.wheel_colors {
        validate_hex_color(color)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_question() -> Question {
        Question {
            id: "q".to_string(),
            text: "Which way is up?".to_string(),
            options: ["This way".to_string(), "That way".to_string()],
            correct_index: 1,
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&QuizConfig::default()).is_ok());
    }

    #[test]
    fn test_title_rejects_blank_and_overlong() {
        assert!(validate_title("Trivia Night").is_ok());
        assert!(validate_title("   ").is_err());
        assert!(validate_title(&"x".repeat(MAX_TITLE_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_hex_color_shapes() {
        assert!(validate_hex_color("#EF4444").is_ok());
        assert!(validate_hex_color("#ef4444").is_ok());
        assert!(validate_hex_color("EF4444").is_err());
        assert!(validate_hex_color("#EF44").is_err());
        assert!(validate_hex_color("#GGGGGG").is_err());
    }

    #[test]
    fn test_question_needs_both_options() {
        let mut question = valid_question();
        question.options[1] = "  ".to_string();
        assert_eq!(
            validate_question(&question).unwrap_err().code,
            "invalid_question_options"
        );
    }

    #[test]
    fn test_question_rejects_blank_text() {
        let mut question = valid_question();
        question.text = String::new();
        assert!(validate_question(&question).is_err());
    }

    #[test]
    fn test_question_rejects_out_of_range_answer() {
        let mut question = valid_question();
        question.correct_index = 2;
        assert_eq!(
            validate_question(&question).unwrap_err().code,
            "invalid_correct_index"
        );
    }

    #[test]
    fn test_config_rejects_empty_bank_and_palette() {
        let mut config = QuizConfig::default();
        config.questions.clear();
        assert_eq!(
            validate_config(&config).unwrap_err().code,
            "empty_question_bank"
        );

        let mut config = QuizConfig::default();
        config.wheel_colors.clear();
        assert_eq!(
            validate_config(&config).unwrap_err().code,
            "empty_color_list"
        );
    }

    #[test]
    fn test_config_surfaces_bad_member_question() {
        let mut config = QuizConfig::default();
        config.questions[2].options[0] = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_parsed_config_can_still_fail_validation() {
        // Payloads an older session could have left in storage: both
        // deserialize cleanly, neither is safe to hand to the views.
        let raw = r#"{
            "title": "Trivia Wheel",
            "questions": [
                {"id": "1", "text": "Up or down?", "options": ["Up", "Down"], "correct_index": 0}
            ],
            "wheel_colors": [],
            "max_questions": 0
        }"#;
        let config: QuizConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(validate_config(&config).unwrap_err().code, "empty_color_list");

        let raw = r##"{
            "title": "Trivia Wheel",
            "questions": [
                {"id": "1", "text": "Up or down?", "options": ["Up", "Down"], "correct_index": 7}
            ],
            "wheel_colors": ["#EF4444"],
            "max_questions": 0
        }"##;
        let config: QuizConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(
            validate_config(&config).unwrap_err().code,
            "invalid_correct_index"
        );
    }
}
