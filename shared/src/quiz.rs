use serde::{Serialize, Deserialize};

use crate::constants::{default_questions, DEFAULT_TITLE, DEFAULT_WHEEL_COLORS};

/// A single two-option trivia question. Immutable for the duration of a
/// round; only the settings panel creates or edits these.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: [String; 2],
    pub correct_index: usize,
}

impl Question {
    pub fn is_correct_choice(&self, option_index: usize) -> bool {
        option_index == self.correct_index
    }
}

/// Everything the settings panel can edit: the page title, the question
/// bank, the wheel palette, and an optional cap on how many questions a
/// round uses.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct QuizConfig {
    pub title: String,
    pub questions: Vec<Question>,
    pub wheel_colors: Vec<String>,
    // 0 means every question in the bank is in play
    pub max_questions: usize,
}

impl QuizConfig {
    /// The questions actually in play this round: the first `max_questions`
    /// of the bank, or the whole bank when the cap is 0 or exceeds it.
    pub fn active_questions(&self) -> &[Question] {
        if self.max_questions == 0 {
            &self.questions
        } else {
            let cap = self.max_questions.min(self.questions.len());
            &self.questions[..cap]
        }
    }

    /// Removes a question, keeping at least one in the bank. An explicit
    /// cap is pulled back so it never sits above the new bank size.
    pub fn remove_question(&mut self, index: usize) {
        if self.questions.len() <= 1 || index >= self.questions.len() {
            return;
        }
        self.questions.remove(index);
        if self.max_questions > self.questions.len() {
            self.max_questions = self.questions.len();
        }
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            questions: default_questions(),
            wheel_colors: DEFAULT_WHEEL_COLORS.iter().map(|c| c.to_string()).collect(),
            max_questions: 0,
        }
    }
}

/// One answered question, kept in answer order for the end-of-round recap.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AnswerRecord {
    pub question_id: String,
    pub is_correct: bool,
}

/// Per-round bookkeeping: which questions are resolved, how many were
/// answered correctly, and the order it all happened in.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct GameProgress {
    pub answered_ids: Vec<String>,
    pub score: usize,
    pub history: Vec<AnswerRecord>,
}

impl GameProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_answered(&self, question_id: &str) -> bool {
        self.answered_ids.iter().any(|id| id == question_id)
    }

    /// Records an answer exactly once per question; a second report for the
    /// same id is ignored.
    pub fn record(&mut self, question_id: &str, is_correct: bool) {
        if self.is_answered(question_id) {
            log::info!("Question {} already answered, ignoring duplicate report.", question_id);
            return;
        }
        self.answered_ids.push(question_id.to_string());
        if is_correct {
            self.score += 1;
        }
        self.history.push(AnswerRecord {
            question_id: question_id.to_string(),
            is_correct,
        });
    }

    /// How many of the given questions have been answered. Stale ids from
    /// an edited bank are not counted.
    pub fn answered_within(&self, questions: &[Question]) -> usize {
        questions.iter().filter(|q| self.is_answered(&q.id)).count()
    }

    pub fn is_complete(&self, questions: &[Question]) -> bool {
        !questions.is_empty() && self.answered_within(questions) == questions.len()
    }

    /// Score as a whole percentage of the given round size.
    pub fn percent(&self, total: usize) -> u32 {
        if total == 0 {
            return 0;
        }
        ((self.score as f64 / total as f64) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: &str) -> Question {
        Question {
            id: id.to_string(),
            text: format!("Question {}", id),
            options: ["Yes".to_string(), "No".to_string()],
            correct_index: 0,
        }
    }

    #[test]
    fn test_record_scores_correct_answers_only() {
        let mut progress = GameProgress::new();
        progress.record("1", true);
        progress.record("2", false);
        progress.record("3", true);
        assert_eq!(progress.score, 2);
        assert_eq!(progress.answered_ids, vec!["1", "2", "3"]);
        assert_eq!(progress.history.len(), 3);
        assert!(progress.history[1].question_id == "2" && !progress.history[1].is_correct);
    }

    #[test]
    fn test_record_ignores_duplicate_answers() {
        let mut progress = GameProgress::new();
        progress.record("1", true);
        progress.record("1", true);
        progress.record("1", false);
        assert_eq!(progress.score, 1);
        assert_eq!(progress.answered_ids.len(), 1);
        assert_eq!(progress.history.len(), 1);
    }

    #[test]
    fn test_completion_tracks_the_active_set() {
        let questions: Vec<Question> = ["1", "2", "3"].iter().map(|id| question(id)).collect();
        let mut progress = GameProgress::new();
        assert!(!progress.is_complete(&questions));
        progress.record("1", true);
        progress.record("3", false);
        assert_eq!(progress.answered_within(&questions), 2);
        assert!(!progress.is_complete(&questions));
        progress.record("2", true);
        assert!(progress.is_complete(&questions));
        // an empty round is never "complete"
        assert!(!progress.is_complete(&[]));
    }

    #[test]
    fn test_answered_within_skips_stale_ids() {
        let questions: Vec<Question> = ["1", "2"].iter().map(|id| question(id)).collect();
        let mut progress = GameProgress::new();
        progress.record("removed-question", true);
        assert_eq!(progress.answered_within(&questions), 0);
        assert!(!progress.is_complete(&questions));
    }

    #[test]
    fn test_active_questions_cap() {
        let mut config = QuizConfig::default();
        assert_eq!(config.active_questions().len(), config.questions.len());
        config.max_questions = 3;
        assert_eq!(config.active_questions().len(), 3);
        assert_eq!(config.active_questions()[0].id, config.questions[0].id);
        // a cap larger than the bank falls back to the whole bank
        config.max_questions = 99;
        assert_eq!(config.active_questions().len(), config.questions.len());
    }

    #[test]
    fn test_remove_question_keeps_cap_within_bank() {
        let mut config = QuizConfig::default();
        let bank = config.questions.len();
        config.max_questions = bank;
        config.remove_question(2);
        assert_eq!(config.questions.len(), bank - 1);
        assert_eq!(config.max_questions, bank - 1);
        assert!(config.questions.iter().all(|q| q.id != "3"));

        // a cap already inside the bank is left alone, as is the 0 "use
        // everything" setting
        let mut config = QuizConfig::default();
        config.max_questions = 3;
        config.remove_question(0);
        assert_eq!(config.max_questions, 3);
        let mut config = QuizConfig::default();
        config.remove_question(0);
        assert_eq!(config.max_questions, 0);
    }

    #[test]
    fn test_remove_question_never_empties_the_bank() {
        let mut config = QuizConfig::default();
        config.questions.truncate(1);
        config.remove_question(0);
        assert_eq!(config.questions.len(), 1);

        let mut config = QuizConfig::default();
        let bank = config.questions.len();
        config.remove_question(99);
        assert_eq!(config.questions.len(), bank);
    }

    #[test]
    fn test_percent_rounds_and_handles_empty() {
        let mut progress = GameProgress::new();
        progress.record("1", true);
        progress.record("2", false);
        progress.record("3", false);
        assert_eq!(progress.percent(3), 33);
        assert_eq!(progress.percent(0), 0);
        progress.record("4", true);
        assert_eq!(progress.percent(4), 50);
    }
}
