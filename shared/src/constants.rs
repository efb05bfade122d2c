use crate::quiz::Question;

pub const DEFAULT_TITLE: &str = "Trivia Wheel";

/// Segment palette, cycled by index when there are more questions than
/// colors.
pub const DEFAULT_WHEEL_COLORS: [&str; 8] = [
    "#EF4444", "#F59E0B", "#10B981", "#3B82F6", "#8B5CF6", "#EC4899", "#06B6D4", "#F97316",
];

/// Fill used for segments whose question has already been answered.
pub const ANSWERED_SEGMENT_COLOR: &str = "#94a3b8";

pub const INVALID_TITLE_ERROR: &str = "The title cannot be empty or longer than 80 characters";
pub const INVALID_QUESTION_TEXT_ERROR: &str =
    "Every question needs text of at most 300 characters";
pub const INVALID_QUESTION_OPTIONS_ERROR: &str =
    "Every question needs two non-empty answer options";
pub const INVALID_CORRECT_INDEX_ERROR: &str =
    "Every question must mark one of its two options as correct";
pub const EMPTY_QUESTION_BANK_ERROR: &str = "Keep at least one question in the bank";
pub const EMPTY_COLOR_LIST_ERROR: &str = "Keep at least one wheel color";
pub const INVALID_COLOR_ERROR: &str = "Colors must look like #RRGGBB";

/// Starter question bank for a fresh install.
pub fn default_questions() -> Vec<Question> {
    let entries: [(&str, [&str; 2], usize); 8] = [
        ("Which planet is known as the Red Planet?", ["Mars", "Venus"], 0),
        ("What is the largest ocean on Earth?", ["Atlantic", "Pacific"], 1),
        ("How many continents are there?", ["Seven", "Five"], 0),
        ("Which gas do plants absorb from the air?", ["Oxygen", "Carbon dioxide"], 1),
        ("What is the capital of Japan?", ["Tokyo", "Kyoto"], 0),
        ("Which metal is liquid at room temperature?", ["Mercury", "Iron"], 0),
        ("How many sides does a hexagon have?", ["Five", "Six"], 1),
        ("Which is the longest river in the world?", ["Amazon", "Nile"], 1),
    ];
    entries
        .iter()
        .enumerate()
        .map(|(i, (text, options, correct_index))| Question {
            id: (i + 1).to_string(),
            text: text.to_string(),
            options: [options[0].to_string(), options[1].to_string()],
            correct_index: *correct_index,
        })
        .collect()
}
