pub mod end_screen;
pub mod grid;
pub mod help_modal;
pub mod question_modal;
pub mod settings_modal;
pub mod wheel;

pub use end_screen::EndScreen;
pub use grid::QuestionGrid;
pub use help_modal::HelpModal;
pub use question_modal::QuestionModal;
pub use settings_modal::SettingsModal;
pub use wheel::Wheel;
