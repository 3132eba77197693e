use crate::ui::mvi::UiState;

pub const DEFAULT_INTRODUCTION: &str = "Hello!";
pub const DEFAULT_BUTTON_TEXT: &str = "Exit";

/// Local state of a mounted greeting panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingState {
    pub introduction: String,
    pub button_text: String,
    /// Clicks recorded by the counter variant.
    pub count: i64,
}

impl Default for GreetingState {
    fn default() -> Self {
        Self {
            introduction: DEFAULT_INTRODUCTION.to_string(),
            button_text: DEFAULT_BUTTON_TEXT.to_string(),
            count: 0,
        }
    }
}

impl UiState for GreetingState {}
