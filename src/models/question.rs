use serde::Deserialize;

pub const NUM_OPTIONS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub options: [String; NUM_OPTIONS],
    pub correct_answer: usize,
}

impl Question {
    pub fn new(prompt: &str, options: [&str; NUM_OPTIONS], correct_answer: usize) -> Self {
        Self {
            prompt: prompt.to_string(),
            options: options.map(str::to_string),
            correct_answer,
        }
    }

    /// Out-of-range indices are never correct.
    pub fn is_correct(&self, option_index: usize) -> bool {
        option_index == self.correct_answer
    }
}
