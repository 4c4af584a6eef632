//! The quiz engine: question progression, scoring and grading.

mod engine;
mod grade;
mod session;

pub use engine::{QuizEngine, DEFAULT_FEEDBACK_DELAY};
pub use grade::Grade;
pub use session::{PendingAdvance, Phase, QuizSession};
