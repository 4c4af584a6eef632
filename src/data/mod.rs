mod bank;
mod loader;

pub use bank::builtin_questions;
pub use loader::load_questions_from_json;
