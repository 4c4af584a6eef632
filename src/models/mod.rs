mod chat;
mod question;
mod view;

pub use chat::{ChatMessage, Role};
pub use question::{Question, NUM_OPTIONS};
pub use view::View;
