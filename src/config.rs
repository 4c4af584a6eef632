use std::path::PathBuf;
use std::time::Duration;

use crate::chat::DEFAULT_REPLY_DELAY;
use crate::models::View;
use crate::quiz::DEFAULT_FEEDBACK_DELAY;

pub const DEFAULT_TICK: Duration = Duration::from_millis(50);

/// Runtime settings for the academy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON question bank replacing the built-in questions.
    pub questions_path: Option<PathBuf>,
    pub feedback_delay: Duration,
    pub reply_delay: Duration,
    /// How long the event loop waits for input before checking timers.
    pub tick: Duration,
    pub start_view: View,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            questions_path: None,
            feedback_delay: DEFAULT_FEEDBACK_DELAY,
            reply_delay: DEFAULT_REPLY_DELAY,
            tick: DEFAULT_TICK,
            start_view: View::Home,
            log_file: None,
        }
    }
}
