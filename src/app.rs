use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::chat::{Chat, PendingReply};
use crate::clock::Clock;
use crate::config::Config;
use crate::content::{pattern_at, pattern_count, Pattern, LESSONS};
use crate::models::{Question, View, NUM_OPTIONS};
use crate::quiz::{Grade, PendingAdvance, QuizEngine, QuizSession};
use crate::scheduler::Scheduler;
use crate::ui;

/// A delayed follow-up the event loop applies once it is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Followup {
    Advance(PendingAdvance),
    Reply(PendingReply),
}

pub struct App {
    pub view: View,
    pub should_quit: bool,
    engine: QuizEngine,
    session: QuizSession,
    selected_option: usize,
    result_scroll: usize,
    lesson_cursor: usize,
    pattern_cursor: usize,
    open_pattern: Option<usize>,
    refactoring_scroll: usize,
    chat: Chat,
    chat_input: String,
    followups: Scheduler<Followup>,
    clock: Clock,
    rng: StdRng,
}

impl App {
    pub fn new(questions: Vec<Question>, config: &Config) -> Self {
        let engine = QuizEngine::new(questions, config.feedback_delay);
        let session = engine.reset();

        Self {
            view: config.start_view,
            should_quit: false,
            engine,
            session,
            selected_option: 0,
            result_scroll: 0,
            lesson_cursor: 0,
            pattern_cursor: 0,
            open_pattern: None,
            refactoring_scroll: 0,
            chat: Chat::new(config.reply_delay),
            chat_input: String::new(),
            followups: Scheduler::new(),
            clock: Clock::System,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Swap the clock and reply RNG for deterministic runs.
    pub fn with_clock(mut self, clock: Clock, seed: u64) -> Self {
        self.clock = clock;
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn navigate(&mut self, view: View) {
        if self.view != view {
            debug!("navigating {} -> {}", self.view, view);
            self.view = view;
        }
    }

    pub fn next_view(&mut self) {
        self.navigate(self.view.next());
    }

    pub fn previous_view(&mut self) {
        self.navigate(self.view.previous());
    }

    // ------------------------------------------------------------------
    // Quiz
    // ------------------------------------------------------------------

    pub fn engine(&self) -> &QuizEngine {
        &self.engine
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.engine.current_question(&self.session)
    }

    pub fn total_questions(&self) -> usize {
        self.engine.total_questions()
    }

    pub fn grade(&self) -> Grade {
        self.engine.grade(&self.session)
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    /// Whether the quiz is taking answers right now.
    pub fn accepts_answers(&self) -> bool {
        !self.session.is_awaiting_advance() && !self.session.is_completed()
    }

    pub fn select_next_option(&mut self) {
        if self.accepts_answers() {
            self.selected_option = (self.selected_option + 1) % NUM_OPTIONS;
        }
    }

    pub fn select_previous_option(&mut self) {
        if self.accepts_answers() {
            self.selected_option = (self.selected_option + NUM_OPTIONS - 1) % NUM_OPTIONS;
        }
    }

    pub fn submit_answer(&mut self) {
        self.answer(self.selected_option);
    }

    /// Answer the current question and schedule the advance.
    pub fn answer(&mut self, option_index: usize) {
        let now = self.clock.now();
        let session = self.session.clone();
        let (session, pending) = self.engine.answer(session, option_index, now);
        self.session = session;

        if let Some(pending) = pending {
            self.followups.schedule(pending.due, Followup::Advance(pending));
        }
    }

    pub fn restart_quiz(&mut self) {
        let stale = self.session.id();
        let dropped = self
            .followups
            .cancel(|f| matches!(f, Followup::Advance(p) if p.session_id == stale));
        self.session = self.engine.reset();
        self.selected_option = 0;
        self.result_scroll = 0;
        info!(
            "quiz restarted (session {}, {} pending advance dropped)",
            self.session.id(),
            dropped
        );
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn scroll_results_down(&mut self) {
        let max_scroll = self.total_questions().saturating_sub(1);
        self.result_scroll = (self.result_scroll + 1).min(max_scroll);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    // ------------------------------------------------------------------
    // Learn, patterns and refactoring
    // ------------------------------------------------------------------

    pub fn lesson_cursor(&self) -> usize {
        self.lesson_cursor
    }

    pub fn select_next_lesson(&mut self) {
        self.lesson_cursor = (self.lesson_cursor + 1).min(LESSONS.len() - 1);
    }

    pub fn select_previous_lesson(&mut self) {
        self.lesson_cursor = self.lesson_cursor.saturating_sub(1);
    }

    pub fn pattern_cursor(&self) -> usize {
        self.pattern_cursor
    }

    pub fn select_next_pattern(&mut self) {
        if self.open_pattern.is_none() {
            self.pattern_cursor = (self.pattern_cursor + 1).min(pattern_count().saturating_sub(1));
        }
    }

    pub fn select_previous_pattern(&mut self) {
        if self.open_pattern.is_none() {
            self.pattern_cursor = self.pattern_cursor.saturating_sub(1);
        }
    }

    /// The pattern whose detail page is showing, if any.
    pub fn open_pattern(&self) -> Option<&'static Pattern> {
        self.open_pattern
            .and_then(pattern_at)
            .map(|(_, pattern)| pattern)
    }

    /// Open the pattern under the cursor. Patterns without a write-up stay closed.
    pub fn open_selected_pattern(&mut self) {
        match pattern_at(self.pattern_cursor) {
            Some((_, pattern)) if pattern.detail.is_some() => {
                debug!("opening pattern {}", pattern.name);
                self.open_pattern = Some(self.pattern_cursor);
            }
            Some((_, pattern)) => debug!("no detail page for {}", pattern.name),
            None => {}
        }
    }

    pub fn close_pattern(&mut self) {
        self.open_pattern = None;
    }

    pub fn refactoring_scroll(&self) -> usize {
        self.refactoring_scroll
    }

    pub fn scroll_refactoring_down(&mut self) {
        let max_scroll = ui::refactoring_line_count().saturating_sub(1);
        self.refactoring_scroll = (self.refactoring_scroll + 1).min(max_scroll);
    }

    pub fn scroll_refactoring_up(&mut self) {
        self.refactoring_scroll = self.refactoring_scroll.saturating_sub(1);
    }

    // ------------------------------------------------------------------
    // Chat
    // ------------------------------------------------------------------

    pub fn chat(&self) -> &Chat {
        &self.chat
    }

    pub fn chat_input(&self) -> &str {
        &self.chat_input
    }

    pub fn chat_input_push(&mut self, c: char) {
        self.chat_input.push(c);
    }

    pub fn chat_input_pop(&mut self) {
        self.chat_input.pop();
    }

    pub fn clear_chat_input(&mut self) {
        self.chat_input.clear();
    }

    pub fn send_chat(&mut self) {
        let now = self.clock.now();
        if let Some(pending) = self.chat.send(&self.chat_input, now) {
            self.followups.schedule(pending.due, Followup::Reply(pending));
            self.chat_input.clear();
        }
    }

    pub fn clear_chat(&mut self) {
        let stale = self.chat.id();
        self.followups
            .cancel(|f| matches!(f, Followup::Reply(p) if p.chat_id == stale));
        self.chat.clear();
        self.chat_input.clear();
    }

    /// Whether an assistant reply is still on its way.
    pub fn reply_pending(&self) -> bool {
        let id = self.chat.id();
        self.followups
            .any(|f| matches!(f, Followup::Reply(p) if p.chat_id == id))
    }

    // ------------------------------------------------------------------
    // Timers
    // ------------------------------------------------------------------

    pub fn pending_followups(&self) -> usize {
        self.followups.len()
    }

    /// Apply every follow-up that has come due.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        for followup in self.followups.take_due(now) {
            match followup {
                Followup::Advance(pending) => {
                    let session = self.session.clone();
                    self.session = self.engine.advance(session, &pending);
                    if !self.session.is_awaiting_advance() {
                        self.selected_option = 0;
                    }
                }
                Followup::Reply(pending) => {
                    self.chat.deliver(&pending, &mut self.rng);
                }
            }
        }
    }
}
