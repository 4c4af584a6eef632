//! Quiz session state: a plain value with pure transitions.
//!
//! The session never touches the question list itself; the engine hands
//! it the facts it needs (whether the answer was right, how many questions
//! there are) and gets a new session back.

use std::time::Instant;

use uuid::Uuid;

/// Where a session sits in the question sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for an answer to the current question.
    InProgress,
    /// An answer was recorded and is on display until `deadline`.
    AwaitingAdvance { selected: usize, deadline: Instant },
    /// The last question has been answered.
    Completed,
}

/// A scheduled advance, tagged with the session it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingAdvance {
    pub session_id: Uuid,
    pub index: usize,
    pub due: Instant,
}

/// One attempt at the question sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    id: Uuid,
    current_index: usize,
    score: usize,
    phase: Phase,
    answers: Vec<Option<usize>>,
}

impl QuizSession {
    pub(crate) fn new(total: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            current_index: 0,
            score: 0,
            phase: Phase::InProgress,
            answers: vec![None; total],
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// 1-based position for display.
    pub fn current_question_number(&self) -> usize {
        self.current_index + 1
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.phase, Phase::Completed)
    }

    pub fn is_awaiting_advance(&self) -> bool {
        matches!(self.phase, Phase::AwaitingAdvance { .. })
    }

    /// The answer on display for the current question, if any.
    pub fn selected_answer(&self) -> Option<usize> {
        match self.phase {
            Phase::AwaitingAdvance { selected, .. } => Some(selected),
            _ => None,
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        match self.phase {
            Phase::AwaitingAdvance { deadline, .. } => Some(deadline),
            _ => None,
        }
    }

    /// Every answer recorded so far, indexed by question.
    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    pub(crate) fn record_answer(mut self, selected: usize, correct: bool, deadline: Instant) -> Self {
        if self.phase != Phase::InProgress {
            return self;
        }
        if correct {
            self.score += 1;
        }
        if let Some(slot) = self.answers.get_mut(self.current_index) {
            *slot = Some(selected);
        }
        self.phase = Phase::AwaitingAdvance { selected, deadline };
        self
    }

    pub(crate) fn advanced(mut self, total: usize) -> Self {
        if !self.is_awaiting_advance() {
            return self;
        }
        if self.current_index + 1 < total {
            self.current_index += 1;
            self.phase = Phase::InProgress;
        } else {
            self.phase = Phase::Completed;
        }
        self
    }

    pub(crate) fn pending_advance(&self) -> Option<PendingAdvance> {
        self.deadline().map(|due| PendingAdvance {
            session_id: self.id,
            index: self.current_index,
            due,
        })
    }
}
