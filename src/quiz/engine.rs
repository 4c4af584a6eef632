use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::models::Question;

use super::grade::Grade;
use super::session::{PendingAdvance, QuizSession};

/// How long answer feedback stays on screen before the quiz moves on.
pub const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_millis(1000);

/// Owns the fixed question list and applies session transitions.
#[derive(Debug, Clone)]
pub struct QuizEngine {
    questions: Vec<Question>,
    feedback_delay: Duration,
}

impl QuizEngine {
    pub fn new(questions: Vec<Question>, feedback_delay: Duration) -> Self {
        Self {
            questions,
            feedback_delay,
        }
    }

    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self::new(questions, DEFAULT_FEEDBACK_DELAY)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// A fresh attempt at question 0 with a new identity.
    pub fn reset(&self) -> QuizSession {
        QuizSession::new(self.questions.len())
    }

    pub fn current_question<'a>(&'a self, session: &QuizSession) -> Option<&'a Question> {
        self.questions.get(session.current_index())
    }

    /// Record an answer for the current question.
    ///
    /// Ignored unless the session is waiting for an answer. Any index that
    /// is not the correct option, including one past the last option,
    /// counts as wrong. The returned pending advance must be handed back to
    /// [`QuizEngine::advance`] once it is due.
    pub fn answer(
        &self,
        session: QuizSession,
        option_index: usize,
        now: Instant,
    ) -> (QuizSession, Option<PendingAdvance>) {
        if session.is_awaiting_advance() || session.is_completed() {
            debug!(
                "ignoring answer {} for question {}: not accepting answers",
                option_index,
                session.current_index()
            );
            return (session, None);
        }
        let Some(question) = self.current_question(&session) else {
            return (session, None);
        };

        let correct = question.is_correct(option_index);
        if option_index >= question.options.len() {
            debug!("answer {} is out of range, counted as incorrect", option_index);
        }

        let session = session.record_answer(option_index, correct, now + self.feedback_delay);
        debug!(
            "question {} answered with {} ({}), score {}",
            session.current_index(),
            option_index,
            if correct { "correct" } else { "incorrect" },
            session.score()
        );
        let pending = session.pending_advance();
        (session, pending)
    }

    /// Apply a scheduled advance.
    ///
    /// A pending advance only applies to the session and question it was
    /// created for; anything else is dropped.
    pub fn advance(&self, session: QuizSession, pending: &PendingAdvance) -> QuizSession {
        if pending.session_id != session.id()
            || pending.index != session.current_index()
            || !session.is_awaiting_advance()
        {
            warn!(
                "dropping stale advance for session {} question {}",
                pending.session_id, pending.index
            );
            return session;
        }

        let session = session.advanced(self.questions.len());
        if session.is_completed() {
            debug!(
                "session {} completed with score {}/{}",
                session.id(),
                session.score(),
                self.questions.len()
            );
        }
        session
    }

    /// Advance if the session's own deadline has passed.
    pub fn tick(&self, session: QuizSession, now: Instant) -> QuizSession {
        match session.pending_advance() {
            Some(pending) if pending.due <= now => self.advance(session, &pending),
            _ => session,
        }
    }

    pub fn grade(&self, session: &QuizSession) -> Grade {
        Grade::classify(session.score(), self.questions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::Phase;

    fn engine() -> QuizEngine {
        let questions = vec![
            Question::new("q1", ["a", "b", "c", "d"], 1),
            Question::new("q2", ["a", "b", "c", "d"], 1),
            Question::new("q3", ["a", "b", "c", "d"], 0),
        ];
        QuizEngine::new(questions, Duration::from_millis(1000))
    }

    fn answer_and_advance(engine: &QuizEngine, session: QuizSession, option: usize) -> QuizSession {
        let (session, pending) = engine.answer(session, option, Instant::now());
        engine.advance(session, &pending.unwrap())
    }

    #[test]
    fn test_initial_state() {
        let engine = engine();
        let session = engine.reset();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.phase(), Phase::InProgress);
        assert_eq!(engine.current_question(&session).unwrap().prompt, "q1");
        assert_eq!(engine.total_questions(), 3);
    }

    #[test]
    fn test_correct_answer_scores_once() {
        let engine = engine();
        let now = Instant::now();
        let (session, pending) = engine.answer(engine.reset(), 1, now);
        assert_eq!(session.score(), 1);
        assert_eq!(session.selected_answer(), Some(1));
        assert!(session.is_awaiting_advance());

        let pending = pending.unwrap();
        assert_eq!(pending.session_id, session.id());
        assert_eq!(pending.index, 0);
        assert_eq!(pending.due, now + Duration::from_millis(1000));
    }

    #[test]
    fn test_incorrect_and_out_of_range_leave_score() {
        let engine = engine();
        let (session, _) = engine.answer(engine.reset(), 2, Instant::now());
        assert_eq!(session.score(), 0);

        let (session, pending) = engine.answer(engine.reset(), 17, Instant::now());
        assert_eq!(session.score(), 0);
        assert_eq!(session.selected_answer(), Some(17));
        assert!(pending.is_some());
    }

    #[test]
    fn test_second_answer_while_pending_is_ignored() {
        let engine = engine();
        let (session, _) = engine.answer(engine.reset(), 1, Instant::now());
        let (again, pending) = engine.answer(session.clone(), 1, Instant::now());
        assert!(pending.is_none());
        assert_eq!(again, session);
        assert_eq!(again.score(), 1);
        assert_eq!(again.current_index(), 0);
    }

    #[test]
    fn test_scenario_score_two() {
        let engine = engine();
        let mut session = engine.reset();
        for option in [1, 0, 0] {
            session = answer_and_advance(&engine, session, option);
            assert!(session.score() <= session.current_index() + 1);
        }
        assert_eq!(session.score(), 2);
        assert!(session.is_completed());
        assert_eq!(session.current_index(), 2);
        assert_eq!(engine.grade(&session), Grade::GoodJob);
        assert_eq!(session.answers(), &[Some(1), Some(0), Some(0)]);
    }

    #[test]
    fn test_grades_for_each_score() {
        let engine = engine();
        let cases = [
            ([1, 1, 0], Grade::Perfect),
            ([1, 0, 0], Grade::GoodJob),
            ([1, 0, 1], Grade::NeedsImprovement),
        ];
        for (answers, expected) in cases {
            let mut session = engine.reset();
            for option in answers {
                session = answer_and_advance(&engine, session, option);
            }
            assert_eq!(engine.grade(&session), expected);
        }
    }

    #[test]
    fn test_completed_session_stops_advancing() {
        let engine = engine();
        let mut session = engine.reset();
        for option in [1, 1, 0] {
            session = answer_and_advance(&engine, session, option);
        }
        assert!(session.is_completed());

        let (after, pending) = engine.answer(session.clone(), 0, Instant::now());
        assert!(pending.is_none());
        assert_eq!(after, session);
        assert_eq!(engine.tick(after, Instant::now()).current_index(), 2);
    }

    #[test]
    fn test_reset_from_completed() {
        let engine = engine();
        let mut session = engine.reset();
        for option in [1, 1, 0] {
            session = answer_and_advance(&engine, session, option);
        }
        let fresh = engine.reset();
        assert_ne!(fresh.id(), session.id());
        assert_eq!(fresh.current_index(), 0);
        assert_eq!(fresh.score(), 0);
        assert_eq!(fresh.phase(), Phase::InProgress);
    }

    #[test]
    fn test_stale_advance_after_reset_is_dropped() {
        let engine = engine();
        let (old, pending) = engine.answer(engine.reset(), 1, Instant::now());
        let fresh = engine.reset();
        let after = engine.advance(fresh.clone(), &pending.unwrap());
        assert_eq!(after, fresh);
        assert_ne!(old.id(), after.id());
    }

    #[test]
    fn test_duplicate_advance_is_dropped() {
        let engine = engine();
        let (session, pending) = engine.answer(engine.reset(), 1, Instant::now());
        let pending = pending.unwrap();
        let session = engine.advance(session, &pending);
        assert_eq!(session.current_index(), 1);

        let session = engine.advance(session, &pending);
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_tick_waits_for_deadline() {
        let engine = engine();
        let now = Instant::now();
        let (session, _) = engine.answer(engine.reset(), 1, now);

        let session = engine.tick(session, now + Duration::from_millis(999));
        assert!(session.is_awaiting_advance());

        let session = engine.tick(session, now + Duration::from_millis(1000));
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.selected_answer(), None);
    }

    #[test]
    fn test_empty_engine_ignores_answers() {
        let engine = QuizEngine::with_questions(Vec::new());
        let (session, pending) = engine.answer(engine.reset(), 0, Instant::now());
        assert!(pending.is_none());
        assert_eq!(session.score(), 0);
        assert!(engine.current_question(&session).is_none());
    }
}
