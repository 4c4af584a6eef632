//! Scripted learning assistant.
//!
//! There is no language processing: every user message is answered, after
//! a short delay, with one of a handful of canned replies.

use std::time::{Duration, Instant};

use log::{debug, warn};
use rand::Rng;
use uuid::Uuid;

use crate::models::ChatMessage;

pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(500);

pub const GREETING: &str = "Hello! I'm your System Design learning assistant. Ask me anything about scalability, databases, caching, or system architecture!";

pub const CANNED_REPLIES: [&str; 4] = [
    "Great question! Let me explain that concept...",
    "That's an important topic in system design. Here's what you need to know...",
    "I'd recommend checking out the video lessons on this topic for a visual explanation.",
    "This relates to scalability principles. Would you like me to break it down?",
];

/// A reply waiting to be appended, tagged with the conversation it answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingReply {
    pub chat_id: Uuid,
    pub due: Instant,
}

#[derive(Debug, Clone)]
pub struct Chat {
    id: Uuid,
    transcript: Vec<ChatMessage>,
    reply_delay: Duration,
}

impl Chat {
    pub fn new(reply_delay: Duration) -> Self {
        Self {
            id: Uuid::new_v4(),
            transcript: vec![ChatMessage::assistant(GREETING)],
            reply_delay,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Append the user's message and schedule a reply.
    ///
    /// Blank input is ignored.
    pub fn send(&mut self, input: &str, now: Instant) -> Option<PendingReply> {
        if input.trim().is_empty() {
            return None;
        }
        self.transcript.push(ChatMessage::user(input));
        debug!("chat {}: user message #{}", self.id, self.transcript.len() - 1);
        Some(PendingReply {
            chat_id: self.id,
            due: now + self.reply_delay,
        })
    }

    /// Append a canned reply for `pending`. Returns false if the reply
    /// belongs to a conversation that has since been cleared.
    pub fn deliver<R: Rng + ?Sized>(&mut self, pending: &PendingReply, rng: &mut R) -> bool {
        if pending.chat_id != self.id {
            warn!("dropping reply for cleared chat {}", pending.chat_id);
            return false;
        }
        let reply = CANNED_REPLIES[rng.random_range(0..CANNED_REPLIES.len())];
        self.transcript.push(ChatMessage::assistant(reply));
        true
    }

    /// Start over with only the greeting.
    pub fn clear(&mut self) {
        *self = Self::new(self.reply_delay);
    }
}

impl Default for Chat {
    fn default() -> Self {
        Self::new(DEFAULT_REPLY_DELAY)
    }
}
