//! Simulated conversation: an append-only message log plus a two-state
//! turn machine. Replies are canned; nothing here performs I/O.

use crate::mood::MoodStore;
use crate::types::{ChatMessage, MessageId, Sender};
use rand::Rng;
use rand::seq::SliceRandom;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

pub const GREETING: &str =
    "Hello! I'm Neura, your digital doppelganger. How can I help you today?";

pub const CANNED_REPLIES: [&str; 5] = [
    "I'm analyzing that information now...",
    "That's interesting! Tell me more about it.",
    "I'm learning more about you with every conversation.",
    "I've noted this preference in your profile.",
    "Thanks for sharing. This helps me understand you better.",
];

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Processing,
}

/// Ticket for the reply owed to one accepted submission. Resolving a ticket
/// whose turn was cancelled does nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "a pending reply must be resolved or the simulator stays in Processing"]
pub struct PendingReply {
    turn: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatSimulator {
    messages: Vec<ChatMessage>,
    phase: Phase,
    next_id: u64,
    turn: u64,
}

impl Default for ChatSimulator {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSimulator {
    /// A log holding only the assistant's greeting.
    pub fn new() -> Self {
        let mut simulator = Self::empty();
        simulator.push(GREETING.to_string(), Sender::Ai);
        simulator
    }

    pub fn empty() -> Self {
        Self {
            messages: Vec::new(),
            phase: Phase::Idle,
            next_id: 1,
            turn: 0,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_processing(&self) -> bool {
        self.phase == Phase::Processing
    }

    /// Accept user input. Blank text, or a submission while a reply is still
    /// owed, is ignored and returns `None`.
    ///
    /// On success the user message is appended immediately, the mood rules are
    /// applied, and the simulator enters [`Phase::Processing`].
    pub fn submit(&mut self, text: &str, mood: &mut MoodStore) -> Option<PendingReply> {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.is_processing() {
            return None;
        }

        self.push(trimmed.to_string(), Sender::User);
        if let Some(inferred) = mood.apply_inference(trimmed) {
            tracing::debug!(mood = %inferred, "mood inferred from message");
        }

        self.turn += 1;
        self.phase = Phase::Processing;
        Some(PendingReply { turn: self.turn })
    }

    /// Append one canned reply for `pending` and return to idle.
    pub fn resolve<R: Rng + ?Sized>(
        &mut self,
        pending: PendingReply,
        rng: &mut R,
    ) -> Option<&ChatMessage> {
        if !self.is_processing() || pending.turn != self.turn {
            tracing::debug!(turn = pending.turn, "dropping stale reply");
            return None;
        }

        let reply = CANNED_REPLIES
            .choose(rng)
            .copied()
            .unwrap_or(CANNED_REPLIES[0]);
        self.phase = Phase::Idle;
        Some(self.push(reply.to_string(), Sender::Ai))
    }

    /// Abandon the reply currently owed, if any.
    pub fn cancel_pending(&mut self) {
        if self.is_processing() {
            tracing::debug!(turn = self.turn, "pending reply cancelled");
            // bump the turn so the outstanding ticket no longer matches
            self.turn += 1;
            self.phase = Phase::Idle;
        }
    }

    fn push(&mut self, text: String, sender: Sender) -> &ChatMessage {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            text,
            sender,
            timestamp: OffsetDateTime::now_utc(),
        });
        &self.messages[self.messages.len() - 1]
    }
}

pub fn format_timestamp(timestamp: OffsetDateTime) -> Option<String> {
    let mut datetime = timestamp;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime.format(MESSAGE_TIME_FORMAT).ok()
}
