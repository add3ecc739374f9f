//! Outputs of the room orchestrator.
//!
//! Everything here is a detached, serializable view: callers never hold a
//! reference into the live game state.

use room_domain::{
    Addressee, GameEvent, GameOutcome, GamePhase, Language, Participant, ParticipantId,
    VoteMatch, VoteTally,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of most recent events included in a [`GameSnapshot`]
pub const SNAPSHOT_EVENT_WINDOW: usize = 20;

/// Public view of one seat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantView {
    pub id: ParticipantId,
    pub emoji: String,
    pub real_name: String,
    pub appearance: String,
    pub display_name: String,
    pub color: String,
    pub introduced: bool,
    pub votes: u32,
    pub voted_for: Option<ParticipantId>,
    pub connected: bool,
}

impl ParticipantView {
    pub fn new(participant: &Participant, connected: bool) -> Self {
        Self {
            id: participant.id.clone(),
            emoji: participant.persona.emoji.clone(),
            real_name: participant.persona.real_name.clone(),
            appearance: participant.persona.appearance.clone(),
            display_name: participant.display_name().to_string(),
            color: participant.persona.color.clone(),
            introduced: participant.introduced,
            votes: participant.votes,
            voted_for: participant.voted_for.clone(),
            connected,
        }
    }

    /// `emoji display_name`, the way the console shows a speaker
    pub fn label(&self) -> String {
        format!("{} {}", self.emoji, self.display_name)
    }
}

/// Who a fan-out reached
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastReport {
    /// Recipients that received the message, in delivery order
    pub delivered: Vec<ParticipantId>,
    /// Recipients whose delivery failed
    pub failed: Vec<ParticipantId>,
}

impl BroadcastReport {
    pub fn is_empty(&self) -> bool {
        self.delivered.is_empty() && self.failed.is_empty()
    }
}

/// Result of asking one participant to act
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub participant: ParticipantId,
    pub emoji: String,
    /// Display identity after introduction detection
    pub display_name: String,
    pub color: String,
    pub introduced: bool,
    /// Whether this action is the one that revealed the speaker
    pub newly_introduced: bool,
    pub thought: String,
    pub speech: String,
    pub target: Addressee,
    /// Fan-out of the speech, absent when nothing was said aloud
    pub broadcast: Option<BroadcastReport>,
}

/// Result of one participant's vote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteOutcome {
    pub voter: ParticipantId,
    pub candidate: ParticipantId,
    /// The candidate as the voter knows them, or the self word for a self-vote
    pub candidate_label: String,
    pub matched: VoteMatch,
    pub reply: String,
    pub tally: VoteTally,
}

impl VoteOutcome {
    pub fn is_self_vote(&self) -> bool {
        self.voter == self.candidate
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnStatus {
    pub turn: u32,
    pub phase: GamePhase,
}

/// Observer-facing view of the whole game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub turn: u32,
    pub phase: GamePhase,
    pub language: Language,
    pub participants: Vec<ParticipantView>,
    /// The last [`SNAPSHOT_EVENT_WINDOW`] events, oldest first
    pub recent_events: Vec<GameEvent>,
    pub outcome: Option<GameOutcome>,
}

impl GameSnapshot {
    pub fn participant(&self, id: &ParticipantId) -> Option<&ParticipantView> {
        self.participants.iter().find(|p| &p.id == id)
    }
}

/// Everything known about one participant, secrets included
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantHistory {
    pub participant: ParticipantId,
    pub real_name: String,
    pub emoji: String,
    pub appearance: String,
    pub personality: String,
    pub secret_goal: String,
    pub introduced: bool,
    pub votes: u32,
    pub voted_for: Option<ParticipantId>,
    pub knows: BTreeMap<ParticipantId, String>,
    /// Events this participant produced, oldest first
    pub history: Vec<GameEvent>,
}
