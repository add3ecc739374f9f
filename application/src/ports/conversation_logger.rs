//! Port for structured game transcript logging.
//!
//! Defines the [`ConversationLogger`] trait for recording game events (agent
//! prompts and replies, speech, identity reveals, votes, turn changes) to a
//! structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the full
//! game transcript in a machine-readable format (JSONL).

use serde_json::Value;

/// A structured game event for logging.
///
/// Each event has a type string and a JSON payload containing event-specific
/// fields. The writer adds the timestamp.
pub struct ConversationEvent {
    /// Event type identifier (e.g., "agent_reply", "speech", "vote").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging game events to a structured log.
///
/// `log` is synchronous and non-fallible: a broken transcript must never
/// interrupt the game.
pub trait ConversationLogger: Send + Sync {
    /// Record a game event.
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
