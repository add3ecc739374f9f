//! Bounded shared event log
//!
//! Entries are typed so that identity reveals render distinctly from speech
//! and per-participant history can be filtered by actor id.

use crate::core::language::Language;
use crate::participant::ParticipantId;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum number of entries kept in the log
pub const EVENT_LOG_CAPACITY: usize = 50;

/// One public event in the room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEvent {
    Speech {
        speaker: ParticipantId,
        emoji: String,
        display_name: String,
        text: String,
    },
    IdentityRevealed {
        participant: ParticipantId,
        emoji: String,
        real_name: String,
    },
    Observer {
        text: String,
    },
}

impl GameEvent {
    /// One-line rendering shown to agents and in the console
    pub fn render(&self, language: Language) -> String {
        match (self, language) {
            (
                GameEvent::Speech {
                    emoji,
                    display_name,
                    text,
                    ..
                },
                _,
            ) => format!("{} {}: \"{}\"", emoji, display_name, text),
            (GameEvent::IdentityRevealed { emoji, real_name, .. }, Language::Russian) => {
                format!("⭐ {} ПРЕДСТАВИЛСЯ: теперь все знают что это {}!", emoji, real_name)
            }
            (GameEvent::IdentityRevealed { emoji, real_name, .. }, Language::English) => {
                format!("⭐ {} INTRODUCED: everyone now knows this is {}!", emoji, real_name)
            }
            (GameEvent::Observer { text }, Language::Russian) => {
                format!("👤 Наблюдатель: \"{}\"", text)
            }
            (GameEvent::Observer { text }, Language::English) => {
                format!("👤 Observer: \"{}\"", text)
            }
        }
    }

    /// Whether this event was produced by the given participant
    pub fn involves(&self, id: &ParticipantId) -> bool {
        match self {
            GameEvent::Speech { speaker, .. } => speaker == id,
            GameEvent::IdentityRevealed { participant, .. } => participant == id,
            GameEvent::Observer { .. } => false,
        }
    }

    pub fn is_identity_reveal(&self) -> bool {
        matches!(self, GameEvent::IdentityRevealed { .. })
    }
}

/// FIFO log with a fixed capacity; the oldest entry is evicted on overflow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    entries: VecDeque<GameEvent>,
    capacity: usize,
}

impl EventLog {
    pub fn new() -> Self {
        Self::with_capacity(EVENT_LOG_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, event: GameEvent) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.entries.iter()
    }

    /// The last `n` entries, oldest first
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &GameEvent> {
        self.entries.iter().skip(self.entries.len().saturating_sub(n))
    }

    /// Rendered lines of the last `n` entries
    pub fn render_recent(&self, n: usize, language: Language) -> Vec<String> {
        self.recent(n).map(|e| e.render(language)).collect()
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observer(i: usize) -> GameEvent {
        GameEvent::Observer {
            text: format!("msg {}", i),
        }
    }

    #[test]
    fn test_log_never_exceeds_capacity() {
        let mut log = EventLog::new();
        for i in 0..120 {
            log.push(observer(i));
            assert!(log.len() <= EVENT_LOG_CAPACITY);
        }
        assert_eq!(log.len(), EVENT_LOG_CAPACITY);
    }

    #[test]
    fn test_oldest_entries_are_evicted_first() {
        let mut log = EventLog::with_capacity(3);
        for i in 0..5 {
            log.push(observer(i));
        }
        let texts: Vec<_> = log.iter().map(|e| e.render(Language::English)).collect();
        assert_eq!(
            texts,
            vec![
                "👤 Observer: \"msg 2\"",
                "👤 Observer: \"msg 3\"",
                "👤 Observer: \"msg 4\"",
            ]
        );
    }

    #[test]
    fn test_recent_returns_tail_in_order() {
        let mut log = EventLog::new();
        for i in 0..20 {
            log.push(observer(i));
        }
        let recent = log.render_recent(2, Language::English);
        assert_eq!(recent, vec!["👤 Observer: \"msg 18\"", "👤 Observer: \"msg 19\""]);
        assert_eq!(log.recent(100).count(), 20);
    }

    #[test]
    fn test_identity_reveal_renders_with_marker() {
        let event = GameEvent::IdentityRevealed {
            participant: ParticipantId::new("p1"),
            emoji: "🎭".to_string(),
            real_name: "Алекс".to_string(),
        };
        let line = event.render(Language::Russian);
        assert!(line.starts_with('⭐'));
        assert!(line.contains("Алекс"));
        assert!(event.is_identity_reveal());
    }

    #[test]
    fn test_involves_matches_actor() {
        let p1 = ParticipantId::new("p1");
        let speech = GameEvent::Speech {
            speaker: p1.clone(),
            emoji: "🎭".to_string(),
            display_name: "в маске".to_string(),
            text: "Привет".to_string(),
        };
        assert!(speech.involves(&p1));
        assert!(!speech.involves(&ParticipantId::new("p2")));
        assert!(!observer(0).involves(&p1));
    }
}
