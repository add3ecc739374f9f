//! Game setup parameters.
//!
//! [`RoomConfig`] is what the orchestrator needs to seat a game. The
//! infrastructure layer builds it from file configuration and CLI flags.

use room_domain::{Language, Persona};
use std::time::Duration;

/// Turns in an automatic game when nothing else is configured
pub const DEFAULT_TURNS: u32 = 6;

#[derive(Debug, Clone)]
pub struct RoomConfig {
    /// Language of prompts, markers and event rendering
    pub language: Language,
    /// Personas seated in order as `p1`, `p2`, ...
    pub roster: Vec<Persona>,
    /// Discussion turns played before voting in an automatic game
    pub turns: u32,
    /// Upper bound on a single agent round trip
    pub agent_timeout: Option<Duration>,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self::for_language(Language::default())
    }
}

impl RoomConfig {
    /// Default roster and settings for `language`
    pub fn for_language(language: Language) -> Self {
        Self {
            language,
            roster: Persona::default_roster(language),
            turns: DEFAULT_TURNS,
            agent_timeout: None,
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_roster(mut self, roster: Vec<Persona>) -> Self {
        self.roster = roster;
        self
    }

    pub fn with_turns(mut self, turns: u32) -> Self {
        self.turns = turns;
        self
    }

    pub fn with_agent_timeout(mut self, timeout: Duration) -> Self {
        self.agent_timeout = Some(timeout);
        self
    }

    pub fn with_timeout_seconds(mut self, seconds: Option<u64>) -> Self {
        self.agent_timeout = seconds.map(Duration::from_secs);
        self
    }
}
