//! Game phases and the turn → phase threshold table

use serde::{Deserialize, Serialize};

/// Phase of the game
///
/// Variants are declared in game order, so `Ord` follows progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    /// Turn 0: everyone just woke up
    #[default]
    Awakening,
    Introduction,
    Discussion,
    Persuasion,
    /// Entered when the first vote is cast
    Voting,
    /// Entered when the outcome is computed
    Resolved,
}

impl GamePhase {
    /// Phase dictated by the turn counter alone
    ///
    /// ```
    /// use room_domain::GamePhase;
    ///
    /// assert_eq!(GamePhase::for_turn(0), GamePhase::Awakening);
    /// assert_eq!(GamePhase::for_turn(2), GamePhase::Introduction);
    /// assert_eq!(GamePhase::for_turn(4), GamePhase::Discussion);
    /// assert_eq!(GamePhase::for_turn(9), GamePhase::Persuasion);
    /// ```
    pub fn for_turn(turn: u32) -> Self {
        match turn {
            0 => GamePhase::Awakening,
            1..=2 => GamePhase::Introduction,
            3..=4 => GamePhase::Discussion,
            _ => GamePhase::Persuasion,
        }
    }

    /// Phase after a turn advance; never moves backwards
    pub fn after_turn(self, turn: u32) -> Self {
        self.max(Self::for_turn(turn))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Awakening => "awakening",
            GamePhase::Introduction => "introduction",
            GamePhase::Discussion => "discussion",
            GamePhase::Persuasion => "persuasion",
            GamePhase::Voting => "voting",
            GamePhase::Resolved => "resolved",
        }
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_table() {
        let expected = [
            (0, GamePhase::Awakening),
            (1, GamePhase::Introduction),
            (2, GamePhase::Introduction),
            (3, GamePhase::Discussion),
            (4, GamePhase::Discussion),
            (5, GamePhase::Persuasion),
            (6, GamePhase::Persuasion),
            (100, GamePhase::Persuasion),
        ];
        for (turn, phase) in expected {
            assert_eq!(GamePhase::for_turn(turn), phase, "turn {}", turn);
        }
    }

    #[test]
    fn test_for_turn_is_monotone() {
        for turn in 0..50 {
            assert!(GamePhase::for_turn(turn) <= GamePhase::for_turn(turn + 1));
        }
    }

    #[test]
    fn test_after_turn_never_regresses() {
        assert_eq!(GamePhase::Voting.after_turn(7), GamePhase::Voting);
        assert_eq!(GamePhase::Resolved.after_turn(1), GamePhase::Resolved);
        assert_eq!(GamePhase::Awakening.after_turn(3), GamePhase::Discussion);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&GamePhase::Persuasion).unwrap();
        assert_eq!(json, "\"persuasion\"");
    }
}
