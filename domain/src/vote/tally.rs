//! Vote tally and the unanimity rule
//!
//! The only way to win is unanimity: one candidate holding as many votes as
//! there are participants. Any other distribution means everyone loses.

use crate::participant::{Participant, ParticipantId};
use serde::{Deserialize, Serialize};

/// Final result of a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum GameOutcome {
    Winner {
        participant: ParticipantId,
        real_name: String,
        votes: u32,
    },
    /// No unanimity: everyone loses
    NoWinner,
}

impl GameOutcome {
    pub fn winner(&self) -> Option<&ParticipantId> {
        match self {
            GameOutcome::Winner { participant, .. } => Some(participant),
            GameOutcome::NoWinner => None,
        }
    }
}

/// Vote counts per candidate, in registry order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    pub counts: Vec<(ParticipantId, u32)>,
    pub total_participants: usize,
}

impl VoteTally {
    pub fn new(counts: Vec<(ParticipantId, u32)>, total_participants: usize) -> Self {
        Self {
            counts,
            total_participants,
        }
    }

    pub fn from_participants(participants: &[Participant]) -> Self {
        Self::new(
            participants.iter().map(|p| (p.id.clone(), p.votes)).collect(),
            participants.len(),
        )
    }

    /// The unique candidate whose count equals the number of participants
    ///
    /// ```
    /// use room_domain::{ParticipantId, VoteTally};
    ///
    /// let tally = VoteTally::new(vec![("p1".into(), 5), ("p2".into(), 0)], 5);
    /// assert_eq!(tally.unanimous_winner(), Some(&ParticipantId::new("p1")));
    ///
    /// let split = VoteTally::new(vec![("p1".into(), 3), ("p2".into(), 2)], 5);
    /// assert_eq!(split.unanimous_winner(), None);
    /// ```
    pub fn unanimous_winner(&self) -> Option<&ParticipantId> {
        if self.total_participants == 0 {
            return None;
        }
        let required = self.total_participants as u32;
        let mut winners = self.counts.iter().filter(|(_, n)| *n == required);
        match (winners.next(), winners.next()) {
            (Some((id, _)), None) => Some(id),
            _ => None,
        }
    }

    /// Compact summary such as `p1:5 p2:0`
    pub fn summary(&self) -> String {
        self.counts
            .iter()
            .map(|(id, n)| format!("{}:{}", id, n))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(counts: &[(&str, u32)], total: usize) -> VoteTally {
        VoteTally::new(
            counts.iter().map(|(id, n)| (ParticipantId::new(*id), *n)).collect(),
            total,
        )
    }

    #[test]
    fn test_unanimous_winner() {
        let t = tally(&[("p1", 5), ("p2", 0), ("p3", 0), ("p4", 0), ("p5", 0)], 5);
        assert_eq!(t.unanimous_winner().map(|p| p.as_str()), Some("p1"));
    }

    #[test]
    fn test_split_vote_has_no_winner() {
        let t = tally(&[("p1", 3), ("p2", 2), ("p3", 0), ("p4", 0), ("p5", 0)], 5);
        assert_eq!(t.unanimous_winner(), None);
    }

    #[test]
    fn test_everyone_voting_for_themself_has_no_winner() {
        let t = tally(&[("p1", 1), ("p2", 1), ("p3", 1)], 3);
        assert_eq!(t.unanimous_winner(), None);
    }

    #[test]
    fn test_incomplete_voting_has_no_winner() {
        let t = tally(&[("p1", 4), ("p2", 0)], 5);
        assert_eq!(t.unanimous_winner(), None);
    }

    #[test]
    fn test_empty_tally_has_no_winner() {
        assert_eq!(tally(&[], 0).unanimous_winner(), None);
    }

    #[test]
    fn test_summary() {
        let t = tally(&[("p1", 2), ("p2", 1)], 3);
        assert_eq!(t.summary(), "p1:2 p2:1");
    }

    #[test]
    fn test_outcome_serializes_with_tag() {
        let json = serde_json::to_value(GameOutcome::NoWinner).unwrap();
        assert_eq!(json["result"], "no_winner");
    }
}
