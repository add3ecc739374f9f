//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// These are caller errors: they are reported before any game state is
/// touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Participant not found: {0}")]
    UnknownParticipant(String),

    #[error("Participant {0} has already voted")]
    AlreadyVoted(String),

    #[error("The game is already resolved; no more votes are accepted")]
    GameResolved,

    #[error("Observer message is empty")]
    EmptyMessage,

    #[error("Roster needs at least {required} participants, got {actual}")]
    RosterTooSmall { required: usize, actual: usize },

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),
}

impl DomainError {
    /// Check if this error means the requested participant does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::UnknownParticipant(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_participant_display() {
        let error = DomainError::UnknownParticipant("p9".to_string());
        assert_eq!(error.to_string(), "Participant not found: p9");
    }

    #[test]
    fn test_is_not_found_check() {
        assert!(DomainError::UnknownParticipant("p9".to_string()).is_not_found());
        assert!(!DomainError::AlreadyVoted("p1".to_string()).is_not_found());
        assert!(!DomainError::EmptyMessage.is_not_found());
        assert!(!DomainError::GameResolved.is_not_found());
    }
}
