//! Errors surfaced by orchestrator operations

use crate::ports::agent_gateway::GatewayError;
use room_domain::{DomainError, ParticipantId};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Agent for {participant} failed: {source}")]
    Agent {
        participant: ParticipantId,
        #[source]
        source: GatewayError,
    },

    #[error("Game has been shut down")]
    SessionClosed,
}

impl GameError {
    /// Wrap a gateway failure, folding closed sessions into [`GameError::SessionClosed`]
    pub fn agent(participant: &ParticipantId, source: GatewayError) -> Self {
        match source {
            GatewayError::SessionClosed => GameError::SessionClosed,
            source => GameError::Agent {
                participant: participant.clone(),
                source,
            },
        }
    }

    /// Whether the error names a participant that does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, GameError::Domain(e) if e.is_not_found())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_session_folds_into_session_closed() {
        let id = ParticipantId::new("p1");
        assert_eq!(
            GameError::agent(&id, GatewayError::SessionClosed),
            GameError::SessionClosed
        );
        assert!(matches!(
            GameError::agent(&id, GatewayError::Timeout),
            GameError::Agent { .. }
        ));
    }

    #[test]
    fn test_is_not_found() {
        let err: GameError = DomainError::UnknownParticipant("p9".into()).into();
        assert!(err.is_not_found());
        assert!(!GameError::SessionClosed.is_not_found());
    }

    #[test]
    fn test_agent_error_message_names_participant() {
        let err = GameError::agent(&ParticipantId::new("p2"), GatewayError::Timeout);
        assert!(err.to_string().contains("p2"));
    }
}
