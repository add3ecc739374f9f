//! Game drivers shared by the automatic and interactive front-ends

mod auto;

pub use auto::AutoGame;

use room_application::{
    ActionOutcome, AgentGateway, GameError, RoomOrchestrator, VoteOutcome,
};
use room_domain::ParticipantId;

/// Seat ids in registry order
pub async fn seat_ids<G: AgentGateway + 'static>(
    orchestrator: &RoomOrchestrator<G>,
) -> Vec<ParticipantId> {
    orchestrator
        .snapshot()
        .await
        .participants
        .into_iter()
        .map(|p| p.id)
        .collect()
}

/// Let every participant act once, in registry order
///
/// Stops early only when the room has been shut down.
pub async fn play_round<G: AgentGateway + 'static>(
    orchestrator: &RoomOrchestrator<G>,
) -> Vec<(ParticipantId, Result<ActionOutcome, GameError>)> {
    let mut results = Vec::new();
    for id in seat_ids(orchestrator).await {
        let result = orchestrator.act(&id).await;
        let closed = matches!(result, Err(GameError::SessionClosed));
        results.push((id, result));
        if closed {
            break;
        }
    }
    results
}

/// Ask every participant who has not voted yet for their vote
pub async fn collect_votes<G: AgentGateway + 'static>(
    orchestrator: &RoomOrchestrator<G>,
) -> Vec<(ParticipantId, Result<VoteOutcome, GameError>)> {
    let snapshot = orchestrator.snapshot().await;
    let mut results = Vec::new();
    for p in snapshot.participants.iter().filter(|p| p.voted_for.is_none()) {
        let result = orchestrator.cast_vote(&p.id).await;
        let closed = matches!(result, Err(GameError::SessionClosed));
        results.push((p.id.clone(), result));
        if closed {
            break;
        }
    }
    results
}
