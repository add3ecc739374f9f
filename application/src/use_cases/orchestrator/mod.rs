//! Room orchestrator use case
//!
//! Single owner of the game state and of every participant's agent session.
//! Front-ends drive the game through the operations here and only ever see
//! detached snapshots.
//!
//! Locking is layered and always taken in the same order:
//!
//! 1. the broadcast lock, held for a whole fan-out so every listener hears
//!    speeches in the same order they were logged;
//! 2. the game state lock, never held across an agent call;
//! 3. a participant's [`SessionSlot`], held for one agent round trip.

mod fanout;
mod types;

pub use types::{
    ActionOutcome, BroadcastReport, GameSnapshot, ParticipantHistory, ParticipantView,
    SNAPSHOT_EVENT_WINDOW, TurnStatus, VoteOutcome,
};

use crate::config::RoomConfig;
use crate::error::GameError;
use crate::ports::agent_gateway::{AgentGateway, AgentIdentity};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::progress::{AgentCall, GameProgress, NoProgress};
use crate::session::SessionSlot;
use fanout::{Recipient, fan_out};
use room_domain::{
    DomainError, GameOutcome, GameState, Language, Participant, ParticipantId, PromptTemplate,
    parse_reply, resolve_vote,
};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Runs one game of The Room against an [`AgentGateway`]
pub struct RoomOrchestrator<G: AgentGateway + 'static> {
    gateway: Arc<G>,
    config: RoomConfig,
    state: Mutex<GameState>,
    slots: Vec<SessionSlot>,
    broadcast_lock: Mutex<()>,
    progress: Arc<dyn GameProgress>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl<G: AgentGateway + 'static> RoomOrchestrator<G> {
    /// Seat the configured roster. No agent session is opened yet.
    pub fn new(gateway: Arc<G>, config: RoomConfig) -> Result<Self, GameError> {
        let state = GameState::new(config.roster.clone(), config.language)?;
        let slots = state
            .participants()
            .iter()
            .map(|p| SessionSlot::new(p.id.clone()))
            .collect();

        Ok(Self {
            gateway,
            config,
            state: Mutex::new(state),
            slots,
            broadcast_lock: Mutex::new(()),
            progress: Arc::new(NoProgress),
            conversation_logger: Arc::new(NoConversationLogger),
        })
    }

    pub fn with_progress(mut self, progress: Arc<dyn GameProgress>) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn config(&self) -> &RoomConfig {
        &self.config
    }

    // ==================== Operations ====================

    /// Start a fresh game, closing any sessions left from a previous one
    pub async fn initialize(&self) -> Result<Vec<ParticipantView>, GameError> {
        for slot in &self.slots {
            slot.reset().await;
        }

        let fresh = GameState::new(self.config.roster.clone(), self.config.language)?;
        let mut state = self.state.lock().await;
        *state = fresh;

        info!(
            participants = state.participants().len(),
            language = %state.language(),
            "Game initialized"
        );
        Ok(state
            .participants()
            .iter()
            .map(|p| ParticipantView::new(p, false))
            .collect())
    }

    /// Ask one participant what they do next.
    ///
    /// Speech is checked for self-introduction, logged, and delivered to every
    /// other participant with an open session. Delivery failures are reported
    /// in the outcome but never fail the action.
    pub async fn act(&self, id: &ParticipantId) -> Result<ActionOutcome, GameError> {
        let slot = self.slot(id)?;
        let (identity, label, prompt) = {
            let state = self.state.lock().await;
            let participant = state.participant(id)?;
            (
                Self::identity(&state, participant),
                Self::label(participant),
                PromptTemplate::context(&state, participant),
            )
        };

        info!(participant = %id, "Participant acting");
        self.ensure_connected(slot, &identity).await?;
        let reply = self.ask(slot, &label, &prompt, AgentCall::Action).await?;
        let parsed = parse_reply(&reply);

        let _broadcast = self.broadcast_lock.lock().await;
        let mut state = self.state.lock().await;
        let language = state.language();

        let newly_introduced = state.check_introduction(id, &parsed.speech)?;
        let speaker = state.participant(id)?.clone();
        if newly_introduced {
            info!(participant = %id, name = %speaker.real_name(), "Participant introduced themself");
            self.conversation_logger.log(ConversationEvent::new(
                "identity_revealed",
                json!({
                    "participant": id,
                    "real_name": speaker.real_name(),
                    "turn": state.turn(),
                }),
            ));
        }

        let delivery = if parsed.has_speech() {
            state.record_speech(id, &parsed.speech)?;
            self.conversation_logger.log(ConversationEvent::new(
                "speech",
                json!({
                    "participant": id,
                    "display_name": speaker.display_name(),
                    "target": parsed.target.to_string(),
                    "text": parsed.speech,
                    "turn": state.turn(),
                }),
            ));
            let message = PromptTemplate::hearing(
                language,
                &speaker.persona.emoji,
                speaker.display_name(),
                &parsed.speech,
            );
            Some((message, self.recipients(&state, Some(id))))
        } else {
            debug!(participant = %id, "No public speech this action");
            None
        };
        drop(state);

        let broadcast = match delivery {
            Some((message, recipients)) => {
                let report =
                    fan_out(&recipients, &message, self.config.agent_timeout, &*self.progress)
                        .await;
                self.log_broadcast(id.as_str(), &report);
                Some(report)
            }
            None => None,
        };

        Ok(ActionOutcome {
            participant: id.clone(),
            emoji: speaker.persona.emoji.clone(),
            display_name: speaker.display_name().to_string(),
            color: speaker.persona.color.clone(),
            introduced: speaker.introduced,
            newly_introduced,
            thought: parsed.thought,
            speech: parsed.speech,
            target: parsed.target,
            broadcast,
        })
    }

    /// Move to the next turn
    pub async fn advance_turn(&self) -> TurnStatus {
        let mut state = self.state.lock().await;
        let phase = state.advance_turn();
        let status = TurnStatus {
            turn: state.turn(),
            phase,
        };

        info!(turn = status.turn, phase = %status.phase, "Turn advanced");
        self.conversation_logger.log(ConversationEvent::new(
            "turn",
            json!({ "turn": status.turn, "phase": status.phase }),
        ));
        status
    }

    /// Ask one participant for their vote.
    ///
    /// Each participant votes once per game; the first vote cast moves the
    /// game into the voting phase.
    pub async fn cast_vote(&self, id: &ParticipantId) -> Result<VoteOutcome, GameError> {
        let slot = self.slot(id)?;
        let (identity, label, prompt) = {
            let state = self.state.lock().await;
            state.ensure_can_vote(id)?;
            let voter = state.participant(id)?;
            (
                Self::identity(&state, voter),
                Self::label(voter),
                PromptTemplate::vote_prompt(&state, voter),
            )
        };

        info!(participant = %id, "Participant voting");
        self.ensure_connected(slot, &identity).await?;
        let reply = self.ask(slot, &label, &prompt, AgentCall::Vote).await?;

        let mut state = self.state.lock().await;
        let choice = {
            let voter = state.participant(id)?;
            resolve_vote(&reply, voter, state.participants())
        };
        state.record_vote(&choice)?;

        let candidate_label = if choice.is_self_vote() {
            self_label(state.language()).to_string()
        } else {
            let voter = state.participant(id)?;
            let candidate = state.participant(&choice.candidate)?;
            voter.name_for(candidate).to_string()
        };
        let tally = state.tally();

        info!(
            participant = %id,
            candidate = %choice.candidate,
            matched = ?choice.matched,
            "Vote recorded"
        );
        self.conversation_logger.log(ConversationEvent::new(
            "vote",
            json!({
                "voter": id,
                "candidate": choice.candidate,
                "matched": choice.matched,
                "reply": reply,
                "tally": tally.summary(),
            }),
        ));

        Ok(VoteOutcome {
            voter: choice.voter,
            candidate: choice.candidate,
            candidate_label,
            matched: choice.matched,
            reply,
            tally,
        })
    }

    /// Resolve the game. Resolving again returns the same outcome.
    pub async fn resolve(&self) -> GameOutcome {
        let mut state = self.state.lock().await;
        let first = state.outcome().is_none();
        let outcome = state.resolve();

        if first {
            match outcome.winner() {
                Some(winner) => info!(winner = %winner, "Game resolved with a winner"),
                None => info!("Game resolved without a winner"),
            }
            self.conversation_logger.log(ConversationEvent::new(
                "outcome",
                json!({ "outcome": outcome, "tally": state.tally().summary() }),
            ));
        }
        outcome
    }

    /// Detached view of the whole game
    pub async fn snapshot(&self) -> GameSnapshot {
        let state = self.state.lock().await;
        GameSnapshot {
            turn: state.turn(),
            phase: state.phase(),
            language: state.language(),
            participants: state
                .participants()
                .iter()
                .map(|p| ParticipantView::new(p, self.is_connected(&p.id)))
                .collect(),
            recent_events: state
                .event_log()
                .recent(SNAPSHOT_EVENT_WINDOW)
                .cloned()
                .collect(),
            outcome: state.outcome().cloned(),
        }
    }

    /// Everything known about one participant, including their secret goal
    pub async fn participant_history(
        &self,
        id: &ParticipantId,
    ) -> Result<ParticipantHistory, GameError> {
        let state = self.state.lock().await;
        let participant = state.participant(id)?;
        Ok(ParticipantHistory {
            participant: id.clone(),
            real_name: participant.persona.real_name.clone(),
            emoji: participant.persona.emoji.clone(),
            appearance: participant.persona.appearance.clone(),
            personality: participant.persona.personality.clone(),
            secret_goal: participant.persona.secret_goal.clone(),
            introduced: participant.introduced,
            votes: participant.votes,
            voted_for: participant.voted_for.clone(),
            knows: participant.known_identities.clone(),
            history: state.history_of(id).into_iter().cloned().collect(),
        })
    }

    /// Relay a message from the outside observer to every open session
    pub async fn observer_message(&self, text: &str) -> Result<BroadcastReport, GameError> {
        let text = text.trim();
        let _broadcast = self.broadcast_lock.lock().await;
        let (message, recipients) = {
            let mut state = self.state.lock().await;
            state.record_observer(text)?;
            (
                PromptTemplate::observer_message(state.language(), text),
                self.recipients(&state, None),
            )
        };

        info!(recipients = recipients.len(), "Observer message");
        self.conversation_logger.log(ConversationEvent::new(
            "observer_message",
            json!({ "text": text }),
        ));

        let report = fan_out(&recipients, &message, self.config.agent_timeout, &*self.progress).await;
        self.log_broadcast("observer", &report);
        Ok(report)
    }

    /// Close every session. Later agent operations fail with
    /// [`GameError::SessionClosed`] until the game is initialized again.
    pub async fn shutdown(&self) -> usize {
        let mut closed = 0;
        for slot in &self.slots {
            if slot.disconnect().await {
                closed += 1;
            }
        }
        info!(closed, "Room shut down");
        closed
    }

    // ==================== Helpers ====================

    fn slot(&self, id: &ParticipantId) -> Result<&SessionSlot, GameError> {
        self.slots
            .iter()
            .find(|s| s.participant() == id)
            .ok_or_else(|| DomainError::UnknownParticipant(id.to_string()).into())
    }

    fn is_connected(&self, id: &ParticipantId) -> bool {
        self.slot(id).map(|s| s.is_active()).unwrap_or(false)
    }

    /// Open sessions in registry order, optionally skipping one participant
    fn recipients(&self, state: &GameState, exclude: Option<&ParticipantId>) -> Vec<Recipient<'_>> {
        state
            .participants()
            .iter()
            .filter(|p| Some(&p.id) != exclude)
            .filter_map(|p| {
                let slot = self.slot(&p.id).ok()?;
                slot.is_active().then(|| Recipient {
                    slot,
                    label: Self::label(p),
                })
            })
            .collect()
    }

    fn identity(state: &GameState, participant: &Participant) -> AgentIdentity {
        AgentIdentity {
            participant: participant.id.clone(),
            label: format!("{} {}", participant.persona.emoji, participant.real_name()),
            system_prompt: PromptTemplate::system_prompt(
                &participant.persona,
                state.language(),
                state.participants().len(),
            ),
        }
    }

    fn label(participant: &Participant) -> String {
        format!("{} {}", participant.persona.emoji, participant.display_name())
    }

    async fn ensure_connected(
        &self,
        slot: &SessionSlot,
        identity: &AgentIdentity,
    ) -> Result<(), GameError> {
        if slot.is_active() {
            return Ok(());
        }

        let id = slot.participant();
        self.progress
            .on_agent_start(id, &identity.label, AgentCall::Connect);
        let result = slot.connect(&*self.gateway, identity).await;
        self.progress
            .on_agent_complete(id, AgentCall::Connect, result.is_ok());
        result.map(|_| ()).map_err(|e| GameError::agent(id, e))
    }

    async fn ask(
        &self,
        slot: &SessionSlot,
        label: &str,
        prompt: &str,
        call: AgentCall,
    ) -> Result<String, GameError> {
        let id = slot.participant();
        debug!(participant = %id, call = call.as_str(), "Prompt:\n{}", prompt);
        self.conversation_logger.log(ConversationEvent::new(
            "agent_prompt",
            json!({ "participant": id, "call": call.as_str(), "text": prompt }),
        ));

        self.progress.on_agent_start(id, label, call);
        let result = slot.query(prompt, self.config.agent_timeout).await;
        self.progress.on_agent_complete(id, call, result.is_ok());

        let reply = result.map_err(|e| GameError::agent(id, e))?;
        debug!(participant = %id, call = call.as_str(), "Reply:\n{}", reply);
        self.conversation_logger.log(ConversationEvent::new(
            "agent_reply",
            json!({ "participant": id, "call": call.as_str(), "text": reply }),
        ));
        Ok(reply)
    }

    fn log_broadcast(&self, source: &str, report: &BroadcastReport) {
        if !report.failed.is_empty() {
            info!(
                source,
                delivered = report.delivered.len(),
                failed = report.failed.len(),
                "Broadcast partially delivered"
            );
        }
        self.conversation_logger.log(ConversationEvent::new(
            "broadcast",
            json!({
                "source": source,
                "delivered": report.delivered,
                "failed": report.failed,
            }),
        ));
    }
}

/// How a self-vote is shown
fn self_label(language: Language) -> &'static str {
    match language {
        Language::Russian => "себя",
        Language::English => "myself",
    }
}
