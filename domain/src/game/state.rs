//! Game state aggregate
//!
//! Owns the participant registry, the turn counter, the phase and the event
//! log. All mutations go through methods here so the invariants (monotone
//! phase, one-way introductions, one vote per participant) hold no matter
//! who drives the game.

use super::event_log::{EventLog, GameEvent};
use super::phase::GamePhase;
use crate::core::error::DomainError;
use crate::core::language::Language;
use crate::participant::{Participant, ParticipantId, Persona};
use crate::reply::IntroductionDetector;
use crate::vote::{GameOutcome, VoteChoice, VoteTally};

/// Smallest roster that makes a game
pub const MIN_PARTICIPANTS: usize = 2;

#[derive(Debug, Clone)]
pub struct GameState {
    turn: u32,
    phase: GamePhase,
    language: Language,
    participants: Vec<Participant>,
    event_log: EventLog,
    outcome: Option<GameOutcome>,
    detector: IntroductionDetector,
}

impl GameState {
    /// Seat every persona of the roster, in order, as `p1`, `p2`, ...
    pub fn new(roster: Vec<Persona>, language: Language) -> Result<Self, DomainError> {
        if roster.len() < MIN_PARTICIPANTS {
            return Err(DomainError::RosterTooSmall {
                required: MIN_PARTICIPANTS,
                actual: roster.len(),
            });
        }

        let participants: Vec<Participant> = roster
            .into_iter()
            .enumerate()
            .map(|(i, persona)| Participant::new(ParticipantId::for_seat(i), persona))
            .collect();
        let detector =
            IntroductionDetector::new(language, participants.iter().map(|p| p.real_name()));

        Ok(Self {
            turn: 0,
            phase: GamePhase::Awakening,
            language,
            participants,
            event_log: EventLog::new(),
            outcome: None,
            detector,
        })
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    /// Participants in registry order
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn participant(&self, id: &ParticipantId) -> Result<&Participant, DomainError> {
        self.participants
            .iter()
            .find(|p| &p.id == id)
            .ok_or_else(|| DomainError::UnknownParticipant(id.to_string()))
    }

    fn participant_mut(&mut self, id: &ParticipantId) -> Result<&mut Participant, DomainError> {
        self.participants
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| DomainError::UnknownParticipant(id.to_string()))
    }

    /// Everyone except `id`, in registry order
    pub fn others<'a>(&'a self, id: &'a ParticipantId) -> impl Iterator<Item = &'a Participant> {
        self.participants.iter().filter(move |p| &p.id != id)
    }

    /// Increment the turn and recompute the phase from the threshold table
    pub fn advance_turn(&mut self) -> GamePhase {
        self.turn += 1;
        self.phase = self.phase.after_turn(self.turn);
        self.phase
    }

    /// Check a public utterance for self-identification.
    ///
    /// Returns `true` only when this call revealed the speaker: every other
    /// participant learns the real name and an identity-reveal event is
    /// logged. Once a participant is introduced this is a no-op.
    pub fn check_introduction(
        &mut self,
        id: &ParticipantId,
        speech: &str,
    ) -> Result<bool, DomainError> {
        let already = self.participant(id)?.introduced;
        if already || !self.detector.is_introduction(speech) {
            return Ok(false);
        }

        let speaker = self.participant_mut(id)?;
        speaker.introduced = true;
        let real_name = speaker.persona.real_name.clone();
        let emoji = speaker.persona.emoji.clone();

        for other in self.participants.iter_mut().filter(|p| &p.id != id) {
            other.learn_identity(id, &real_name);
        }

        self.event_log.push(GameEvent::IdentityRevealed {
            participant: id.clone(),
            emoji,
            real_name,
        });
        Ok(true)
    }

    /// Log a public utterance under the speaker's current display identity
    pub fn record_speech(&mut self, id: &ParticipantId, text: &str) -> Result<GameEvent, DomainError> {
        let speaker = self.participant(id)?;
        let event = GameEvent::Speech {
            speaker: id.clone(),
            emoji: speaker.persona.emoji.clone(),
            display_name: speaker.display_name().to_string(),
            text: text.to_string(),
        };
        self.event_log.push(event.clone());
        Ok(event)
    }

    /// Log a message from the external observer
    pub fn record_observer(&mut self, text: &str) -> Result<GameEvent, DomainError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DomainError::EmptyMessage);
        }
        let event = GameEvent::Observer {
            text: text.to_string(),
        };
        self.event_log.push(event.clone());
        Ok(event)
    }

    /// Fail unless `id` may still cast a vote in an unresolved game
    pub fn ensure_can_vote(&self, id: &ParticipantId) -> Result<(), DomainError> {
        let voter = self.participant(id)?;
        if self.phase == GamePhase::Resolved {
            return Err(DomainError::GameResolved);
        }
        if voter.has_voted() {
            return Err(DomainError::AlreadyVoted(id.to_string()));
        }
        Ok(())
    }

    /// Apply a resolved vote: the candidate gains a vote, the voter records
    /// whom they voted for, and the game enters the voting phase.
    pub fn record_vote(&mut self, choice: &VoteChoice) -> Result<(), DomainError> {
        self.ensure_can_vote(&choice.voter)?;
        self.participant(&choice.candidate)?;

        self.participant_mut(&choice.candidate)?.votes += 1;
        self.participant_mut(&choice.voter)?.voted_for = Some(choice.candidate.clone());
        self.phase = self.phase.max(GamePhase::Voting);
        Ok(())
    }

    pub fn tally(&self) -> VoteTally {
        VoteTally::from_participants(&self.participants)
    }

    /// Compute the outcome and enter the resolved phase.
    ///
    /// Resolving again returns the outcome computed the first time.
    pub fn resolve(&mut self) -> GameOutcome {
        if let Some(outcome) = &self.outcome {
            return outcome.clone();
        }

        let outcome = match self.tally().unanimous_winner() {
            Some(id) => {
                let winner = self
                    .participants
                    .iter()
                    .find(|p| &p.id == id)
                    .map(|p| (p.persona.real_name.clone(), p.votes));
                match winner {
                    Some((real_name, votes)) => GameOutcome::Winner {
                        participant: id.clone(),
                        real_name,
                        votes,
                    },
                    None => GameOutcome::NoWinner,
                }
            }
            None => GameOutcome::NoWinner,
        };

        self.phase = GamePhase::Resolved;
        self.outcome = Some(outcome.clone());
        outcome
    }

    /// Events produced by one participant, oldest first
    pub fn history_of(&self, id: &ParticipantId) -> Vec<&GameEvent> {
        self.event_log.iter().filter(|e| e.involves(id)).collect()
    }
}
