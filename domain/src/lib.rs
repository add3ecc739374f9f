//! Domain layer for the-room
//!
//! This crate contains the core game logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns, and
//! no I/O: agent sessions, locking and fan-out live in the application layer.
//!
//! # Core Concepts
//!
//! ## Participants
//!
//! Each seat holds a fixed [`Persona`]. Others see the appearance until the
//! participant introduces themself; from then on everybody knows the real
//! name.
//!
//! ## Game State
//!
//! [`GameState`] owns the registry, turn counter, [`GamePhase`] and the
//! bounded [`EventLog`]. Phase follows the turn threshold table and never
//! regresses.
//!
//! ## Replies and Votes
//!
//! Agent replies are scanned line by line ([`parse_reply`]); vote replies are
//! matched against the registry ([`resolve_vote`]). Only a unanimous vote
//! produces a winner ([`VoteTally::unanimous_winner`]).

pub mod config;
pub mod core;
pub mod game;
pub mod participant;
pub mod prompt;
pub mod reply;
pub mod vote;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{error::DomainError, language::Language};
pub use game::{EVENT_LOG_CAPACITY, EventLog, GameEvent, GamePhase, GameState, MIN_PARTICIPANTS};
pub use participant::{Participant, ParticipantId, Persona};
pub use prompt::{CONTEXT_EVENT_WINDOW, PromptTemplate};
pub use reply::{Addressee, IntroductionDetector, ParsedReply, parse_reply};
pub use vote::{GameOutcome, VoteChoice, VoteMatch, VoteTally, resolve_vote};
