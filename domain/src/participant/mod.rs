//! Participants and their personas
//!
//! A participant is one seat in the room, backed by one agent session in
//! the application layer. The persona is fixed at creation; everything else
//! (introduction, learned names, votes) evolves during the game.

pub mod entities;
pub mod persona;

pub use entities::{Participant, ParticipantId};
pub use persona::Persona;
