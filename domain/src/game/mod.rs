//! Game state machine
//!
//! - [`phase::GamePhase`]: phases and the turn threshold table
//! - [`event_log::EventLog`]: bounded FIFO of public events
//! - [`state::GameState`]: the aggregate that owns everything above

pub mod event_log;
pub mod phase;
pub mod state;

pub use event_log::{EVENT_LOG_CAPACITY, EventLog, GameEvent};
pub use phase::GamePhase;
pub use state::{GameState, MIN_PARTICIPANTS};
