//! Application layer for the-room
//!
//! This crate contains the room orchestrator, its ports, and session
//! ownership. It depends only on the domain layer.

pub mod config;
pub mod error;
pub mod ports;
pub mod session;
pub mod use_cases;

// Re-export commonly used types
pub use config::RoomConfig;
pub use error::GameError;
pub use ports::{
    agent_gateway::{AgentGateway, AgentIdentity, AgentSession, GatewayError},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    progress::{AgentCall, GameProgress, NoProgress},
};
pub use session::SessionSlot;
pub use use_cases::orchestrator::{
    ActionOutcome, BroadcastReport, GameSnapshot, ParticipantHistory, ParticipantView,
    RoomOrchestrator, SNAPSHOT_EVENT_WINDOW, TurnStatus, VoteOutcome,
};
