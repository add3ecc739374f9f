//! Agent Gateway port
//!
//! Defines the interface to the external conversational-agent service. Each
//! session keeps its own hidden conversation history, so a session is a
//! stateful resource, not a function: it belongs to exactly one participant
//! and must never see two prompts at once.

use async_trait::async_trait;
use room_domain::ParticipantId;
use thiserror::Error;

/// Errors that can occur during agent gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Timeout")]
    Timeout,

    #[error("Session not connected")]
    NotConnected,

    #[error("Session closed")]
    SessionClosed,

    #[error("Other error: {0}")]
    Other(String),
}

/// Everything the agent service needs to create one participant's session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentIdentity {
    pub participant: ParticipantId,
    /// Short human label for logs, e.g. `🦊 Ника`
    pub label: String,
    /// Persona-level system prompt, fixed for the session's lifetime
    pub system_prompt: String,
}

/// Gateway for creating agent sessions
///
/// This port defines how the application layer reaches the agent service.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait AgentGateway: Send + Sync {
    /// Open a new session for one participant
    async fn connect(&self, identity: &AgentIdentity) -> Result<Box<dyn AgentSession>, GatewayError>;
}

/// An open agent session
///
/// Callers guarantee that `send` is never invoked concurrently on the same
/// session; see [`SessionSlot`](crate::session::SessionSlot).
#[async_trait]
pub trait AgentSession: Send + Sync {
    /// Send a prompt and wait for the complete generated reply
    async fn send(&self, prompt: &str) -> Result<String, GatewayError>;

    /// Release the session; the default does nothing
    async fn close(&self) -> Result<(), GatewayError> {
        Ok(())
    }
}
