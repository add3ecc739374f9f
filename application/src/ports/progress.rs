//! Progress notification port
//!
//! Reports when the orchestrator is waiting on an agent, so a front-end can
//! show a spinner while a participant "thinks".

use room_domain::ParticipantId;

/// Why an agent is being queried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentCall {
    Connect,
    Action,
    Delivery,
    Vote,
}

impl AgentCall {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentCall::Connect => "connect",
            AgentCall::Action => "action",
            AgentCall::Delivery => "delivery",
            AgentCall::Vote => "vote",
        }
    }
}

/// Callback for progress updates during orchestration
///
/// Implementations live in the presentation layer.
pub trait GameProgress: Send + Sync {
    /// Called before a query is sent to a participant's agent
    fn on_agent_start(&self, participant: &ParticipantId, label: &str, call: AgentCall);

    /// Called when the query returns (successfully or not)
    fn on_agent_complete(&self, participant: &ParticipantId, call: AgentCall, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl GameProgress for NoProgress {
    fn on_agent_start(&self, _participant: &ParticipantId, _label: &str, _call: AgentCall) {}
    fn on_agent_complete(&self, _participant: &ParticipantId, _call: AgentCall, _success: bool) {}
}
