//! Per-participant agent session slot
//!
//! A [`SessionSlot`] is the only way to reach a participant's agent. Every
//! operation takes the slot's async mutex, so a direct action, an incoming
//! broadcast delivery and a vote prompt can never overlap on the same
//! session. Once disconnected the slot stays closed and later calls fail
//! fast with [`GatewayError::SessionClosed`].

use crate::ports::agent_gateway::{AgentGateway, AgentIdentity, AgentSession, GatewayError};
use room_domain::ParticipantId;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

enum SlotState {
    Idle,
    Connected(Box<dyn AgentSession>),
    Closed,
}

/// Exclusive owner of one participant's agent session
pub struct SessionSlot {
    participant: ParticipantId,
    state: Mutex<SlotState>,
    active: AtomicBool,
    closing: AtomicBool,
}

impl SessionSlot {
    pub fn new(participant: ParticipantId) -> Self {
        Self {
            participant,
            state: Mutex::new(SlotState::Idle),
            active: AtomicBool::new(false),
            closing: AtomicBool::new(false),
        }
    }

    pub fn participant(&self) -> &ParticipantId {
        &self.participant
    }

    /// Whether a session is currently open
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    fn ensure_open(&self) -> Result<(), GatewayError> {
        if self.closing.load(Ordering::SeqCst) {
            return Err(GatewayError::SessionClosed);
        }
        Ok(())
    }

    /// Open the session if it is not open yet.
    ///
    /// Returns `true` when this call created the session.
    pub async fn connect(
        &self,
        gateway: &dyn AgentGateway,
        identity: &AgentIdentity,
    ) -> Result<bool, GatewayError> {
        self.ensure_open()?;
        let mut state = self.state.lock().await;
        match &*state {
            SlotState::Connected(_) => Ok(false),
            SlotState::Closed => Err(GatewayError::SessionClosed),
            SlotState::Idle => {
                let session = gateway.connect(identity).await?;
                *state = SlotState::Connected(session);
                self.active.store(true, Ordering::SeqCst);
                info!(participant = %self.participant, "Agent session connected");
                Ok(true)
            }
        }
    }

    /// Send one prompt and wait for the full reply.
    ///
    /// Holds the slot for the whole round trip. A timeout drops the pending
    /// request without touching the slot state.
    pub async fn query(
        &self,
        prompt: &str,
        timeout: Option<Duration>,
    ) -> Result<String, GatewayError> {
        self.ensure_open()?;
        let state = self.state.lock().await;
        let session = match &*state {
            SlotState::Connected(session) => session,
            SlotState::Idle => return Err(GatewayError::NotConnected),
            SlotState::Closed => return Err(GatewayError::SessionClosed),
        };

        debug!(participant = %self.participant, bytes = prompt.len(), "Querying agent");
        match timeout {
            Some(limit) => tokio::time::timeout(limit, session.send(prompt))
                .await
                .map_err(|_| GatewayError::Timeout)?,
            None => session.send(prompt).await,
        }
    }

    /// Close the session. Idempotent; an in-flight query finishes first.
    ///
    /// Returns `true` when an open session was actually closed.
    pub async fn disconnect(&self) -> bool {
        self.closing.store(true, Ordering::SeqCst);
        let mut state = self.state.lock().await;
        let previous = std::mem::replace(&mut *state, SlotState::Closed);
        self.active.store(false, Ordering::SeqCst);

        match previous {
            SlotState::Connected(session) => {
                if let Err(e) = session.close().await {
                    warn!(participant = %self.participant, "Error closing agent session: {}", e);
                }
                info!(participant = %self.participant, "Agent session disconnected");
                true
            }
            SlotState::Idle | SlotState::Closed => false,
        }
    }

    /// Close any open session and make the slot connectable again
    pub async fn reset(&self) {
        self.disconnect().await;
        let mut state = self.state.lock().await;
        *state = SlotState::Idle;
        self.closing.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;

    /// Session that records how many sends overlap
    struct ProbeSession {
        in_flight: Arc<AtomicUsize>,
        max_in_flight: Arc<AtomicUsize>,
        closes: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl AgentSession for ProbeSession {
        async fn send(&self, prompt: &str) -> Result<String, GatewayError> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(5)).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            if prompt == "slow" {
                tokio::time::sleep(Duration::from_millis(200)).await;
            }
            Ok(format!("echo: {}", prompt))
        }

        async fn close(&self) -> Result<(), GatewayError> {
            self.closes.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[derive(Default)]
    struct ProbeGateway {
        connects: AtomicUsize,
        in_flight: Arc<AtomicUsize>,
        max_in_flight: Arc<AtomicUsize>,
        closes: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl AgentGateway for ProbeGateway {
        async fn connect(
            &self,
            _identity: &AgentIdentity,
        ) -> Result<Box<dyn AgentSession>, GatewayError> {
            self.connects.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(ProbeSession {
                in_flight: Arc::clone(&self.in_flight),
                max_in_flight: Arc::clone(&self.max_in_flight),
                closes: Arc::clone(&self.closes),
            }))
        }
    }

    fn identity() -> AgentIdentity {
        AgentIdentity {
            participant: ParticipantId::new("p1"),
            label: "🎭 Алекс".to_string(),
            system_prompt: "persona".to_string(),
        }
    }

    #[tokio::test]
    async fn test_connect_is_idempotent() {
        let gateway = ProbeGateway::default();
        let slot = SessionSlot::new(ParticipantId::new("p1"));

        assert!(slot.connect(&gateway, &identity()).await.unwrap());
        assert!(!slot.connect(&gateway, &identity()).await.unwrap());
        assert_eq!(gateway.connects.load(Ordering::SeqCst), 1);
        assert!(slot.is_active());
    }

    #[tokio::test]
    async fn test_query_before_connect_fails() {
        let slot = SessionSlot::new(ParticipantId::new("p1"));
        assert_eq!(slot.query("hi", None).await, Err(GatewayError::NotConnected));
    }

    #[tokio::test]
    async fn test_concurrent_queries_never_overlap() {
        let gateway = ProbeGateway::default();
        let slot = Arc::new(SessionSlot::new(ParticipantId::new("p1")));
        slot.connect(&gateway, &identity()).await.unwrap();

        let mut handles = Vec::new();
        for i in 0..8 {
            let slot = Arc::clone(&slot);
            handles.push(tokio::spawn(async move {
                slot.query(&format!("q{}", i), None).await
            }));
        }
        for handle in handles {
            assert!(handle.await.unwrap().is_ok());
        }
        assert_eq!(gateway.max_in_flight.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_disconnect_is_idempotent_and_closes_once() {
        let gateway = ProbeGateway::default();
        let slot = SessionSlot::new(ParticipantId::new("p1"));
        slot.connect(&gateway, &identity()).await.unwrap();

        assert!(slot.disconnect().await);
        assert!(!slot.disconnect().await);
        assert_eq!(gateway.closes.load(Ordering::SeqCst), 1);
        assert!(!slot.is_active());
    }

    #[tokio::test]
    async fn test_operations_after_disconnect_fail_fast() {
        let gateway = ProbeGateway::default();
        let slot = SessionSlot::new(ParticipantId::new("p1"));
        slot.connect(&gateway, &identity()).await.unwrap();
        slot.disconnect().await;

        assert_eq!(slot.query("hi", None).await, Err(GatewayError::SessionClosed));
        assert_eq!(
            slot.connect(&gateway, &identity()).await,
            Err(GatewayError::SessionClosed)
        );
    }

    #[tokio::test]
    async fn test_timeout_surfaces_as_error_and_keeps_session() {
        let gateway = ProbeGateway::default();
        let slot = SessionSlot::new(ParticipantId::new("p1"));
        slot.connect(&gateway, &identity()).await.unwrap();

        let result = slot.query("slow", Some(Duration::from_millis(50))).await;
        assert_eq!(result, Err(GatewayError::Timeout));
        assert_eq!(slot.query("again", None).await.unwrap(), "echo: again");
    }

    #[tokio::test]
    async fn test_reset_allows_reconnect() {
        let gateway = ProbeGateway::default();
        let slot = SessionSlot::new(ParticipantId::new("p1"));
        slot.connect(&gateway, &identity()).await.unwrap();
        slot.reset().await;

        assert!(!slot.is_active());
        assert!(slot.connect(&gateway, &identity()).await.unwrap());
        assert_eq!(gateway.connects.load(Ordering::SeqCst), 2);
    }
}
