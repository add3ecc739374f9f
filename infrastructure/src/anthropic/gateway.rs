//! Anthropic agent gateway

use super::AnthropicSettings;
use super::session::AnthropicSession;
use async_trait::async_trait;
use reqwest::Client;
use room_application::{AgentGateway, AgentIdentity, AgentSession, GatewayError};
use std::sync::Arc;
use tracing::info;

/// Opens one independent Anthropic conversation per participant
pub struct AnthropicGateway {
    client: Client,
    settings: Arc<AnthropicSettings>,
}

impl AnthropicGateway {
    pub fn new(settings: AnthropicSettings) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .build()
            .map_err(|e| GatewayError::ConnectionError(format!("HTTP client: {}", e)))?;

        info!(model = %settings.model, base_url = %settings.base_url, "Anthropic gateway ready");
        Ok(Self {
            client,
            settings: Arc::new(settings),
        })
    }

    pub fn model(&self) -> &str {
        &self.settings.model
    }
}

#[async_trait]
impl AgentGateway for AnthropicGateway {
    async fn connect(&self, identity: &AgentIdentity) -> Result<Box<dyn AgentSession>, GatewayError> {
        info!(
            participant = %identity.participant,
            agent = %identity.label,
            "Opening Anthropic session"
        );
        Ok(Box::new(AnthropicSession::new(
            self.client.clone(),
            Arc::clone(&self.settings),
            identity.system_prompt.clone(),
            identity.label.clone(),
        )))
    }
}
