//! Anthropic agent session
//!
//! The Messages API is stateless, so the session keeps the conversation
//! locally and sends the whole transcript on every call. This transcript is
//! the participant's private memory of the game.

use super::AnthropicSettings;
use super::types::{Message, MessagesRequest, MessagesResponse, classify_status, classify_transport};
use async_trait::async_trait;
use reqwest::Client;
use room_application::{AgentSession, GatewayError};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Stand-in stored when the model answers with no text; the API rejects
/// empty assistant turns.
const EMPTY_REPLY: &str = "…";

pub struct AnthropicSession {
    client: Client,
    settings: Arc<AnthropicSettings>,
    system_prompt: String,
    label: String,
    /// Conversation history (stateless API requires full history each call)
    messages: Mutex<Vec<Message>>,
}

impl AnthropicSession {
    pub fn new(
        client: Client,
        settings: Arc<AnthropicSettings>,
        system_prompt: String,
        label: String,
    ) -> Self {
        Self {
            client,
            settings,
            system_prompt,
            label,
            messages: Mutex::new(Vec::new()),
        }
    }

    async fn complete(&self, messages: &[Message]) -> Result<MessagesResponse, GatewayError> {
        let request = MessagesRequest {
            model: &self.settings.model,
            max_tokens: self.settings.max_tokens,
            system: (!self.system_prompt.is_empty()).then_some(self.system_prompt.as_str()),
            messages,
        };

        debug!(
            agent = %self.label,
            model = %self.settings.model,
            messages = messages.len(),
            "Calling Anthropic Messages API"
        );

        let response = self
            .client
            .post(self.settings.messages_url())
            .header("x-api-key", &self.settings.api_key)
            .header("anthropic-version", &self.settings.api_version)
            .json(&request)
            .send()
            .await
            .map_err(|e| classify_transport(&e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| classify_transport(&e))?;
        if !status.is_success() {
            return Err(classify_status(status, &body));
        }

        serde_json::from_str(&body)
            .map_err(|e| GatewayError::RequestFailed(format!("Failed to parse response: {}", e)))
    }

    #[cfg(test)]
    async fn history_len(&self) -> usize {
        self.messages.lock().await.len()
    }
}

#[async_trait]
impl AgentSession for AnthropicSession {
    async fn send(&self, prompt: &str) -> Result<String, GatewayError> {
        let mut history = self.messages.lock().await;

        // History only grows once the round trip succeeded
        let mut outgoing = history.clone();
        outgoing.push(Message::user(prompt));
        let response = self.complete(&outgoing).await?;
        let text = response.text();
        if response.is_truncated() {
            warn!(agent = %self.label, "Reply cut off at max_tokens");
        }

        let stored = if text.trim().is_empty() { EMPTY_REPLY } else { text.as_str() };
        history.push(Message::user(prompt));
        history.push(Message::assistant(stored));
        Ok(text)
    }

    async fn close(&self) -> Result<(), GatewayError> {
        let mut history = self.messages.lock().await;
        debug!(agent = %self.label, turns = history.len() / 2, "Dropping session history");
        history.clear();
        Ok(())
    }
}
