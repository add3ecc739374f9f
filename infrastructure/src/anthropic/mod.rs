//! Anthropic Messages API adapter for the agent gateway port

mod gateway;
mod session;
mod types;

pub use gateway::AnthropicGateway;
pub use session::AnthropicSession;

use crate::config::FileAgentConfig;
use room_application::GatewayError;

/// Connection settings resolved from `[agent]` configuration
#[derive(Debug, Clone)]
pub struct AnthropicSettings {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub api_version: String,
    pub max_tokens: u32,
}

impl AnthropicSettings {
    /// Resolve settings, failing when no API key is available
    pub fn from_config(config: &FileAgentConfig) -> Result<Self, GatewayError> {
        let api_key = config.resolve_api_key().ok_or_else(|| {
            GatewayError::Authentication(format!(
                "no API key: set {} or agent.api_key",
                config.api_key_env
            ))
        })?;

        Ok(Self {
            api_key,
            model: config.model.clone(),
            base_url: config.base_url.clone(),
            api_version: config.api_version.clone(),
            max_tokens: config.max_tokens,
        })
    }

    pub fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_url_trims_trailing_slash() {
        let config = FileAgentConfig {
            api_key: Some("sk-test".to_string()),
            base_url: "https://proxy.example/".to_string(),
            ..Default::default()
        };
        let settings = AnthropicSettings::from_config(&config).unwrap();
        assert_eq!(settings.messages_url(), "https://proxy.example/v1/messages");
        assert_eq!(settings.max_tokens, 1024);
    }

    #[test]
    fn test_missing_key_is_authentication_error() {
        let config = FileAgentConfig {
            api_key_env: "ROOM_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            AnthropicSettings::from_config(&config),
            Err(GatewayError::Authentication(_))
        ));
    }
}
