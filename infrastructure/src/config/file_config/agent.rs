//! Agent backend configuration from TOML (`[agent]` section)

use serde::{Deserialize, Serialize};

/// Anthropic Messages API settings shared by every participant
///
/// # Example
///
/// ```toml
/// [agent]
/// model = "claude-sonnet-4-5"
/// api_key_env = "ANTHROPIC_API_KEY"
/// max_tokens = 1024
/// timeout_seconds = 120
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAgentConfig {
    /// Model every participant runs on
    pub model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead)
    pub api_key: Option<String>,
    /// Base URL of the Anthropic API
    pub base_url: String,
    /// `anthropic-version` header value
    pub api_version: String,
    /// Max tokens per reply
    pub max_tokens: u32,
    /// Timeout for one agent round trip, in seconds
    pub timeout_seconds: Option<u64>,
}

impl Default for FileAgentConfig {
    fn default() -> Self {
        Self {
            model: "claude-sonnet-4-5".to_string(),
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.anthropic.com".to_string(),
            api_version: "2023-06-01".to_string(),
            max_tokens: 1024,
            timeout_seconds: Some(120),
        }
    }
}

impl FileAgentConfig {
    /// Resolve the API key: the direct value wins over the environment
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_key_wins() {
        let config = FileAgentConfig {
            api_key: Some("sk-direct".to_string()),
            api_key_env: "ROOM_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key(), Some("sk-direct".to_string()));
    }

    #[test]
    fn test_missing_key() {
        let config = FileAgentConfig {
            api_key_env: "ROOM_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key(), None);
    }
}
