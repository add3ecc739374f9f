//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod agent;
mod game;
mod logging;
mod output;
mod repl;

pub use agent::FileAgentConfig;
pub use game::FileGameConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;

use room_application::RoomConfig;
use room_domain::MIN_PARTICIPANTS;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("agent.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("agent.max_tokens cannot be 0")]
    InvalidMaxTokens,

    #[error("agent.model cannot be empty")]
    EmptyModelName,

    #[error("game.roster needs at least {required} personas, got {actual}")]
    RosterTooSmall { required: usize, actual: usize },
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Agent backend settings
    pub agent: FileAgentConfig,
    /// Game setup
    pub game: FileGameConfig,
    /// Transcript and diagnostic log locations
    pub logging: FileLoggingConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the configuration, stopping at the first problem
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if let Some(0) = self.agent.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.agent.max_tokens == 0 {
            return Err(ConfigValidationError::InvalidMaxTokens);
        }

        if self.agent.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        if let Some(roster) = &self.game.roster
            && roster.len() < MIN_PARTICIPANTS
        {
            return Err(ConfigValidationError::RosterTooSmall {
                required: MIN_PARTICIPANTS,
                actual: roster.len(),
            });
        }

        Ok(())
    }

    /// Game setup for the orchestrator
    pub fn room_config(&self) -> RoomConfig {
        RoomConfig::for_language(self.game.language)
            .with_roster(self.game.roster())
            .with_turns(self.game.turns)
            .with_timeout_seconds(self.agent.timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use room_domain::{Language, OutputFormat};
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[agent]
model = "claude-haiku-4-5"
max_tokens = 512
timeout_seconds = 30

[game]
language = "en"
turns = 3

[logging]
conversation_log = "room.jsonl"

[output]
format = "json"
color = false

[repl]
show_progress = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.agent.model, "claude-haiku-4-5");
        assert_eq!(config.agent.max_tokens, 512);
        assert_eq!(config.game.language, Language::English);
        assert_eq!(config.game.turns, 3);
        assert_eq!(
            config.logging.conversation_log.as_deref(),
            Some(std::path::Path::new("room.jsonl"))
        );
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[game]
turns = 2
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.turns, 2);
        // Defaults should apply
        assert_eq!(config.game.language, Language::Russian);
        assert_eq!(config.agent.api_key_env, "ANTHROPIC_API_KEY");
        assert!(config.output.color);
    }

    #[test]
    fn test_custom_roster() {
        let toml_str = r##"
[game]
language = "en"

[[game.roster]]
real_name = "Vera"
emoji = "🦉"
appearance = "woman in a grey coat"
personality = "patient"
secret_goal = "win honestly"
color = "#9e9e9e"

[[game.roster]]
real_name = "Oleg"
emoji = "🐻"
appearance = "bearded giant"
personality = "loud"
secret_goal = "make everyone laugh"
color = "#795548"
"##;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_ok());

        let room = config.room_config();
        assert_eq!(room.roster.len(), 2);
        assert_eq!(room.roster[1].real_name, "Oleg");
        assert_eq!(room.language, Language::English);
    }

    #[test]
    fn test_room_config_uses_default_roster_and_timeout() {
        let room = FileConfig::default().room_config();
        assert_eq!(room.roster.len(), 5);
        assert_eq!(room.agent_timeout, Some(Duration::from_secs(120)));
    }

    #[test]
    fn test_validate_zero_timeout() {
        let toml_str = r#"
[agent]
timeout_seconds = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));
    }

    #[test]
    fn test_validate_zero_max_tokens() {
        let mut config = FileConfig::default();
        config.agent.max_tokens = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidMaxTokens));
    }

    #[test]
    fn test_validate_empty_model_name() {
        let mut config = FileConfig::default();
        config.agent.model = "  ".to_string();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyModelName));
    }

    #[test]
    fn test_validate_small_roster() {
        let mut config = FileConfig::default();
        config.game.roster = Some(vec![room_domain::Persona::default_roster(Language::Russian)
            .remove(0)]);
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::RosterTooSmall {
                required: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(FileConfig::default().validate().is_ok());
    }
}
