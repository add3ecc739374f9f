//! Presentation-level configuration
//!
//! Configuration for output formatting and REPL behavior.

use room_domain::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Show spinners while agents think
    pub show_progress: bool,
    /// Path to history file
    pub history_file: Option<String>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

impl ReplConfig {
    /// Configured history file, or `<data dir>/the-room/history.txt`
    pub fn history_path(&self) -> Option<PathBuf> {
        match &self.history_file {
            Some(path) => Some(PathBuf::from(path)),
            None => dirs::data_dir().map(|p| p.join("the-room").join("history.txt")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_history_file_wins() {
        let config = ReplConfig {
            history_file: Some("/tmp/room-history".to_string()),
            ..Default::default()
        };
        assert_eq!(config.history_path(), Some(PathBuf::from("/tmp/room-history")));
    }

    #[test]
    fn test_default_output_is_colored_transcript() {
        let config = OutputConfig::default();
        assert_eq!(config.format, OutputFormat::Transcript);
        assert!(config.color);
    }
}
