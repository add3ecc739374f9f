//! Output format value object

use serde::{Deserialize, Serialize};

/// How a finished game is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Every action, thought and vote as it happens (default)
    #[default]
    Transcript,
    /// Only the final standings and outcome
    Summary,
    /// Final snapshot as JSON
    Json,
}
