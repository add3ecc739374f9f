//! Game setup from TOML (`[game]` section)

use room_domain::{Language, Persona};
use serde::{Deserialize, Serialize};

/// Raw game configuration
///
/// # Example
///
/// ```toml
/// [game]
/// language = "en"
/// turns = 4
///
/// [[game.roster]]
/// real_name = "Vera"
/// emoji = "🦉"
/// appearance = "woman in a grey coat"
/// personality = "patient, watches everyone"
/// secret_goal = "win without ever lying"
/// color = "#9e9e9e"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGameConfig {
    pub language: Language,
    /// Discussion turns before voting in an automatic game
    pub turns: u32,
    /// Replaces the built-in roster when set
    pub roster: Option<Vec<Persona>>,
}

impl Default for FileGameConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            turns: room_application::config::DEFAULT_TURNS,
            roster: None,
        }
    }
}

impl FileGameConfig {
    /// Configured roster, or the built-in one for the configured language
    pub fn roster(&self) -> Vec<Persona> {
        self.roster
            .clone()
            .unwrap_or_else(|| Persona::default_roster(self.language))
    }
}
