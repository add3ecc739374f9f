//! `[output]` section: how the finished game is printed

use room_domain::OutputFormat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// `transcript`, `summary` or `json`; unset means transcript
    pub format: Option<OutputFormat>,
    /// Persona colors and highlighting in the terminal
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl FileOutputConfig {
    /// A format requested on the command line wins over the file
    pub fn effective_format(&self, requested: Option<OutputFormat>) -> OutputFormat {
        requested.or(self.format).unwrap_or_default()
    }
}
