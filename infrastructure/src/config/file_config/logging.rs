//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL game transcript; no transcript when unset
    pub conversation_log: Option<PathBuf>,
    /// Directory for rolling diagnostic logs in interactive mode
    pub log_dir: Option<PathBuf>,
}
