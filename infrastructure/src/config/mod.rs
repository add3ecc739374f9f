//! Configuration file loading for the-room
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ROOM_` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./room.toml` or `./.room.toml`
//! 4. Global: `$XDG_CONFIG_HOME/the-room/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAgentConfig, FileConfig, FileGameConfig, FileLoggingConfig,
    FileOutputConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
