//! Infrastructure layer for the-room
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod anthropic;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use anthropic::{AnthropicGateway, AnthropicSession, AnthropicSettings};
pub use config::{
    ConfigLoader, ConfigValidationError, FileAgentConfig, FileConfig, FileGameConfig,
    FileLoggingConfig, FileOutputConfig, FileReplConfig,
};
pub use logging::JsonlConversationLogger;
