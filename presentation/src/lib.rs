//! Presentation layer for the-room
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, the automatic game driver and the interactive REPL.

pub mod cli;
pub mod config;
pub mod game;
pub mod output;
pub mod progress;
pub mod repl;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use config::{OutputConfig, ReplConfig};
pub use game::AutoGame;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use repl::{GameRepl, ReplCommand};
