//! CLI command definitions

use clap::{Parser, ValueEnum};
use room_domain::Language;
use std::path::PathBuf;

/// Output format for a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Every action, thought and vote as it happens
    Transcript,
    /// Only the final standings and outcome
    Summary,
    /// Final snapshot as JSON
    Json,
}

impl From<OutputFormat> for room_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Transcript => room_domain::OutputFormat::Transcript,
            OutputFormat::Summary => room_domain::OutputFormat::Summary,
            OutputFormat::Json => room_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for the-room
#[derive(Parser, Debug)]
#[command(name = "the-room")]
#[command(author, version, about = "Five strangers wake up in a room. Only a unanimous vote gets anyone out.")]
#[command(long_about = r#"
The Room seats several AI agents, each playing a hidden persona, in one room.
They start as strangers known only by appearance, talk, may introduce
themselves, and finally vote. A winner exists only if every vote goes to
the same person.

By default a full game is played automatically: every participant acts each
turn, then everyone votes and the outcome is printed.

Configuration files are loaded from (in priority order):
1. ROOM_* environment variables
2. --config <path>     Explicit config file
3. ./room.toml         Project-level config
4. ~/.config/the-room/config.toml   Global config

Example:
  the-room
  the-room --turns 3 --language en
  the-room --interactive
  the-room --output json > game.json
"#)]
pub struct Cli {
    /// Drive the game by hand from a REPL
    #[arg(short, long)]
    pub interactive: bool,

    /// Discussion turns before voting (automatic mode)
    #[arg(short, long, value_name = "N")]
    pub turns: Option<u32>,

    /// Game language: ru or en
    #[arg(short, long, value_name = "LANG")]
    pub language: Option<Language>,

    /// Agent model to use for every participant
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Write the JSONL game transcript to this file
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["the-room"]).unwrap();
        assert!(!cli.interactive);
        assert!(cli.turns.is_none());
        assert!(cli.language.is_none());
        assert!(cli.output.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "the-room", "-i", "--turns", "3", "--language", "en", "-o", "json", "-vv",
        ])
        .unwrap();
        assert!(cli.interactive);
        assert_eq!(cli.turns, Some(3));
        assert_eq!(cli.language, Some(Language::English));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_unknown_language_is_rejected() {
        assert!(Cli::try_parse_from(["the-room", "--language", "fr"]).is_err());
    }

    #[test]
    fn test_output_format_maps_to_domain() {
        assert_eq!(
            room_domain::OutputFormat::from(OutputFormat::Summary),
            room_domain::OutputFormat::Summary
        );
    }
}
