//! Slash command parsing for the game REPL

use room_domain::ParticipantId;

/// One line of REPL input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Act(ParticipantId),
    Round,
    Next,
    Vote(ParticipantId),
    VoteAll,
    Resolve,
    State,
    History(ParticipantId),
    /// Observer message; plain text without a slash is a message too
    Say(String),
    Help,
    Quit,
}

impl ReplCommand {
    /// Parse a non-empty, trimmed input line
    pub fn parse(line: &str) -> Result<Self, String> {
        let Some(rest) = line.strip_prefix('/') else {
            return Ok(ReplCommand::Say(line.to_string()));
        };
        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        let participant = |usage: &str| {
            if arg.is_empty() {
                Err(format!("Usage: {}", usage))
            } else {
                Ok(ParticipantId::new(arg))
            }
        };

        match name {
            "act" | "a" => participant("/act <id>").map(ReplCommand::Act),
            "round" | "r" => Ok(ReplCommand::Round),
            "next" | "n" => Ok(ReplCommand::Next),
            "vote" | "v" => participant("/vote <id>").map(ReplCommand::Vote),
            "vote-all" => Ok(ReplCommand::VoteAll),
            "resolve" => Ok(ReplCommand::Resolve),
            "state" | "s" => Ok(ReplCommand::State),
            "history" => participant("/history <id>").map(ReplCommand::History),
            "say" if arg.is_empty() => Err("Usage: /say <text>".to_string()),
            "say" => Ok(ReplCommand::Say(arg.to_string())),
            "help" | "h" | "?" => Ok(ReplCommand::Help),
            "quit" | "exit" | "q" => Ok(ReplCommand::Quit),
            _ => Err(format!("Unknown command: /{}", name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_participant_commands() {
        assert_eq!(
            ReplCommand::parse("/act p2"),
            Ok(ReplCommand::Act(ParticipantId::new("p2")))
        );
        assert_eq!(
            ReplCommand::parse("/v   p5 "),
            Ok(ReplCommand::Vote(ParticipantId::new("p5")))
        );
        assert_eq!(
            ReplCommand::parse("/history p1"),
            Ok(ReplCommand::History(ParticipantId::new("p1")))
        );
    }

    #[test]
    fn test_missing_argument_shows_usage() {
        assert_eq!(ReplCommand::parse("/act"), Err("Usage: /act <id>".to_string()));
        assert!(ReplCommand::parse("/say").is_err());
    }

    #[test]
    fn test_plain_text_is_an_observer_message() {
        assert_eq!(
            ReplCommand::parse("Кто из вас лжёт?"),
            Ok(ReplCommand::Say("Кто из вас лжёт?".to_string()))
        );
        assert_eq!(
            ReplCommand::parse("/say hello there"),
            Ok(ReplCommand::Say("hello there".to_string()))
        );
    }

    #[test]
    fn test_aliases() {
        for quit in ["/quit", "/exit", "/q"] {
            assert_eq!(ReplCommand::parse(quit), Ok(ReplCommand::Quit));
        }
        assert_eq!(ReplCommand::parse("/?"), Ok(ReplCommand::Help));
        assert_eq!(ReplCommand::parse("/vote-all"), Ok(ReplCommand::VoteAll));
        assert!(ReplCommand::parse("/dance").is_err());
    }
}
