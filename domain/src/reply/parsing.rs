//! Best-effort parsing of free-form agent replies.
//!
//! Agents are asked to answer in three marker-prefixed lines:
//!
//! ```text
//! МЫСЛЬ: <private reasoning>
//! РЕЧЬ: <what is said out loud>
//! КОМУ: <addressee, or "всем">
//! ```
//!
//! Nothing guarantees that format, so this is a line scanner, not a grammar.
//! A line whose text before the first colon is a known marker (any supported
//! language, any case) overwrites that field; every other line is ignored.

use crate::core::language::Language;
use serde::{Deserialize, Serialize};

/// Whom a public utterance is addressed to
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Addressee {
    /// The whole room (default when no addressee is given)
    #[default]
    Everyone,
    /// Free-form description of a specific participant
    Named(String),
}

impl From<String> for Addressee {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        let lower = trimmed.to_lowercase();
        if trimmed.is_empty()
            || lower == "all"
            || Language::ALL.iter().any(|l| lower == l.everyone_word())
        {
            Addressee::Everyone
        } else {
            Addressee::Named(trimmed.to_string())
        }
    }
}

impl From<Addressee> for String {
    fn from(value: Addressee) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for Addressee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Addressee::Everyone => write!(f, "everyone"),
            Addressee::Named(name) => write!(f, "{}", name),
        }
    }
}

/// Structured intent extracted from one agent reply
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParsedReply {
    /// Private reasoning, never shown to other participants
    pub thought: String,
    /// Public utterance, broadcast to the room
    pub speech: String,
    pub target: Addressee,
}

impl ParsedReply {
    pub fn has_speech(&self) -> bool {
        !self.speech.is_empty()
    }
}

#[derive(Clone, Copy)]
enum Field {
    Thought,
    Speech,
    Target,
}

fn field_for_marker(marker: &str) -> Option<Field> {
    let marker = marker.to_uppercase();
    Language::ALL.iter().find_map(|l| {
        if marker == l.thought_marker() {
            Some(Field::Thought)
        } else if marker == l.speech_marker() {
            Some(Field::Speech)
        } else if marker == l.target_marker() {
            Some(Field::Target)
        } else {
            None
        }
    })
}

fn strip_emphasis(s: &str) -> &str {
    s.trim().trim_matches(|c| c == '*' || c == '_').trim()
}

/// Parse an agent reply into thought / speech / addressee.
///
/// Never fails: missing fields fall back to empty strings and
/// [`Addressee::Everyone`].
///
/// # Examples
///
/// ```
/// use room_domain::{parse_reply, Addressee};
///
/// let reply = parse_reply("речь: Привет\nМЫСЛЬ: они мне не верят\nшум");
/// assert_eq!(reply.thought, "они мне не верят");
/// assert_eq!(reply.speech, "Привет");
/// assert_eq!(reply.target, Addressee::Everyone);
/// ```
pub fn parse_reply(text: &str) -> ParsedReply {
    let mut reply = ParsedReply::default();

    for line in text.lines() {
        let Some((marker, content)) = line.trim().split_once(':') else {
            continue;
        };
        let Some(field) = field_for_marker(strip_emphasis(marker)) else {
            continue;
        };
        let content = strip_emphasis(content).to_string();
        match field {
            Field::Thought => reply.thought = content,
            Field::Speech => reply.speech = content,
            Field::Target => reply.target = Addressee::from(content),
        }
    }

    reply
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_fields() {
        let reply = parse_reply("МЫСЛЬ: a\nРЕЧЬ: b\nКОМУ: c");
        assert_eq!(reply.thought, "a");
        assert_eq!(reply.speech, "b");
        assert_eq!(reply.target, Addressee::Named("c".to_string()));
    }

    #[test]
    fn test_parse_any_order_and_case() {
        let reply = parse_reply("кому: c\nречь: b\nмысль: a");
        assert_eq!(reply.thought, "a");
        assert_eq!(reply.speech, "b");
        assert_eq!(reply.target, Addressee::Named("c".to_string()));
    }

    #[test]
    fn test_parse_no_recognized_lines() {
        let reply = parse_reply("I refuse to follow the format.\nReally.");
        assert_eq!(reply.thought, "");
        assert_eq!(reply.speech, "");
        assert_eq!(reply.target, Addressee::Everyone);
        assert_eq!(reply.target.to_string(), "everyone");
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_reply(""), ParsedReply::default());
    }

    #[test]
    fn test_later_marker_overwrites_earlier() {
        let reply = parse_reply("РЕЧЬ: first\nnoise\nРЕЧЬ: second");
        assert_eq!(reply.speech, "second");
    }

    #[test]
    fn test_only_first_colon_splits() {
        let reply = parse_reply("РЕЧЬ: время: полночь");
        assert_eq!(reply.speech, "время: полночь");
    }

    #[test]
    fn test_everyone_word_maps_to_everyone() {
        assert_eq!(parse_reply("КОМУ: всем").target, Addressee::Everyone);
        assert_eq!(parse_reply("TO: Everyone").target, Addressee::Everyone);
        assert_eq!(parse_reply("КОМУ:").target, Addressee::Everyone);
    }

    #[test]
    fn test_english_markers_and_markdown_emphasis() {
        let reply = parse_reply("**THOUGHT:** plan\n  **Speech:** hello there  \nTo: the masked one");
        assert_eq!(reply.thought, "plan");
        assert_eq!(reply.speech, "hello there");
        assert_eq!(reply.target, Addressee::Named("the masked one".to_string()));
    }

    #[test]
    fn test_unknown_marker_is_ignored() {
        let reply = parse_reply("ДЕЙСТВИЕ: смотрит в окно\nРЕЧЬ: Тихо.");
        assert_eq!(reply.speech, "Тихо.");
        assert_eq!(reply.thought, "");
    }

    #[test]
    fn test_addressee_serializes_as_string() {
        let json = serde_json::to_string(&Addressee::Everyone).unwrap();
        assert_eq!(json, "\"everyone\"");
        let named: Addressee = serde_json::from_str("\"Ника\"").unwrap();
        assert_eq!(named, Addressee::Named("Ника".to_string()));
    }
}
