//! Game language value object
//!
//! Everything language-specific the domain needs lives here: reply format
//! markers, the "everyone" addressee word, self-vote sentinels and the
//! generic self-introduction phrases. Prompt wording lives in
//! [`crate::prompt::PromptTemplate`].

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Language the agents are instructed to play in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// Every supported language, in a fixed order
    pub const ALL: [Language; 2] = [Language::Russian, Language::English];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Russian => "ru",
            Language::English => "en",
        }
    }

    /// Marker that prefixes the private reasoning line
    pub fn thought_marker(&self) -> &'static str {
        match self {
            Language::Russian => "МЫСЛЬ",
            Language::English => "THOUGHT",
        }
    }

    /// Marker that prefixes the public utterance line
    pub fn speech_marker(&self) -> &'static str {
        match self {
            Language::Russian => "РЕЧЬ",
            Language::English => "SPEECH",
        }
    }

    /// Marker that prefixes the addressee line
    pub fn target_marker(&self) -> &'static str {
        match self {
            Language::Russian => "КОМУ",
            Language::English => "TO",
        }
    }

    /// Word agents use to address the whole room
    pub fn everyone_word(&self) -> &'static str {
        match self {
            Language::Russian => "всем",
            Language::English => "everyone",
        }
    }

    /// Words that mean "I vote for myself"
    pub fn self_vote_sentinels(&self) -> &'static [&'static str] {
        match self {
            Language::Russian => &["себя", "сам", "сама", "себе"],
            Language::English => &["myself"],
        }
    }

    /// Phrases that count as a self-introduction regardless of the name
    pub fn introduction_phrases(&self) -> &'static [&'static str] {
        match self {
            Language::Russian => &[
                "меня зовут",
                "я —",
                "я -",
                "моё имя",
                "мое имя",
                "зови меня",
                "зовите меня",
                "можете звать",
            ],
            Language::English => &["my name is", "call me", "i am called", "i'm called", "name's"],
        }
    }

    /// Phrases that introduce a speaker by an explicit first name
    pub fn named_introductions(&self, name: &str) -> Vec<String> {
        let name = name.to_lowercase();
        match self {
            Language::Russian => vec![format!("я {}", name)],
            Language::English => vec![format!("i'm {}", name), format!("i am {}", name)],
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ru" | "russian" | "русский" => Ok(Language::Russian),
            "en" | "english" => Ok(Language::English),
            other => Err(DomainError::UnknownLanguage(other.to_string())),
        }
    }
}
