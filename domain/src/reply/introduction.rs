//! Self-identification detection
//!
//! Trigger phrases are data: the language's generic phrases ("меня зовут",
//! "call me", ...) plus one explicit-name phrase per roster name, so a
//! different cast needs no code change.
//!
//! Generic phrases match anywhere in the lowercased speech. Name phrases
//! match whole words only, so "я никак" never reads as "я Ника".

use crate::core::language::Language;
use crate::core::string::words;

/// Decides whether a public utterance reveals the speaker's name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntroductionDetector {
    phrases: Vec<String>,
    named: Vec<Vec<String>>,
}

impl IntroductionDetector {
    /// Build the trigger set for a language and the roster's real names
    pub fn new<'a>(language: Language, names: impl IntoIterator<Item = &'a str>) -> Self {
        let phrases = language
            .introduction_phrases()
            .iter()
            .map(|p| p.to_string())
            .collect();
        let named = names
            .into_iter()
            .flat_map(|name| language.named_introductions(name))
            .map(|phrase| words(&phrase))
            .filter(|seq| !seq.is_empty())
            .collect();
        Self { phrases, named }
    }

    /// Whether the speech contains any trigger phrase (case-insensitive)
    pub fn is_introduction(&self, speech: &str) -> bool {
        let lower = speech.to_lowercase();
        if self.phrases.iter().any(|p| lower.contains(p.as_str())) {
            return true;
        }
        let spoken = words(speech);
        self.named
            .iter()
            .any(|seq| spoken.windows(seq.len()).any(|w| w == seq.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn russian() -> IntroductionDetector {
        IntroductionDetector::new(Language::Russian, ["Алекс", "Ника", "Дима", "Майя", "Иван"])
    }

    #[test]
    fn test_generic_phrase_triggers() {
        let d = russian();
        assert!(d.is_introduction("Привет. Меня зовут Ника."));
        assert!(d.is_introduction("Зови меня как хочешь"));
    }

    #[test]
    fn test_explicit_name_triggers() {
        let d = russian();
        assert!(d.is_introduction("Ладно, я Дима, и что?"));
    }

    #[test]
    fn test_plain_speech_does_not_trigger() {
        let d = russian();
        assert!(!d.is_introduction("Где мы? Кто все эти люди?"));
        assert!(!d.is_introduction(""));
    }

    #[test]
    fn test_english_triggers() {
        let d = IntroductionDetector::new(Language::English, ["Alex", "Nika"]);
        assert!(d.is_introduction("Hi, MY NAME IS Alex."));
        assert!(d.is_introduction("I'm Nika, nice to meet you."));
        assert!(!d.is_introduction("I'm not telling you anything."));
    }

    #[test]
    fn test_custom_roster_names_are_used() {
        let d = IntroductionDetector::new(Language::Russian, ["Ольга"]);
        assert!(d.is_introduction("я ольга"));
        assert!(!d.is_introduction("я алекс"));
    }

    #[test]
    fn test_name_phrase_needs_whole_words() {
        let d = russian();
        assert!(!d.is_introduction("Я никак не пойму, где мы."));
        assert!(!d.is_introduction("Я иванова не знаю"));
        assert!(d.is_introduction("Ну... я Ника."));

        let en = IntroductionDetector::new(Language::English, ["Ivan"]);
        assert!(!en.is_introduction("I am ivanhoe's biggest fan"));
        assert!(en.is_introduction("Fine. I am Ivan!"));
    }
}
