//! Persona value object and the built-in rosters

use crate::core::language::Language;
use serde::{Deserialize, Serialize};

/// Immutable character sheet of one participant
///
/// The appearance is what everyone sees before the participant introduces
/// themself; the real name is only revealed by a qualifying utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub real_name: String,
    pub emoji: String,
    pub appearance: String,
    pub personality: String,
    pub secret_goal: String,
    /// Display color for front-ends (hex, e.g. `#9b59b6`)
    #[serde(default)]
    pub color: String,
}

impl Persona {
    pub fn new(
        real_name: impl Into<String>,
        emoji: impl Into<String>,
        appearance: impl Into<String>,
        personality: impl Into<String>,
        secret_goal: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            real_name: real_name.into(),
            emoji: emoji.into(),
            appearance: appearance.into(),
            personality: personality.into(),
            secret_goal: secret_goal.into(),
            color: color.into(),
        }
    }

    /// First word of the appearance that is long enough to identify someone
    ///
    /// Short function words ("в", "a") would match almost any reply, so
    /// words under three characters are skipped.
    ///
    /// ```
    /// use room_domain::Persona;
    ///
    /// let p = Persona::new("Алекс", "🎭", "в тёмной маске", "", "", "");
    /// assert_eq!(p.appearance_keyword(), Some("тёмной".to_string()));
    /// ```
    pub fn appearance_keyword(&self) -> Option<String> {
        self.appearance
            .split_whitespace()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
            .find(|w| w.chars().count() >= 3)
    }

    /// The default five-person cast for a language
    pub fn default_roster(language: Language) -> Vec<Persona> {
        match language {
            Language::Russian => Self::russian_roster(),
            Language::English => Self::english_roster(),
        }
    }

    fn russian_roster() -> Vec<Persona> {
        vec![
            Persona::new(
                "Алекс",
                "🎭",
                "в тёмной маске",
                "Харизматичный манипулятор. Умеет нравиться людям. Говорит красиво.",
                "Очаровать всех, стать другом каждому, победить через обаяние.",
                "#9b59b6",
            ),
            Persona::new(
                "Ника",
                "🦊",
                "рыжеволосая девушка",
                "Хитрая и наблюдательная. Собирает информацию. Использует знания как оружие.",
                "Следить, запоминать, использовать информацию против других.",
                "#e67e22",
            ),
            Persona::new(
                "Дима",
                "🐺",
                "высокий парень в капюшоне",
                "Прямолинейный. Говорит что думает. Или притворяется честным?",
                "Казаться честным, чтобы все доверяли. Разоблачать других.",
                "#2ecc71",
            ),
            Persona::new(
                "Майя",
                "🌹",
                "хрупкая брюнетка",
                "Эмоциональная. Умеет вызывать сочувствие. Играет жертву когда выгодно.",
                "Манипулировать через эмоции и жалость. Слабость — моя сила.",
                "#e74c3c",
            ),
            Persona::new(
                "Иван",
                "🦅",
                "молчаливый мужчина со шрамом",
                "Молчаливый стратег. Мало говорит, много наблюдает. Ждёт момента.",
                "Оставаться в тени. Нанести удар когда никто не ждёт.",
                "#3498db",
            ),
        ]
    }

    fn english_roster() -> Vec<Persona> {
        vec![
            Persona::new(
                "Alex",
                "🎭",
                "masked stranger",
                "Charismatic manipulator. Easy to like. Speaks beautifully.",
                "Charm everyone, befriend each of them, win through charm.",
                "#9b59b6",
            ),
            Persona::new(
                "Nika",
                "🦊",
                "red-haired woman",
                "Cunning and observant. Collects information. Uses knowledge as a weapon.",
                "Watch, remember, turn information against the others.",
                "#e67e22",
            ),
            Persona::new(
                "Dima",
                "🐺",
                "hooded tall guy",
                "Blunt. Says what he thinks. Or pretends to be honest?",
                "Seem honest so everyone trusts you. Expose the others.",
                "#2ecc71",
            ),
            Persona::new(
                "Maya",
                "🌹",
                "fragile brunette",
                "Emotional. Knows how to earn sympathy. Plays the victim when it pays.",
                "Manipulate through emotion and pity. Weakness is my strength.",
                "#e74c3c",
            ),
            Persona::new(
                "Ivan",
                "🦅",
                "scarred silent man",
                "Silent strategist. Talks little, watches a lot. Waits for the moment.",
                "Stay in the shadows. Strike when nobody expects it.",
                "#3498db",
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_default_rosters_have_five_distinct_names() {
        for language in Language::ALL {
            let roster = Persona::default_roster(language);
            assert_eq!(roster.len(), 5);
            let names: BTreeSet<_> = roster.iter().map(|p| p.real_name.as_str()).collect();
            assert_eq!(names.len(), 5);

            let keywords: BTreeSet<_> =
                roster.iter().filter_map(|p| p.appearance_keyword()).collect();
            assert_eq!(keywords.len(), 5, "{:?}", keywords);
        }
    }

    #[test]
    fn test_appearance_keyword_skips_short_words() {
        let p = Persona::new("Дима", "🐺", "высокий парень в капюшоне", "", "", "");
        assert_eq!(p.appearance_keyword(), Some("высокий".to_string()));

        let tiny = Persona::new("X", "", "a b", "", "", "");
        assert_eq!(tiny.appearance_keyword(), None);
    }

    #[test]
    fn test_every_default_persona_has_a_keyword() {
        for language in Language::ALL {
            for persona in Persona::default_roster(language) {
                assert!(persona.appearance_keyword().is_some(), "{}", persona.real_name);
            }
        }
    }
}
