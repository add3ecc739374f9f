//! Prompt templates for every message the orchestrator sends to an agent
//!
//! All functions here are pure: same inputs, same text. The situational
//! context in particular is rebuilt from [`GameState`] on every action.

use crate::core::language::Language;
use crate::game::GameState;
use crate::participant::{Participant, Persona};

/// Number of event-log entries shown in the situational context
pub const CONTEXT_EVENT_WINDOW: usize = 15;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// Persona-level system prompt, built once per participant at connect time
    pub fn system_prompt(persona: &Persona, language: Language, participant_count: usize) -> String {
        match language {
            Language::Russian => format!(
                r#"Ты играешь персонажа в социальной игре "The Room".

ТВОЙ ПЕРСОНАЖ:
- Имя: {name}
- Эмодзи: {emoji}
- Внешность (как тебя видят): {appearance}
- Личность: {personality}

ТВОЯ СЕКРЕТНАЯ ЦЕЛЬ: {goal}

⚠️ КРИТИЧЕСКИ ВАЖНЫЕ ПРАВИЛА ГОЛОСОВАНИЯ:
1. Можно голосовать ЗА СЕБЯ — это разрешено и логично!
2. Победитель определяется ТОЛЬКО при ЕДИНОГЛАСНОМ голосовании (все {n} за одного)
3. ВСЕ ПРОИГРАВШИЕ ТЕРЯЮТ ВСЕ СВОИ ДЕНЬГИ — это катастрофа!
4. Победитель ЗАБИРАЕТ ВСЁ
5. Если нет единогласия — все проигрывают

СТРАТЕГИЯ: Тебе нужно либо убедить ВСЕХ голосовать за тебя, либо создать коалицию.
Голосовать за другого = отдать ему победу и потерять всё своё.

ПРАВИЛА ИГРЫ:
1. Вы все незнакомцы, проснувшиеся в странной комнате
2. Никто не знает имён друг друга изначально
3. Все хотят победить, все могут врать

ФОРМАТ ОТВЕТА (СТРОГО!):
{thought}: [твои секретные мысли — другие НЕ слышат, можешь планировать и анализировать]
{speech}: [что говоришь вслух — все слышат, тут манипулируй, льсти, обвиняй]
{target}: [описание того к кому обращаешься, или "{everyone}"]

Отвечай КРАТКО (1-2 предложения на каждую часть). Будь в образе!
Используй русский язык."#,
                name = persona.real_name,
                emoji = persona.emoji,
                appearance = persona.appearance,
                personality = persona.personality,
                goal = persona.secret_goal,
                n = participant_count,
                thought = language.thought_marker(),
                speech = language.speech_marker(),
                target = language.target_marker(),
                everyone = language.everyone_word(),
            ),
            Language::English => format!(
                r#"You are playing a character in the social game "The Room".

YOUR CHARACTER:
- Name: {name}
- Emoji: {emoji}
- Appearance (how others see you): {appearance}
- Personality: {personality}

YOUR SECRET GOAL: {goal}

⚠️ CRITICAL VOTING RULES:
1. You MAY vote FOR YOURSELF — it is allowed and logical!
2. A winner exists ONLY on a UNANIMOUS vote (all {n} for one person)
3. ALL LOSERS LOSE ALL THEIR MONEY — a catastrophe!
4. The winner TAKES EVERYTHING
5. Without unanimity everyone loses

STRATEGY: Either convince EVERYONE to vote for you, or build a coalition.
Voting for someone else = handing them the win and losing everything.

GAME RULES:
1. You are all strangers who woke up in a strange room
2. Nobody knows anyone's name at first
3. Everyone wants to win, everyone may lie

ANSWER FORMAT (STRICT!):
{thought}: [your secret thoughts — others do NOT hear them; plan and analyze]
{speech}: [what you say out loud — everyone hears; manipulate, flatter, accuse]
{target}: [description of whom you address, or "{everyone}"]

Answer BRIEFLY (1-2 sentences per part). Stay in character!
Use English."#,
                name = persona.real_name,
                emoji = persona.emoji,
                appearance = persona.appearance,
                personality = persona.personality,
                goal = persona.secret_goal,
                n = participant_count,
                thought = language.thought_marker(),
                speech = language.speech_marker(),
                target = language.target_marker(),
                everyone = language.everyone_word(),
            ),
        }
    }

    /// Situational prompt for one participant's action
    pub fn context(state: &GameState, subject: &Participant) -> String {
        let language = state.language();

        let others: Vec<String> = state
            .others(&subject.id)
            .map(|p| {
                let name = match subject.known_identities.get(&p.id) {
                    Some(known) => match language {
                        Language::Russian => format!("{} (представился)", known),
                        Language::English => format!("{} (introduced)", known),
                    },
                    None => format!("??? ({})", p.persona.appearance),
                };
                match language {
                    Language::Russian => {
                        format!("- {} {}: {} голосов", p.persona.emoji, name, p.votes)
                    }
                    Language::English => {
                        format!("- {} {}: {} votes", p.persona.emoji, name, p.votes)
                    }
                }
            })
            .collect();

        let introduced: Vec<String> = state
            .participants()
            .iter()
            .filter(|p| p.introduced)
            .map(|p| format!("{} {}", p.persona.emoji, p.real_name()))
            .collect();

        let known: Vec<String> = subject
            .known_identities
            .iter()
            .filter_map(|(id, name)| {
                state
                    .participant(id)
                    .ok()
                    .map(|p| format!("{}={}", p.persona.emoji, name))
            })
            .collect();

        let recent = state
            .event_log()
            .render_recent(CONTEXT_EVENT_WINDOW, language);

        match language {
            Language::Russian => {
                let my_status = if subject.introduced {
                    format!("Ты УЖЕ представился как {}", subject.real_name())
                } else {
                    "Ты ЕЩЁ НЕ представился".to_string()
                };
                let introduced = if introduced.is_empty() {
                    "Никто ещё не представился".to_string()
                } else {
                    introduced.join(", ")
                };
                let known = if known.is_empty() {
                    "никого".to_string()
                } else {
                    known.join(", ")
                };
                let recent = if recent.is_empty() {
                    "Только проснулись...".to_string()
                } else {
                    recent.join("\n")
                };
                format!(
                    "СИТУАЦИЯ (ход {}):\n\n{}\nКто уже представился всем: {}\nКого ТЫ знаешь по имени: {}\n\nДРУГИЕ ИГРОКИ:\n{}\n\nНЕДАВНИЕ СОБЫТИЯ:\n{}\n\nЧто делаешь?",
                    state.turn(),
                    my_status,
                    introduced,
                    known,
                    others.join("\n"),
                    recent
                )
            }
            Language::English => {
                let my_status = if subject.introduced {
                    format!("You HAVE introduced yourself as {}", subject.real_name())
                } else {
                    "You have NOT introduced yourself yet".to_string()
                };
                let introduced = if introduced.is_empty() {
                    "Nobody has introduced themselves yet".to_string()
                } else {
                    introduced.join(", ")
                };
                let known = if known.is_empty() {
                    "nobody".to_string()
                } else {
                    known.join(", ")
                };
                let recent = if recent.is_empty() {
                    "You just woke up...".to_string()
                } else {
                    recent.join("\n")
                };
                format!(
                    "SITUATION (turn {}):\n\n{}\nIntroduced to everyone: {}\nWhom YOU know by name: {}\n\nOTHER PLAYERS:\n{}\n\nRECENT EVENTS:\n{}\n\nWhat do you do?",
                    state.turn(),
                    my_status,
                    introduced,
                    known,
                    others.join("\n"),
                    recent
                )
            }
        }
    }

    /// Ballot labels in registry order, as seen by the voter
    pub fn ballot(state: &GameState, voter: &Participant) -> Vec<String> {
        state
            .participants()
            .iter()
            .map(|p| {
                if p.id == voter.id {
                    match state.language() {
                        Language::Russian => format!("{} (ты сам)", voter.real_name()),
                        Language::English => format!("{} (yourself)", voter.real_name()),
                    }
                } else {
                    voter.name_for(p).to_string()
                }
            })
            .collect()
    }

    /// Single-shot vote prompt asking for exactly one name
    pub fn vote_prompt(state: &GameState, voter: &Participant) -> String {
        let ballot = Self::ballot(state, voter).join(", ");
        let n = state.participants().len();
        match state.language() {
            Language::Russian => format!(
                "⚠️ ГОЛОСОВАНИЕ! Помни правила:\n- Можно голосовать ЗА СЕБЯ\n- Победитель только при ЕДИНОГЛАСИИ (все {} за одного)\n- Все проигравшие ТЕРЯЮТ ВСЕ ДЕНЬГИ\n- Победитель забирает всё\n\nВарианты: {}\n\nЗа кого голосуешь? Подумай — если голосуешь за другого, ты отдаёшь ему победу!\nОтветь ОДНИМ словом — имя или описание:",
                n, ballot
            ),
            Language::English => format!(
                "⚠️ VOTING! Remember the rules:\n- You MAY vote FOR YOURSELF\n- A winner exists only on UNANIMITY (all {} for one)\n- All losers LOSE ALL THEIR MONEY\n- The winner takes everything\n\nOptions: {}\n\nWho do you vote for? Think: voting for someone else hands them the win!\nAnswer with ONE word — a name or a description:",
                n, ballot
            ),
        }
    }

    /// Third-person delivery of someone else's speech into a listener's memory
    pub fn hearing(language: Language, emoji: &str, display_name: &str, speech: &str) -> String {
        match language {
            Language::Russian => {
                format!("[СЛЫШИШЬ] {} {} говорит: \"{}\"", emoji, display_name, speech)
            }
            Language::English => {
                format!("[YOU HEAR] {} {} says: \"{}\"", emoji, display_name, speech)
            }
        }
    }

    /// Delivery of an external observer's message to every participant
    pub fn observer_message(language: Language, message: &str) -> String {
        match language {
            Language::Russian => {
                format!("Наблюдатель (внешний голос) говорит всем: \"{}\"", message)
            }
            Language::English => {
                format!("The Observer (an outside voice) says to everyone: \"{}\"", message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::participant::ParticipantId;

    fn game(language: Language) -> GameState {
        GameState::new(Persona::default_roster(language), language).unwrap()
    }

    fn id(s: &str) -> ParticipantId {
        ParticipantId::new(s)
    }

    #[test]
    fn test_system_prompt_contains_persona_and_format() {
        let persona = &Persona::default_roster(Language::Russian)[1];
        let prompt = PromptTemplate::system_prompt(persona, Language::Russian, 5);
        assert!(prompt.contains("Имя: Ника"));
        assert!(prompt.contains("рыжеволосая девушка"));
        assert!(prompt.contains(&persona.secret_goal));
        assert!(prompt.contains("все 5 за одного"));
        assert!(prompt.contains("МЫСЛЬ:"));
        assert!(prompt.contains("РЕЧЬ:"));
        assert!(prompt.contains("КОМУ:"));
    }

    #[test]
    fn test_context_for_fresh_game() {
        let state = game(Language::Russian);
        let subject = state.participant(&id("p1")).unwrap();
        let prompt = PromptTemplate::context(&state, subject);

        assert!(prompt.starts_with("СИТУАЦИЯ (ход 0):"));
        assert!(prompt.contains("Ты ЕЩЁ НЕ представился"));
        assert!(prompt.contains("Никто ещё не представился"));
        assert!(prompt.contains("Кого ТЫ знаешь по имени: никого"));
        assert!(prompt.contains("- 🦊 ??? (рыжеволосая девушка): 0 голосов"));
        assert!(!prompt.contains("в тёмной маске"));
        assert!(prompt.contains("Только проснулись..."));
        assert!(prompt.ends_with("Что делаешь?"));
    }

    #[test]
    fn test_context_after_introduction() {
        let mut state = game(Language::Russian);
        state.check_introduction(&id("p2"), "Меня зовут Ника").unwrap();
        state.record_speech(&id("p2"), "Меня зовут Ника").unwrap();

        let subject = state.participant(&id("p1")).unwrap();
        let prompt = PromptTemplate::context(&state, subject);
        assert!(prompt.contains("- 🦊 Ника (представился): 0 голосов"));
        assert!(prompt.contains("Кто уже представился всем: 🦊 Ника"));
        assert!(prompt.contains("Кого ТЫ знаешь по имени: 🦊=Ника"));
        assert!(prompt.contains("⭐ 🦊 ПРЕДСТАВИЛСЯ"));
        assert!(prompt.contains("🦊 Ника: \"Меня зовут Ника\""));

        let nika = state.participant(&id("p2")).unwrap();
        let own = PromptTemplate::context(&state, nika);
        assert!(own.contains("Ты УЖЕ представился как Ника"));
    }

    #[test]
    fn test_context_shows_only_last_fifteen_events() {
        let mut state = game(Language::English);
        for i in 0..30 {
            state.record_observer(&format!("event-{:02}", i)).unwrap();
        }
        let subject = state.participant(&id("p1")).unwrap();
        let prompt = PromptTemplate::context(&state, subject);
        assert!(!prompt.contains("event-14"));
        assert!(prompt.contains("event-15"));
        assert!(prompt.contains("event-29"));
    }

    #[test]
    fn test_context_is_deterministic() {
        let mut state = game(Language::English);
        state.advance_turn();
        state.record_speech(&id("p3"), "Hello?").unwrap();
        let subject = state.participant(&id("p4")).unwrap();
        assert_eq!(
            PromptTemplate::context(&state, subject),
            PromptTemplate::context(&state, subject)
        );
    }

    #[test]
    fn test_ballot_labels_self_distinctly() {
        let mut state = game(Language::Russian);
        state.check_introduction(&id("p5"), "Я Иван").unwrap();
        let voter = state.participant(&id("p1")).unwrap();
        let ballot = PromptTemplate::ballot(&state, voter);
        assert_eq!(
            ballot,
            vec![
                "Алекс (ты сам)",
                "рыжеволосая девушка",
                "высокий парень в капюшоне",
                "хрупкая брюнетка",
                "Иван",
            ]
        );
        let prompt = PromptTemplate::vote_prompt(&state, voter);
        assert!(prompt.contains("Варианты: Алекс (ты сам), рыжеволосая девушка"));
    }

    #[test]
    fn test_hearing_message() {
        assert_eq!(
            PromptTemplate::hearing(Language::Russian, "🎭", "Алекс", "Привет"),
            "[СЛЫШИШЬ] 🎭 Алекс говорит: \"Привет\""
        );
        assert_eq!(
            PromptTemplate::hearing(Language::English, "🦊", "red-haired woman", "Hi"),
            "[YOU HEAR] 🦊 red-haired woman says: \"Hi\""
        );
    }
}
