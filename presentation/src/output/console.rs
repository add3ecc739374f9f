//! Console output formatter for games in The Room

use colored::{ColoredString, Colorize};
use room_application::{
    ActionOutcome, BroadcastReport, GameSnapshot, ParticipantHistory, ParticipantView,
    TurnStatus, VoteOutcome,
};
use room_domain::core::string::preview;
use room_domain::{GameOutcome, Language};
use serde::Serialize;

/// Formats orchestrator outputs for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Roster as seated at initialization
    pub fn format_roster(participants: &[ParticipantView]) -> String {
        let mut output = Self::header("The Room");
        output.push('\n');
        output.push_str(&format!(
            "{} strangers wake up. Nobody remembers their name.\n\n",
            participants.len()
        ));
        for p in participants {
            output.push_str(&format!(
                "  {} {} {}\n",
                p.id.as_str().dimmed(),
                p.emoji,
                Self::paint(&p.display_name, &p.color)
            ));
        }
        output
    }

    pub fn format_turn(status: &TurnStatus) -> String {
        Self::section_header(&format!("Turn {} · {}", status.turn, status.phase))
    }

    /// One participant's action: thought, speech and who heard it
    pub fn format_action(action: &ActionOutcome) -> String {
        let mut output = format!(
            "\n{} {}\n",
            action.emoji,
            Self::paint(&action.display_name, &action.color).bold()
        );

        if !action.thought.is_empty() {
            output.push_str(&format!("   {} {}\n", "thinks:".dimmed(), action.thought.italic()));
        }

        if action.speech.is_empty() {
            output.push_str(&format!("   {}\n", "(stays silent)".dimmed()));
        } else {
            output.push_str(&format!(
                "   {} \"{}\" {} {}\n",
                "says:".cyan(),
                action.speech,
                "->".dimmed(),
                action.target
            ));
        }

        if action.newly_introduced {
            output.push_str(&format!(
                "   {} everyone now knows this is {}\n",
                "*".yellow().bold(),
                action.display_name.yellow().bold()
            ));
        }

        if let Some(report) = &action.broadcast {
            output.push_str(&format!("   {}\n", Self::format_broadcast(report)));
        }
        output
    }

    pub fn format_broadcast(report: &BroadcastReport) -> String {
        let heard = format!("heard by {}", report.delivered.len()).dimmed();
        if report.failed.is_empty() {
            return heard.to_string();
        }
        let failed: Vec<&str> = report.failed.iter().map(|id| id.as_str()).collect();
        format!("{}, {} {}", heard, "not delivered to".red(), failed.join(", "))
    }

    pub fn format_vote(vote: &VoteOutcome, voter: Option<&ParticipantView>) -> String {
        let voter_label = voter
            .map(|v| format!("{} {}", v.emoji, Self::paint(&v.real_name, &v.color)))
            .unwrap_or_else(|| vote.voter.to_string());
        let mark = if vote.is_self_vote() {
            "(self)".dimmed()
        } else {
            "".normal()
        };
        format!(
            "  {} {} {} {}  {}\n",
            voter_label,
            "votes for".dimmed(),
            vote.candidate_label.bold(),
            mark,
            format!("reply: {}", preview(&vote.reply, 40)).dimmed()
        )
    }

    pub fn format_outcome(outcome: &GameOutcome, snapshot: &GameSnapshot) -> String {
        let mut output = Self::section_header("Outcome");
        for p in &snapshot.participants {
            output.push_str(&format!(
                "  {} {:<12} {} vote(s)\n",
                p.emoji,
                p.real_name,
                p.votes
            ));
        }
        output.push('\n');

        match outcome {
            GameOutcome::Winner {
                real_name, votes, ..
            } => output.push_str(&format!(
                "{} {} leaves the room with everything ({} votes).\n",
                "WINNER:".green().bold(),
                real_name.green().bold(),
                votes
            )),
            GameOutcome::NoWinner => output.push_str(&format!(
                "{} The vote was not unanimous. Everyone loses everything.\n",
                "NO WINNER.".red().bold()
            )),
        }
        output.push_str(&Self::footer());
        output
    }

    /// Current standings plus the recent event log
    pub fn format_snapshot(snapshot: &GameSnapshot) -> String {
        let mut output = Self::section_header(&format!(
            "Turn {} · {} · {}",
            snapshot.turn, snapshot.phase, snapshot.language
        ));

        for p in &snapshot.participants {
            let known = if p.introduced {
                p.real_name.green().to_string()
            } else {
                format!("{} ({})", "???".dimmed(), p.appearance)
            };
            let voted = p
                .voted_for
                .as_ref()
                .map(|id| format!(" -> {}", id))
                .unwrap_or_default();
            let link = if p.connected { "online" } else { "offline" };
            output.push_str(&format!(
                "  {} {} {}  votes: {}{}  [{}]\n",
                p.id.as_str().dimmed(),
                p.emoji,
                known,
                p.votes,
                voted,
                link.dimmed()
            ));
        }

        output.push_str(&format!("\n{}\n", "Recent events:".cyan().bold()));
        if snapshot.recent_events.is_empty() {
            output.push_str(&format!("  {}\n", "(nothing yet)".dimmed()));
        }
        for event in &snapshot.recent_events {
            output.push_str(&format!("  {}\n", event.render(snapshot.language)));
        }
        output
    }

    pub fn format_history(history: &ParticipantHistory, language: Language) -> String {
        let mut output = Self::section_header(&format!(
            "{} {} ({})",
            history.emoji, history.real_name, history.participant
        ));
        output.push_str(&format!("  {} {}\n", "Looks like:".cyan(), history.appearance));
        output.push_str(&format!("  {} {}\n", "Personality:".cyan(), history.personality));
        output.push_str(&format!("  {} {}\n", "Secret goal:".cyan(), history.secret_goal));
        output.push_str(&format!(
            "  {} {}  {} {}\n",
            "Introduced:".cyan(),
            history.introduced,
            "Votes:".cyan(),
            history.votes
        ));

        if !history.knows.is_empty() {
            let knows: Vec<String> = history
                .knows
                .iter()
                .map(|(id, name)| format!("{}={}", id, name))
                .collect();
            output.push_str(&format!("  {} {}\n", "Knows:".cyan(), knows.join(", ")));
        }

        output.push_str(&format!("\n{}\n", "Said:".cyan().bold()));
        for event in &history.history {
            output.push_str(&format!("  {}\n", event.render(language)));
        }
        output
    }

    /// Format as JSON
    pub fn format_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Color `text` with a `#rrggbb` persona color; unparsable colors leave it plain
    pub fn paint(text: &str, hex: &str) -> ColoredString {
        match parse_hex(hex) {
            Some((r, g, b)) => text.truecolor(r, g, b),
            None => text.normal(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
