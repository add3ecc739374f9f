//! REPL (Read-Eval-Print Loop) for driving a game by hand

use super::command::ReplCommand;
use crate::ConsoleFormatter;
use crate::config::ReplConfig;
use crate::game::{collect_votes, play_round};
use colored::Colorize;
use room_application::{AgentGateway, GameError, RoomOrchestrator};
use room_domain::{Language, ParticipantId};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;

/// Interactive game REPL
pub struct GameRepl<G: AgentGateway + 'static> {
    orchestrator: Arc<RoomOrchestrator<G>>,
    config: ReplConfig,
}

impl<G: AgentGateway + 'static> GameRepl<G> {
    pub fn new(orchestrator: Arc<RoomOrchestrator<G>>) -> Self {
        Self {
            orchestrator,
            config: ReplConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    fn language(&self) -> Language {
        self.orchestrator.config().language
    }

    /// Run the interactive REPL until `/quit` or EOF
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.config.history_path();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        match self.orchestrator.initialize().await {
            Ok(roster) => print!("{}", ConsoleFormatter::format_roster(&roster)),
            Err(e) => {
                eprintln!("{} {}", "Error:".red(), e);
                return Ok(());
            }
        }
        self.print_help();

        loop {
            match rl.readline("🎭 > ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line);

                    match ReplCommand::parse(line) {
                        Ok(ReplCommand::Quit) => {
                            println!("Bye!");
                            break;
                        }
                        Ok(command) => self.execute(command).await,
                        Err(message) => {
                            println!("{}", message);
                            println!("Type /help for available commands");
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_help(&self) {
        println!();
        println!("Commands:");
        println!("  /act <id>, /a     - Let one participant act");
        println!("  /round, /r        - Everyone acts once, in seat order");
        println!("  /next, /n         - Advance to the next turn");
        println!("  /vote <id>, /v    - Ask one participant for their vote");
        println!("  /vote-all         - Ask everyone who has not voted yet");
        println!("  /resolve          - Tally the votes and end the game");
        println!("  /state, /s        - Show the room");
        println!("  /history <id>     - Show a participant's dossier");
        println!("  /say <text>       - Speak to everyone as the Observer");
        println!("  /help, /h, /?     - Show this help");
        println!("  /quit, /exit, /q  - Leave the room");
        println!();
        println!("Plain text without a slash is sent as an Observer message.");
        println!();
    }

    async fn execute(&self, command: ReplCommand) {
        let orchestrator = &self.orchestrator;
        match command {
            ReplCommand::Act(id) => match orchestrator.act(&id).await {
                Ok(action) => print!("{}", ConsoleFormatter::format_action(&action)),
                Err(e) => report(&id, &e),
            },
            ReplCommand::Round => {
                for (id, result) in play_round(orchestrator).await {
                    match result {
                        Ok(action) => print!("{}", ConsoleFormatter::format_action(&action)),
                        Err(e) => report(&id, &e),
                    }
                }
            }
            ReplCommand::Next => {
                let status = orchestrator.advance_turn().await;
                print!("{}", ConsoleFormatter::format_turn(&status));
            }
            ReplCommand::Vote(id) => self.vote(&id).await,
            ReplCommand::VoteAll => {
                for (id, result) in collect_votes(orchestrator).await {
                    match result {
                        Ok(vote) => {
                            let snapshot = orchestrator.snapshot().await;
                            print!(
                                "{}",
                                ConsoleFormatter::format_vote(&vote, snapshot.participant(&id))
                            );
                        }
                        Err(e) => report(&id, &e),
                    }
                }
            }
            ReplCommand::Resolve => {
                let outcome = orchestrator.resolve().await;
                let snapshot = orchestrator.snapshot().await;
                print!("{}", ConsoleFormatter::format_outcome(&outcome, &snapshot));
            }
            ReplCommand::State => {
                let snapshot = orchestrator.snapshot().await;
                print!("{}", ConsoleFormatter::format_snapshot(&snapshot));
            }
            ReplCommand::History(id) => match orchestrator.participant_history(&id).await {
                Ok(history) => print!(
                    "{}",
                    ConsoleFormatter::format_history(&history, self.language())
                ),
                Err(e) => report(&id, &e),
            },
            ReplCommand::Say(text) => match orchestrator.observer_message(&text).await {
                Ok(delivery) => print!("{}", ConsoleFormatter::format_broadcast(&delivery)),
                Err(e) => eprintln!("{} {}", "Error:".red(), e),
            },
            ReplCommand::Help => self.print_help(),
            ReplCommand::Quit => {}
        }
    }

    async fn vote(&self, id: &ParticipantId) {
        match self.orchestrator.cast_vote(id).await {
            Ok(vote) => {
                let snapshot = self.orchestrator.snapshot().await;
                print!(
                    "{}",
                    ConsoleFormatter::format_vote(&vote, snapshot.participant(id))
                );
            }
            Err(e) => report(id, &e),
        }
    }
}

fn report(id: &ParticipantId, error: &GameError) {
    if error.is_not_found() {
        eprintln!("{} no participant '{}'", "Error:".red(), id);
    } else {
        eprintln!("{} {}: {}", "Error:".red(), id, error);
    }
}
