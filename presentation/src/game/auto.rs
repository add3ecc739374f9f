//! Automatic game: every turn everyone acts, then everyone votes

use super::{collect_votes, play_round};
use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use room_application::{AgentGateway, GameError, GameSnapshot, RoomOrchestrator};
use room_domain::OutputFormat;
use std::sync::Arc;
use tracing::{info, warn};

pub struct AutoGame<G: AgentGateway + 'static> {
    orchestrator: Arc<RoomOrchestrator<G>>,
    format: OutputFormat,
}

impl<G: AgentGateway + 'static> AutoGame<G> {
    pub fn new(orchestrator: Arc<RoomOrchestrator<G>>) -> Self {
        Self {
            orchestrator,
            format: OutputFormat::default(),
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    fn transcript(&self, text: impl FnOnce() -> String) {
        if self.format == OutputFormat::Transcript {
            print!("{}", text());
        }
    }

    /// Play a whole game of `RoomConfig::turns` talking turns and return the
    /// final snapshot
    pub async fn run(&self) -> Result<GameSnapshot, GameError> {
        let turns = self.orchestrator.config().turns;
        let roster = self.orchestrator.initialize().await?;
        self.transcript(|| ConsoleFormatter::format_roster(&roster));
        info!(turns, "Starting automatic game");

        let start = self.orchestrator.snapshot().await;
        let mut status = room_application::TurnStatus {
            turn: start.turn,
            phase: start.phase,
        };

        for round in 0..turns {
            self.transcript(|| ConsoleFormatter::format_turn(&status));

            for (id, result) in play_round(&self.orchestrator).await {
                match result {
                    Ok(action) => self.transcript(|| ConsoleFormatter::format_action(&action)),
                    Err(GameError::SessionClosed) => return Err(GameError::SessionClosed),
                    Err(e) => {
                        warn!(participant = %id, "Action failed: {}", e);
                        self.transcript(|| format!("\n{} {}: {}\n", "x".red(), id, e));
                    }
                }
            }

            if round + 1 < turns {
                status = self.orchestrator.advance_turn().await;
            }
        }

        self.transcript(|| "\n".to_string() + &"Voting".cyan().bold().to_string() + "\n");
        for (id, result) in collect_votes(&self.orchestrator).await {
            match result {
                Ok(vote) => {
                    let snapshot = self.orchestrator.snapshot().await;
                    self.transcript(|| {
                        ConsoleFormatter::format_vote(&vote, snapshot.participant(&id))
                    });
                }
                Err(GameError::SessionClosed) => return Err(GameError::SessionClosed),
                Err(e) => {
                    warn!(participant = %id, "Vote failed: {}", e);
                    self.transcript(|| format!("  {} {}: {}\n", "x".red(), id, e));
                }
            }
        }

        let outcome = self.orchestrator.resolve().await;
        let snapshot = self.orchestrator.snapshot().await;
        match self.format {
            OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&snapshot)),
            OutputFormat::Transcript | OutputFormat::Summary => {
                print!("{}", ConsoleFormatter::format_outcome(&outcome, &snapshot))
            }
        }
        Ok(snapshot)
    }
}
