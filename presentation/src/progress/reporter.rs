//! Progress reporting while agents think

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use room_application::{AgentCall, GameProgress};
use room_domain::ParticipantId;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

fn verb(call: AgentCall) -> &'static str {
    match call {
        AgentCall::Connect => "waking up",
        AgentCall::Action => "thinking",
        AgentCall::Delivery => "listening",
        AgentCall::Vote => "voting",
    }
}

/// One spinner per in-flight agent call
pub struct ProgressReporter {
    multi: MultiProgress,
    spinners: Mutex<HashMap<(ParticipantId, AgentCall), ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            spinners: Mutex::new(HashMap::new()),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl GameProgress for ProgressReporter {
    fn on_agent_start(&self, participant: &ParticipantId, label: &str, call: AgentCall) {
        let pb = self.multi.add(ProgressBar::new_spinner());
        pb.set_style(Self::spinner_style());
        pb.set_prefix(label.to_string());
        pb.set_message(format!("{}...", verb(call)));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut spinners) = self.spinners.lock()
            && let Some(previous) = spinners.insert((participant.clone(), call), pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_agent_complete(&self, participant: &ParticipantId, call: AgentCall, success: bool) {
        let pb = self
            .spinners
            .lock()
            .ok()
            .and_then(|mut spinners| spinners.remove(&(participant.clone(), call)));

        if let Some(pb) = pb {
            pb.finish_and_clear();
            if !success {
                let _ = self.multi.println(format!(
                    "{} {} failed while {}",
                    "x".red(),
                    participant,
                    verb(call)
                ));
            }
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl GameProgress for SimpleProgress {
    fn on_agent_start(&self, _participant: &ParticipantId, label: &str, call: AgentCall) {
        if matches!(call, AgentCall::Action | AgentCall::Vote) {
            println!("{} {} is {}", "->".cyan(), label.bold(), verb(call));
        }
    }

    fn on_agent_complete(&self, participant: &ParticipantId, call: AgentCall, success: bool) {
        if !success {
            println!("  {} {} failed while {}", "x".red(), participant, verb(call));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indicatif::ProgressDrawTarget;

    #[test]
    fn test_spinner_lifecycle() {
        let reporter = ProgressReporter::new();
        reporter.multi.set_draw_target(ProgressDrawTarget::hidden());
        let id = ParticipantId::new("p1");

        reporter.on_agent_start(&id, "🎭 masked stranger", AgentCall::Action);
        assert_eq!(reporter.spinners.lock().unwrap().len(), 1);

        reporter.on_agent_complete(&id, AgentCall::Action, true);
        assert!(reporter.spinners.lock().unwrap().is_empty());
    }

    #[test]
    fn test_complete_without_start_is_ignored() {
        let reporter = ProgressReporter::new();
        reporter.multi.set_draw_target(ProgressDrawTarget::hidden());
        reporter.on_agent_complete(&ParticipantId::new("p2"), AgentCall::Vote, false);
        assert!(reporter.spinners.lock().unwrap().is_empty());
    }
}
