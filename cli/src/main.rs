//! CLI entrypoint for The Room
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use room_application::{ConversationLogger, GameProgress, NoProgress, RoomOrchestrator};
use room_infrastructure::{
    AnthropicGateway, AnthropicSettings, ConfigLoader, FileConfig, JsonlConversationLogger,
};
use room_presentation::{
    AutoGame, Cli, GameRepl, OutputConfig, ProgressReporter, ReplConfig, SimpleProgress,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };
    apply_overrides(&mut config, &cli);
    config.validate().context("invalid configuration")?;

    let _guard = init_tracing(&cli, &config);
    info!("Starting The Room");

    let output = OutputConfig {
        format: config.output.effective_format(cli.output.map(Into::into)),
        color: config.output.color,
    };
    if !output.color {
        colored::control::set_override(false);
    }
    let repl_config = ReplConfig {
        show_progress: config.repl.show_progress,
        history_file: config.repl.history_file.clone(),
    };

    // === Dependency Injection ===
    let settings = AnthropicSettings::from_config(&config.agent)?;
    let gateway = Arc::new(AnthropicGateway::new(settings)?);
    info!(model = gateway.model(), "Agent backend ready");

    let progress: Arc<dyn GameProgress> = if cli.quiet || !repl_config.show_progress {
        Arc::new(NoProgress)
    } else if cli.interactive {
        Arc::new(SimpleProgress)
    } else {
        Arc::new(ProgressReporter::new())
    };

    let mut orchestrator =
        RoomOrchestrator::new(gateway, config.room_config())?.with_progress(progress);
    if let Some(logger) = conversation_logger(&config) {
        orchestrator = orchestrator.with_conversation_logger(logger);
    }
    let orchestrator = Arc::new(orchestrator);

    let result = if cli.interactive {
        GameRepl::new(Arc::clone(&orchestrator))
            .with_config(repl_config)
            .run()
            .await
            .map_err(anyhow::Error::from)
    } else {
        AutoGame::new(Arc::clone(&orchestrator))
            .with_format(output.format)
            .run()
            .await
            .map(|_| ())
            .map_err(anyhow::Error::from)
    };

    let closed = orchestrator.shutdown().await;
    info!(sessions = closed, "Room closed");

    result
}

/// CLI flags win over every configuration file
fn apply_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(turns) = cli.turns {
        config.game.turns = turns;
    }
    if let Some(language) = cli.language {
        config.game.language = language;
    }
    if let Some(model) = &cli.model {
        config.agent.model = model.clone();
    }
    if let Some(path) = &cli.transcript {
        config.logging.conversation_log = Some(path.clone());
    }
}

/// Install the tracing subscriber.
///
/// Interactive sessions log to a daily-rolling file so log lines do not
/// interleave with the prompt; the returned guard flushes it on drop.
fn init_tracing(cli: &Cli, config: &FileConfig) -> Option<WorkerGuard> {
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if cli.interactive
        && let Some(dir) = log_dir(config)
        && std::fs::create_dir_all(&dir).is_ok()
    {
        let appender = tracing_appender::rolling::daily(dir, "the-room.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .init();
        return Some(guard);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    None
}

fn log_dir(config: &FileConfig) -> Option<PathBuf> {
    config
        .logging
        .log_dir
        .clone()
        .or_else(|| dirs::data_dir().map(|p| p.join("the-room").join("logs")))
}

fn conversation_logger(config: &FileConfig) -> Option<Arc<dyn ConversationLogger>> {
    let path = config.logging.conversation_log.as_ref()?;
    let path = if path.is_dir() {
        JsonlConversationLogger::timestamped_path(path)
    } else {
        path.clone()
    };
    match JsonlConversationLogger::new(&path) {
        Some(logger) => {
            info!(path = %path.display(), "Writing game transcript");
            Some(Arc::new(logger))
        }
        None => {
            warn!(path = %path.display(), "Could not open transcript file");
            None
        }
    }
}
