//! CLI entrypoint for chatline
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use chatline_application::{ConversationSession, SessionObserver, SubmitOutcome};
use chatline_infrastructure::{ConfigLoader, FileConfig, HttpChatGateway};
use chatline_presentation::{ChatRepl, Cli, ConsoleRenderer, PlainRenderer, ReplConfig};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // Logs go to stderr so they never interleave with the conversation.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&mut config, &cli);
    config.validate()?;

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting chatline against {}", config.endpoint.url);

    // === Dependency Injection ===
    let gateway = Arc::new(HttpChatGateway::new(config.endpoint_url()?)?);
    let mut session = ConversationSession::new(gateway, config.session_config())?;

    let show_progress = config.repl.show_progress && !cli.quiet;

    // Single message mode
    if let Some(message) = cli.message {
        let renderer: Box<dyn SessionObserver> = if show_progress {
            Box::new(ConsoleRenderer::new().with_echo_user(true))
        } else {
            Box::new(PlainRenderer)
        };

        return match session.submit(&message, renderer.as_ref()).await {
            Ok(SubmitOutcome::Replied(_)) => Ok(ExitCode::SUCCESS),
            Ok(SubmitOutcome::Ignored) => bail!("Message is empty"),
            // The renderer already printed the fallback message.
            Err(_) => Ok(ExitCode::FAILURE),
        };
    }

    let repl_config = ReplConfig {
        show_progress,
        history_file: config.repl.history_file.as_ref().map(PathBuf::from),
        welcome_message: config.chat.welcome_message.clone(),
    };
    let mut repl = ChatRepl::new(session, repl_config);
    repl.run().await?;

    info!(
        "Chat ended after {} turns",
        repl.session().transcript().turns().count()
    );

    Ok(ExitCode::SUCCESS)
}

/// Command-line flags take precedence over every configuration file.
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint.url = endpoint.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.endpoint.timeout_seconds = Some(timeout);
    }
    if let Some(prompt) = &cli.system_prompt {
        config.persona.system_prompt = prompt.clone();
    }
}
