//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::config::ReplConfig;
use crate::output::console::{ConsoleFormatter, ConsoleRenderer};
use crate::output::plain::PlainRenderer;
use chatline_application::{ConversationSession, SessionObserver, SubmitError};
use colored::Colorize;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::io;
use tracing::{debug, warn};

const HISTORY_CAPACITY: usize = 1000;

/// Slash commands understood by the REPL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    History,
    Quit,
    Unknown,
}

impl ReplCommand {
    /// Parse a line starting with `/`
    pub fn parse(line: &str) -> Self {
        match line.split_whitespace().next().unwrap_or("") {
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/history" => ReplCommand::History,
            _ => ReplCommand::Unknown,
        }
    }
}

/// Interactive chat REPL
pub struct ChatRepl {
    session: ConversationSession,
    renderer: Box<dyn SessionObserver>,
    config: ReplConfig,
}

impl ChatRepl {
    /// Create a new ChatRepl around a session
    pub fn new(session: ConversationSession, config: ReplConfig) -> Self {
        let renderer: Box<dyn SessionObserver> = if config.show_progress {
            Box::new(ConsoleRenderer::new())
        } else {
            Box::new(PlainRenderer)
        };
        Self {
            session,
            renderer,
            config,
        }
    }

    pub fn session(&self) -> &ConversationSession {
        &self.session
    }

    fn line_editor(&self) -> Reedline {
        let editor = Reedline::create();

        let Some(path) = self.config.history_path() else {
            return editor;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                warn!("Could not open history file {}: {}", path.display(), e);
                editor
            }
        }
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> io::Result<()> {
        let mut line_editor = self.line_editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("you".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match line_editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    self.process_message(line).await;
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", self.config.welcome_message);
        println!();
        println!("{}", "Type /help for commands, /quit to exit.".dimmed());
        println!();
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  /help, /h, /?    - Show this help");
        println!("  /history         - Show the conversation so far");
        println!("  /quit, /exit, /q - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, line: &str) -> bool {
        match ReplCommand::parse(line) {
            ReplCommand::Quit => {
                println!("Bye!");
                true
            }
            ReplCommand::Help => {
                Self::print_help();
                false
            }
            ReplCommand::History => {
                println!();
                print!(
                    "{}",
                    ConsoleFormatter::format_transcript(self.session.transcript())
                );
                println!();
                false
            }
            ReplCommand::Unknown => {
                println!("Unknown command: {}", line);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_message(&mut self, text: &str) {
        // The renderer has already shown the reply or the fallback; the
        // error only needs to reach the logs.
        match self.session.submit(text, self.renderer.as_ref()).await {
            Ok(_) => {}
            Err(SubmitError::Transport(e)) => debug!("Turn failed: {}", e),
            Err(SubmitError::Busy) => warn!("Submit rejected while another request is pending"),
        }
    }
}
