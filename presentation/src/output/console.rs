//! Console renderer for conversation sessions

use chatline_application::SessionObserver;
use chatline_domain::{PENDING_MESSAGE, Role, Transcript};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Renders a session to the terminal with a spinner while a request is pending
pub struct ConsoleRenderer {
    spinner: Mutex<Option<ProgressBar>>,
    echo_user: bool,
}

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
            echo_user: false,
        }
    }

    /// Print the user's message too (the REPL already shows what was typed)
    pub fn with_echo_user(mut self, echo: bool) -> Self {
        self.echo_user = echo;
        self
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Whether the pending spinner is currently shown
    pub fn is_pending(&self) -> bool {
        self.spinner
            .lock()
            .map(|spinner| spinner.is_some())
            .unwrap_or(false)
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionObserver for ConsoleRenderer {
    fn on_user_message(&self, text: &str) {
        if self.echo_user {
            println!("{} {}", ConsoleFormatter::label(Role::User), text);
        }
    }

    fn on_assistant_message(&self, text: &str) {
        println!("{} {}", ConsoleFormatter::label(Role::Assistant), text);
        println!();
    }

    fn on_pending(&self) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(PENDING_MESSAGE);
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut spinner) = self.spinner.lock() {
            // A leftover spinner would never be cleared otherwise.
            if let Some(old) = spinner.replace(pb) {
                old.finish_and_clear();
            }
        }
    }

    fn on_pending_cleared(&self) {
        if let Ok(mut spinner) = self.spinner.lock()
            && let Some(pb) = spinner.take()
        {
            pb.finish_and_clear();
        }
    }

    fn on_error(&self, fallback: &str) {
        println!(
            "{} {}",
            ConsoleFormatter::label(Role::Assistant),
            fallback.yellow()
        );
        println!();
    }
}

/// Formats transcripts for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Colored speaker label for a role
    pub fn label(role: Role) -> String {
        match role {
            Role::System => "system:".dimmed().to_string(),
            Role::User => "you:".cyan().bold().to_string(),
            Role::Assistant => "assistant:".magenta().bold().to_string(),
        }
    }

    /// Format the user and assistant turns of a transcript, one per line
    pub fn format_transcript(transcript: &Transcript) -> String {
        let mut output = String::new();
        for message in transcript.turns() {
            output.push_str(&format!(
                "{} {}\n",
                Self::label(message.role()),
                message.content()
            ));
        }
        if output.is_empty() {
            output.push_str(&format!("{}\n", "(no messages yet)".dimmed()));
        }
        output
    }
}
