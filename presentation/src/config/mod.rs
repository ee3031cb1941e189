//! Presentation-level configuration
//!
//! Configuration for the interactive chat.

use chatline_domain::WELCOME_MESSAGE;
use std::path::PathBuf;

/// REPL configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Show the pending spinner
    pub show_progress: bool,
    /// Line-editor history file; `None` uses the platform data dir
    pub history_file: Option<PathBuf>,
    /// Greeting printed when the chat starts
    pub welcome_message: String,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
            welcome_message: WELCOME_MESSAGE.to_string(),
        }
    }
}

impl ReplConfig {
    /// History file to use: the configured one, else `<data dir>/chatline/history.txt`
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("chatline").join("history.txt")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_history_path_wins() {
        let config = ReplConfig {
            history_file: Some(PathBuf::from("/tmp/chat-history.txt")),
            ..ReplConfig::default()
        };
        assert_eq!(
            config.history_path(),
            Some(PathBuf::from("/tmp/chat-history.txt"))
        );
    }

    #[test]
    fn test_default_history_path() {
        if let Some(path) = ReplConfig::default().history_path() {
            assert!(path.ends_with("chatline/history.txt"));
        }
    }
}
