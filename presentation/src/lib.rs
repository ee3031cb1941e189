//! Presentation layer for chatline
//!
//! This crate contains CLI definitions, the console renderers that observe
//! a conversation session, and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::Cli;
pub use config::ReplConfig;
pub use output::console::{ConsoleFormatter, ConsoleRenderer};
pub use output::plain::PlainRenderer;
