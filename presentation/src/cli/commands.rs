//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for chatline
#[derive(Parser, Debug)]
#[command(name = "chatline")]
#[command(author, version, about = "Chat with a hosted language-model proxy from the terminal")]
#[command(long_about = r#"
chatline sends your messages, together with the whole conversation so far,
to a chat-completion proxy and prints the assistant's replies.

Without a MESSAGE it starts an interactive chat. With a MESSAGE it sends a
single turn, prints the reply and exits.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./chatline.toml     Project-level config
3. ~/.config/chatline/config.toml   Global config

Example:
  chatline
  chatline "Which moisturizer suits oily skin?"
  chatline --endpoint https://my-proxy.example.workers.dev/ --timeout 30
"#)]
pub struct Cli {
    /// Send a single message and exit (starts interactive chat if omitted)
    pub message: Option<String>,

    /// Chat-completion proxy URL
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Replace the assistant persona
    #[arg(long, value_name = "TEXT")]
    pub system_prompt: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the pending spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
