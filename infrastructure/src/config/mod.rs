//! Configuration file loading for chatline
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./chatline.toml` or `./.chatline.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/chatline/config.toml`
//! 4. Fallback: `~/.config/chatline/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECONDS, FileChatConfig, FileConfig,
    FileEndpointConfig, FileOutputConfig, FilePersonaConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
