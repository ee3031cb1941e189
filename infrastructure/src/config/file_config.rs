//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

use chatline_application::SessionConfig;
use chatline_domain::{DEFAULT_SYSTEM_PROMPT, FALLBACK_MESSAGE, WELCOME_MESSAGE};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Local `wrangler dev` address of the chat-completion proxy worker.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8787/";

/// Request timeout used when `timeout_seconds` is not set.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("endpoint url cannot be empty")]
    EmptyEndpoint,

    #[error("invalid endpoint url '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("system_prompt cannot be empty")]
    EmptySystemPrompt,
}

/// Raw endpoint configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEndpointConfig {
    /// Chat-completion proxy URL
    pub url: String,
    /// Timeout in seconds for each request
    pub timeout_seconds: Option<u64>,
}

impl Default for FileEndpointConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: None,
        }
    }
}

/// Raw persona configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePersonaConfig {
    /// System prompt that opens every conversation
    pub system_prompt: String,
}

impl Default for FilePersonaConfig {
    fn default() -> Self {
        Self {
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }
}

/// Raw chat text configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Greeting printed before the first turn
    pub welcome_message: String,
    /// Shown instead of a reply when a turn fails
    pub fallback_message: String,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            welcome_message: WELCOME_MESSAGE.to_string(),
            fallback_message: FALLBACK_MESSAGE.to_string(),
        }
    }
}

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show the pending spinner
    pub show_progress: bool,
    /// Path to line-editor history file
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Endpoint settings
    pub endpoint: FileEndpointConfig,
    /// Persona settings
    pub persona: FilePersonaConfig,
    /// Chat text settings
    pub chat: FileChatConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if let Some(0) = self.endpoint.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        self.endpoint_url()?;

        if self.persona.system_prompt.trim().is_empty() {
            return Err(ConfigValidationError::EmptySystemPrompt);
        }

        Ok(())
    }

    /// Parse the endpoint URL, accepting only http(s)
    pub fn endpoint_url(&self) -> Result<Url, ConfigValidationError> {
        let raw = self.endpoint.url.trim();
        if raw.is_empty() {
            return Err(ConfigValidationError::EmptyEndpoint);
        }

        let url = Url::parse(raw).map_err(|e| ConfigValidationError::InvalidEndpoint {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(ConfigValidationError::InvalidEndpoint {
                url: raw.to_string(),
                reason: format!("unsupported scheme '{}'", scheme),
            }),
        }
    }

    /// Effective request timeout
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.endpoint
                .timeout_seconds
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        )
    }

    /// Convert to the application-layer session configuration
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::default()
            .with_system_prompt(self.persona.system_prompt.clone())
            .with_fallback_message(self.chat.fallback_message.clone())
            .with_request_timeout(Some(self.request_timeout()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[endpoint]
url = "https://chat-proxy.example.workers.dev/"
timeout_seconds = 30

[persona]
system_prompt = "You only talk about haircare."

[chat]
welcome_message = "Hi there!"
fallback_message = "Connection trouble."

[repl]
show_progress = false
history_file = "/tmp/chatline-history.txt"

[output]
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.endpoint.url, "https://chat-proxy.example.workers.dev/");
        assert_eq!(config.endpoint.timeout_seconds, Some(30));
        assert_eq!(config.persona.system_prompt, "You only talk about haircare.");
        assert_eq!(config.chat.welcome_message, "Hi there!");
        assert_eq!(config.chat.fallback_message, "Connection trouble.");
        assert!(!config.repl.show_progress);
        assert_eq!(
            config.repl.history_file.as_deref(),
            Some("/tmp/chatline-history.txt")
        );
        assert!(!config.output.color);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[endpoint]
url = "https://chat-proxy.example.workers.dev/"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.endpoint.timeout_seconds, None);
        // Defaults should apply
        assert_eq!(config.persona.system_prompt, DEFAULT_SYSTEM_PROMPT);
        assert_eq!(config.chat.fallback_message, FALLBACK_MESSAGE);
        assert!(config.repl.show_progress);
        assert!(config.output.color);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.endpoint.url, DEFAULT_ENDPOINT);
        assert_eq!(config.chat.welcome_message, WELCOME_MESSAGE);
        assert_eq!(config.request_timeout(), Duration::from_secs(60));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let toml_str = r#"
[endpoint]
timeout_seconds = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidTimeout)
        ));
    }

    #[test]
    fn test_validate_endpoint() {
        let mut config = FileConfig::default();

        config.endpoint.url = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::EmptyEndpoint)
        ));

        config.endpoint.url = "not a url".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidEndpoint { .. })
        ));

        config.endpoint.url = "ftp://example.com/".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn test_validate_empty_system_prompt() {
        let mut config = FileConfig::default();
        config.persona.system_prompt = "\n".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::EmptySystemPrompt)
        ));
    }

    #[test]
    fn test_session_config_conversion() {
        let mut config = FileConfig::default();
        config.persona.system_prompt = "Skincare only.".to_string();
        config.chat.fallback_message = "Offline.".to_string();
        config.endpoint.timeout_seconds = Some(15);

        let session = config.session_config();
        assert_eq!(session.system_prompt, "Skincare only.");
        assert_eq!(session.fallback_message, "Offline.");
        assert_eq!(session.request_timeout, Some(Duration::from_secs(15)));
    }
}
