//! Application-level configuration.
//!
//! [`SessionConfig`] holds what a [`ConversationSession`](crate::ConversationSession)
//! needs to start: the persona, the fallback text and the request timeout.

use chatline_domain::{DEFAULT_SYSTEM_PROMPT, FALLBACK_MESSAGE};
use std::time::Duration;

/// Default limit on how long a single turn may wait for the endpoint.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Conversation session configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// System prompt that opens the transcript.
    pub system_prompt: String,
    /// Text shown to the user when a turn fails.
    pub fallback_message: String,
    /// Maximum time to wait for a reply. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            fallback_message: FALLBACK_MESSAGE.to_string(),
            request_timeout: Some(DEFAULT_REQUEST_TIMEOUT),
        }
    }
}

impl SessionConfig {
    // ==================== Builder Methods ====================

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn with_fallback_message(mut self, message: impl Into<String>) -> Self {
        self.fallback_message = message.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the timeout from seconds; `None` disables it.
    pub fn with_timeout_seconds(self, seconds: Option<u64>) -> Self {
        self.with_request_timeout(seconds.map(Duration::from_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.system_prompt, DEFAULT_SYSTEM_PROMPT);
        assert_eq!(config.fallback_message, FALLBACK_MESSAGE);
        assert_eq!(config.request_timeout, Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_timeout_seconds() {
        let config = SessionConfig::default().with_timeout_seconds(Some(5));
        assert_eq!(config.request_timeout, Some(Duration::from_secs(5)));

        let config = config.with_timeout_seconds(None);
        assert_eq!(config.request_timeout, None);
    }
}
