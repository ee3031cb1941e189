//! Conversation use case.
//!
//! [`ConversationSession`] owns the transcript and runs one turn per
//! [`submit`](ConversationSession::submit):
//!
//! 1. Trim the input; empty input is ignored without side effects
//! 2. Append the user turn
//! 3. Send the whole transcript through the [`ChatGateway`]
//! 4. Append the assistant reply, or report the fallback on failure
//!
//! Turn state is `idle → pending → (success | failure) → idle`. Because
//! `submit` takes `&mut self`, a session can only have one turn in flight;
//! see [`SharedSession`](super::shared_session::SharedSession) for callers
//! that share a session.

use crate::config::SessionConfig;
use crate::ports::chat_gateway::{ChatGateway, TransportError};
use crate::ports::session_observer::SessionObserver;
use chatline_domain::util::log_preview;
use chatline_domain::{DomainError, Transcript, UserInput};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors returned by a submit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("A message is already being sent")]
    Busy,
}

/// What a successful submit did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The input was empty or whitespace; nothing happened.
    Ignored,
    /// The assistant replied with this text.
    Replied(String),
}

impl SubmitOutcome {
    pub fn reply(&self) -> Option<&str> {
        match self {
            SubmitOutcome::Ignored => None,
            SubmitOutcome::Replied(text) => Some(text),
        }
    }
}

/// Fires `on_pending` on creation and `on_pending_cleared` on drop, so the
/// pending indicator is cleared exactly once even if the submit future is
/// dropped while the request is in flight.
struct PendingGuard<'a> {
    observer: &'a dyn SessionObserver,
}

impl<'a> PendingGuard<'a> {
    fn start(observer: &'a dyn SessionObserver) -> Self {
        observer.on_pending();
        Self { observer }
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.observer.on_pending_cleared();
    }
}

/// A single chat conversation with the remote model.
pub struct ConversationSession {
    gateway: Arc<dyn ChatGateway>,
    transcript: Transcript,
    fallback_message: String,
    request_timeout: Option<Duration>,
}

impl ConversationSession {
    /// Start a session whose transcript holds only the configured persona.
    pub fn new(gateway: Arc<dyn ChatGateway>, config: SessionConfig) -> Result<Self, DomainError> {
        let transcript = Transcript::new(config.system_prompt)?;
        Ok(Self {
            gateway,
            transcript,
            fallback_message: config.fallback_message,
            request_timeout: config.request_timeout,
        })
    }

    /// Override the text shown when a turn fails.
    pub fn with_fallback_message(mut self, message: impl Into<String>) -> Self {
        self.fallback_message = message.into();
        self
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn fallback_message(&self) -> &str {
        &self.fallback_message
    }

    /// Run one conversational turn.
    ///
    /// On failure the user turn stays in the transcript, no assistant turn
    /// is added, and the observer receives the fallback message rather than
    /// the error itself.
    pub async fn submit(
        &mut self,
        text: &str,
        observer: &dyn SessionObserver,
    ) -> Result<SubmitOutcome, SubmitError> {
        let Some(input) = UserInput::try_new(text) else {
            debug!("Ignoring empty input");
            return Ok(SubmitOutcome::Ignored);
        };

        observer.on_user_message(input.content());
        self.transcript.push_user(&input);

        info!(
            "Sending turn {} ({} messages): {}",
            self.transcript.turns().count(),
            self.transcript.len(),
            log_preview(input.content(), 80)
        );

        let result = {
            let _pending = PendingGuard::start(observer);
            self.request().await
        };

        match result {
            Ok(reply) => {
                debug!("Received reply: {}", log_preview(&reply, 80));
                self.transcript.push_assistant(reply.clone());
                observer.on_assistant_message(&reply);
                Ok(SubmitOutcome::Replied(reply))
            }
            Err(e) => {
                warn!("Chat request failed: {}", e);
                observer.on_error(&self.fallback_message);
                Err(SubmitError::Transport(e))
            }
        }
    }

    async fn request(&self) -> Result<String, TransportError> {
        let call = self.gateway.complete(self.transcript.messages());
        match self.request_timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| TransportError::Timeout)?,
            None => call.await,
        }
    }
}
