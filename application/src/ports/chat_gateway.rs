//! Chat Gateway port
//!
//! Defines the interface for sending a transcript to a chat-completion
//! endpoint and getting the assistant's reply back.

use async_trait::async_trait;
use chatline_domain::Message;
use thiserror::Error;

/// Why a turn could not be completed.
///
/// Every variant is handled the same way by the session: the user sees the
/// fallback message and the transcript gets no assistant turn. The variants
/// only exist so logs say what went wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    #[error("Malformed response body: {0}")]
    MalformedBody(String),
}

/// Gateway for chat completion
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Send the whole transcript and return the assistant's reply text
    async fn complete(&self, messages: &[Message]) -> Result<String, TransportError>;
}
