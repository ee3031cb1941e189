//! Application layer for chatline
//!
//! This crate contains the conversation use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SessionConfig;
pub use ports::{
    chat_gateway::{ChatGateway, TransportError},
    session_observer::{NoSessionObserver, SessionEvent, SessionEventSender, SessionObserver},
};
pub use use_cases::{
    converse::{ConversationSession, SubmitError, SubmitOutcome},
    shared_session::SharedSession,
};
