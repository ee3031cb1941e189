//! Domain layer for chatline
//!
//! This crate contains the conversation entities and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Message**: a role-tagged turn (system, user or assistant)
//! - **Transcript**: the ordered, append-only list of messages that is sent
//!   to the remote model as context on every turn
//! - **Persona**: the system prompt that opens every transcript

pub mod core;
pub mod prompt;
pub mod session;
pub mod util;

// Re-export commonly used types
pub use core::{error::DomainError, input::UserInput};
pub use prompt::persona::{
    DEFAULT_SYSTEM_PROMPT, FALLBACK_MESSAGE, PENDING_MESSAGE, WELCOME_MESSAGE,
};
pub use session::{
    entities::{Message, Role},
    transcript::Transcript,
};
