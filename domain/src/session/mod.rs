//! Conversation session domain.
//!
//! - [`entities::Message`] — a single role-tagged turn
//! - [`transcript::Transcript`] — the ordered history sent as model context

pub mod entities;
pub mod transcript;
