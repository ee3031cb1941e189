//! Core domain concepts shared across the crate.
//!
//! - [`input::UserInput`] — validated, trimmed user text
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod input;
