//! Prompt domain
//!
//! The assistant persona and the fixed strings shown around a conversation.

pub mod persona;
