//! Interactive chat module
//!
//! Provides a line-editing interactive chat interface.

mod repl;

pub use repl::{ChatRepl, ReplCommand};
