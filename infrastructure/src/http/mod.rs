//! HTTP chat-completion adapter
//!
//! Implements `ChatGateway` by POSTing the transcript to a hosted
//! chat-completion proxy.

pub mod gateway;
pub mod protocol;
