//! Wire types for the chat-completion proxy.
//!
//! Request: `{"messages": [{"role": "...", "content": "..."}, ...]}`
//!
//! Response: `{"choices": [{"message": {"content": "..."}}, ...]}`. Only the
//! first choice's content is used; any other field is ignored.

use chatline_application::TransportError;
use chatline_domain::Message;
use serde::{Deserialize, Serialize};

/// Request body
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub messages: &'a [Message],
}

/// Success response body
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: String,
}

impl ChatCompletionResponse {
    /// Content of the first choice
    pub fn into_reply(self) -> Result<String, TransportError> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| TransportError::MalformedBody("response has no choices".to_string()))
    }
}

/// Parse a success body into the assistant's reply text
pub fn parse_reply(body: &str) -> Result<String, TransportError> {
    let response: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| TransportError::MalformedBody(e.to_string()))?;
    response.into_reply()
}
