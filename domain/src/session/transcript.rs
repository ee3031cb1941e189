//! Conversation transcript

use super::entities::{Message, Role};
use crate::core::error::DomainError;
use crate::core::input::UserInput;
use serde::Serialize;

/// Ordered, append-only conversation history (Entity)
///
/// Always starts with exactly one system message. Messages are only ever
/// appended; nothing is reordered, edited or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Start a transcript with the given persona as its system message
    pub fn new(system_prompt: impl Into<String>) -> Result<Self, DomainError> {
        let system_prompt = system_prompt.into();
        if system_prompt.trim().is_empty() {
            return Err(DomainError::EmptySystemPrompt);
        }
        Ok(Self {
            messages: vec![Message::system(system_prompt)],
        })
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// A transcript always holds its system message, so this is never true.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn system_prompt(&self) -> &str {
        self.messages[0].content()
    }

    /// User and assistant turns, without the system message
    pub fn turns(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(|m| m.role() != Role::System)
    }

    pub fn push_user(&mut self, input: &UserInput) {
        self.messages.push(Message::user(input.content()));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(Message::assistant(content));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_with_system_message() {
        let transcript = Transcript::new("You are a beauty advisor.").unwrap();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.messages()[0].role(), Role::System);
        assert_eq!(transcript.system_prompt(), "You are a beauty advisor.");
        assert_eq!(transcript.turns().count(), 0);
    }

    #[test]
    fn test_empty_system_prompt_rejected() {
        assert_eq!(
            Transcript::new("  ").unwrap_err(),
            DomainError::EmptySystemPrompt
        );
    }

    #[test]
    fn test_appends_keep_order() {
        let mut transcript = Transcript::new("persona").unwrap();
        transcript.push_user(&UserInput::try_new("Hi").unwrap());
        transcript.push_assistant("Hello!");
        transcript.push_user(&UserInput::try_new("My name is Ada").unwrap());

        let roles: Vec<Role> = transcript.messages().iter().map(|m| m.role()).collect();
        assert_eq!(
            roles,
            vec![Role::System, Role::User, Role::Assistant, Role::User]
        );
        assert_eq!(transcript.last().unwrap().content(), "My name is Ada");
        assert_eq!(transcript.turns().count(), 3);
    }

    #[test]
    fn test_serializes_as_message_array() {
        let mut transcript = Transcript::new("persona").unwrap();
        transcript.push_user(&UserInput::try_new("Hi").unwrap());

        let json = serde_json::to_value(&transcript).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"role": "system", "content": "persona"},
                {"role": "user", "content": "Hi"}
            ])
        );
    }
}
