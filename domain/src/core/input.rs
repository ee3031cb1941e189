//! User input value object

use super::error::DomainError;
use std::str::FromStr;

/// Text typed by the user, trimmed and guaranteed non-empty (Value Object)
///
/// Whitespace-only input never becomes a `UserInput`, so it can never reach
/// the transcript or the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInput {
    content: String,
}

impl UserInput {
    /// Trim the text, returning `None` if nothing is left
    pub fn try_new(content: impl AsRef<str>) -> Option<Self> {
        let trimmed = content.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                content: trimmed.to_string(),
            })
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_content(self) -> String {
        self.content
    }
}

impl FromStr for UserInput {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s).ok_or(DomainError::EmptyMessage)
    }
}

impl std::fmt::Display for UserInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}
