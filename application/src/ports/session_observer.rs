//! Session observer port
//!
//! Defines how a conversation session reports what happened during a turn.
//! Implementations live in the presentation layer and decide how to show it
//! (spinner, colored console output, plain text, ...).

use tokio::sync::mpsc;

/// Callbacks fired by [`ConversationSession::submit`](crate::ConversationSession::submit)
///
/// For every non-empty submit, `on_pending` and `on_pending_cleared` are each
/// called exactly once. Empty input fires nothing.
pub trait SessionObserver: Send + Sync {
    /// The user's (trimmed) message was accepted
    fn on_user_message(&self, text: &str);

    /// The assistant replied
    fn on_assistant_message(&self, text: &str);

    /// A request is now in flight
    fn on_pending(&self);

    /// The in-flight request settled, successfully or not
    fn on_pending_cleared(&self);

    /// The turn failed; `fallback` is the text to show instead of a reply
    fn on_error(&self, fallback: &str);
}

/// No-op observer for when nothing needs to be rendered
pub struct NoSessionObserver;

impl SessionObserver for NoSessionObserver {
    fn on_user_message(&self, _text: &str) {}
    fn on_assistant_message(&self, _text: &str) {}
    fn on_pending(&self) {}
    fn on_pending_cleared(&self) {}
    fn on_error(&self, _fallback: &str) {}
}

/// Observer callbacks as values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    UserMessage(String),
    AssistantMessage(String),
    Pending,
    PendingCleared,
    Error(String),
}

/// Adapter: `SessionObserver` → channel of [`SessionEvent`]
///
/// Lets a renderer running elsewhere (another task, a UI loop) consume the
/// turn as a stream of events instead of implementing the trait itself.
#[derive(Clone)]
pub struct SessionEventSender {
    tx: mpsc::UnboundedSender<SessionEvent>,
}

impl SessionEventSender {
    pub fn new(tx: mpsc::UnboundedSender<SessionEvent>) -> Self {
        Self { tx }
    }

    /// Create a sender together with the receiving end
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    fn emit(&self, event: SessionEvent) {
        // A dropped receiver just means nobody is rendering any more.
        let _ = self.tx.send(event);
    }
}

impl SessionObserver for SessionEventSender {
    fn on_user_message(&self, text: &str) {
        self.emit(SessionEvent::UserMessage(text.to_string()));
    }

    fn on_assistant_message(&self, text: &str) {
        self.emit(SessionEvent::AssistantMessage(text.to_string()));
    }

    fn on_pending(&self) {
        self.emit(SessionEvent::Pending);
    }

    fn on_pending_cleared(&self) {
        self.emit(SessionEvent::PendingCleared);
    }

    fn on_error(&self, fallback: &str) {
        self.emit(SessionEvent::Error(fallback.to_string()));
    }
}
