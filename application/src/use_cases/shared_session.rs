//! Shared conversation session.
//!
//! [`SharedSession`] lets several callers hold the same conversation. Only
//! one turn may be in flight at a time: a submit that arrives while another
//! is pending is rejected with [`SubmitError::Busy`], not queued.

use super::converse::{ConversationSession, SubmitError, SubmitOutcome};
use crate::ports::session_observer::SessionObserver;
use chatline_domain::{Transcript, UserInput};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Cloneable handle to a [`ConversationSession`] that rejects overlapping submits.
#[derive(Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<ConversationSession>>,
}

impl SharedSession {
    pub fn new(session: ConversationSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Run one turn, or fail with [`SubmitError::Busy`] if a turn is in flight.
    ///
    /// Empty input is still a silent no-op, even while busy.
    pub async fn submit(
        &self,
        text: &str,
        observer: &dyn SessionObserver,
    ) -> Result<SubmitOutcome, SubmitError> {
        if UserInput::try_new(text).is_none() {
            return Ok(SubmitOutcome::Ignored);
        }

        let mut session = self.inner.try_lock().map_err(|_| {
            debug!("Rejecting submit: a request is already pending");
            SubmitError::Busy
        })?;
        session.submit(text, observer).await
    }

    /// Whether a turn is currently in flight
    pub fn is_pending(&self) -> bool {
        self.inner.try_lock().is_err()
    }

    /// Copy of the transcript, or `None` while a turn is in flight
    pub fn transcript_snapshot(&self) -> Option<Transcript> {
        self.inner
            .try_lock()
            .ok()
            .map(|session| session.transcript().clone())
    }
}
