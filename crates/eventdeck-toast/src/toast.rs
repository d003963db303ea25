//! The toast state machine.
//!
//! Two states, Hidden and Visible. Each transition into Visible starts a new
//! session; expiry is only honoured for the session that is still showing.

use std::fmt;

/// Identifies one visible session of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl SessionId {
    /// Returns the raw session number.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Current state of a toast.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ToastState {
    /// Nothing is shown.
    #[default]
    Hidden,
    /// A message is on screen.
    Visible {
        /// Text being shown.
        message: String,
        /// Session that owns the current dismiss timer.
        session: SessionId,
    },
}

/// A single toast slot. At most one message is visible at a time.
#[derive(Debug, Default)]
pub struct Toast {
    state: ToastState,
    next_session: u64,
}

impl Toast {
    /// Creates a hidden toast.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `message`, replacing whatever was visible.
    ///
    /// Always starts a fresh session, even when already visible.
    pub fn show(&mut self, message: impl Into<String>) -> SessionId {
        self.next_session += 1;
        let session = SessionId(self.next_session);
        self.state = ToastState::Visible {
            message: message.into(),
            session,
        };
        session
    }

    /// Hides the toast. Returns the session that was ended, if any.
    pub fn dismiss(&mut self) -> Option<SessionId> {
        match std::mem::take(&mut self.state) {
            ToastState::Visible { session, .. } => Some(session),
            ToastState::Hidden => None,
        }
    }

    /// Hides the toast if `session` is the one currently showing.
    ///
    /// Returns false for stale sessions, leaving the state untouched.
    pub fn expire(&mut self, session: SessionId) -> bool {
        if self.session() == Some(session) {
            self.state = ToastState::Hidden;
            true
        } else {
            false
        }
    }

    /// Returns true while a message is shown.
    pub fn is_visible(&self) -> bool {
        matches!(self.state, ToastState::Visible { .. })
    }

    /// The visible message.
    pub fn message(&self) -> Option<&str> {
        match &self.state {
            ToastState::Visible { message, .. } => Some(message),
            ToastState::Hidden => None,
        }
    }

    /// The current session, if visible.
    pub fn session(&self) -> Option<SessionId> {
        match self.state {
            ToastState::Visible { session, .. } => Some(session),
            ToastState::Hidden => None,
        }
    }

    /// Current state.
    pub fn state(&self) -> &ToastState {
        &self.state
    }
}
