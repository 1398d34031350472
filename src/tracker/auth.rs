//! Session gate for actions that need a signed-in user
//!
//! How a session is obtained belongs to the auth provider; the guard only
//! looks at the state it was given.

use crate::config::SessionConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// The provider has not answered yet
    Pending,
    Anonymous,
    Authenticated { user: String },
}

impl From<&SessionConfig> for SessionState {
    fn from(config: &SessionConfig) -> Self {
        if config.pending {
            SessionState::Pending
        } else if config.user.trim().is_empty() {
            SessionState::Anonymous
        } else {
            SessionState::Authenticated {
                user: config.user.trim().to_string(),
            }
        }
    }
}

/// Result of asking the guard to run an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session still loading; the caller decides how to tell the user
    Pending,
    /// No session; the sign-in prompt was raised
    SignInRequired,
    Allowed,
}

#[derive(Debug, Clone)]
pub struct AuthGuard {
    session: SessionState,
    show_auth_prompt: bool,
}

impl AuthGuard {
    /// Create a guard. An anonymous session raises the sign-in prompt right
    /// away, the way the page does on first load.
    pub fn new(session: SessionState) -> Self {
        let show_auth_prompt = session == SessionState::Anonymous;
        Self {
            session,
            show_auth_prompt,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn set_session(&mut self, session: SessionState) {
        if matches!(session, SessionState::Authenticated { .. }) {
            self.show_auth_prompt = false;
        }
        self.session = session;
    }

    pub fn is_pending(&self) -> bool {
        self.session == SessionState::Pending
    }

    pub fn show_auth_prompt(&self) -> bool {
        self.show_auth_prompt
    }

    pub fn dismiss_auth_prompt(&mut self) {
        self.show_auth_prompt = false;
    }

    /// Check whether a guarded action may run now
    pub fn require_auth(&mut self) -> GuardOutcome {
        match &self.session {
            SessionState::Pending => GuardOutcome::Pending,
            SessionState::Anonymous => {
                self.show_auth_prompt = true;
                GuardOutcome::SignInRequired
            }
            SessionState::Authenticated { user } => {
                tracing::debug!("Session for {} allows action", user);
                GuardOutcome::Allowed
            }
        }
    }
}
