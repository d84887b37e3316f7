//! Shared-secret session gate.
//!
//! The dashboard is gated by a team-wide secret, and the settings area by a
//! separate manager secret. This is a convenience gate, not credential
//! validation: the core only stores and compares the strings.

use crate::error::{CoreError, Result};

/// Session state: the two secrets plus whether each gate is open.
pub struct Session {
    team_secret: String,
    manager_secret: String,
    authenticated: bool,
    manager_authenticated: bool,
}

impl Session {
    pub fn new(team_secret: impl Into<String>, manager_secret: impl Into<String>) -> Self {
        Self {
            team_secret: team_secret.into(),
            manager_secret: manager_secret.into(),
            authenticated: false,
            manager_authenticated: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn is_manager_authenticated(&self) -> bool {
        self.manager_authenticated
    }

    /// Try the team gate. Returns whether the session is now open.
    pub fn unlock(&mut self, input: &str) -> bool {
        if input == self.team_secret {
            self.authenticated = true;
        }
        self.authenticated
    }

    /// Try the manager gate (settings area).
    pub fn unlock_manager(&mut self, input: &str) -> bool {
        if input == self.manager_secret {
            self.manager_authenticated = true;
        }
        self.manager_authenticated
    }

    /// Close both gates.
    pub fn lock(&mut self) {
        self.authenticated = false;
        self.manager_authenticated = false;
    }

    /// Replace the team secret. A blank secret is rejected.
    pub fn set_team_secret(&mut self, new_secret: &str) -> Result<()> {
        let trimmed = new_secret.trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptySecret);
        }
        self.team_secret = trimmed.to_string();
        Ok(())
    }
}
