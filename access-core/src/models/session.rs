//! Session snapshot - who is currently using this client.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Role, UserProfile};

/// Immutable snapshot of the current authentication state.
///
/// A session is authenticated iff it holds both a non-blank token and a
/// user record. Partial states can be constructed (hydration sees them
/// before repair) but never count as authenticated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    token: Option<String>,
    user: Option<UserProfile>,
}

impl Session {
    /// The logged-out session.
    pub fn anonymous() -> Self {
        Self {
            token: None,
            user: None,
        }
    }

    /// Session for a completed login.
    pub fn authenticated(token: impl Into<String>, user: UserProfile) -> Self {
        Self {
            token: Some(token.into()),
            user: Some(user),
        }
    }

    /// Assemble a session from possibly-partial persisted parts.
    pub fn from_parts(token: Option<String>, user: Option<UserProfile>) -> Self {
        Self { token, user }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(&self.token, Some(t) if !t.trim().is_empty()) && self.user.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// Role of the session user; `None` when unauthenticated.
    pub fn role(&self) -> Option<Role> {
        if !self.is_authenticated() {
            return None;
        }
        self.user.as_ref().map(|u| u.role)
    }

    /// Id of the session user; `None` when unauthenticated.
    pub fn user_id(&self) -> Option<Uuid> {
        if !self.is_authenticated() {
            return None;
        }
        self.user.as_ref().map(|u| u.id)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::anonymous()
    }
}
