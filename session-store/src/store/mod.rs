//! Session store - single source of truth for the current
//! authentication state.
//!
//! In-memory state is authoritative for the running process; the
//! persistence collaborator provides best-effort durability across
//! restarts. Reads hand out owned snapshots, never live references, so
//! consumers are snapshot-consistent without locking discipline of
//! their own.

use std::sync::{Arc, RwLock};

use tokio::sync::watch;

use access_core::{Session, UserProfile};

use crate::error::SessionError;
use crate::persistence::KeyValueStore;

/// Persisted key for the credential token.
pub const AUTH_TOKEN_KEY: &str = "auth-token";
/// Persisted key for the serialized user record.
pub const AUTH_USER_KEY: &str = "auth-user";

/// Process-wide session state. Construct one per process and inject it
/// into consumers; `initialize` must resolve before any predicate is
/// evaluated over its snapshots.
pub struct SessionStore {
    persistence: Arc<dyn KeyValueStore>,
    session: RwLock<Session>,
    ready: watch::Sender<bool>,
}

impl SessionStore {
    pub fn new(persistence: Arc<dyn KeyValueStore>) -> Self {
        let (ready, _) = watch::channel(false);
        Self {
            persistence,
            session: RwLock::new(Session::anonymous()),
            ready,
        }
    }

    /// Hydrate the session from persisted storage. Call exactly once at
    /// startup.
    ///
    /// Both keys present: treated as a login-equivalent assignment. One
    /// key present, or the user record unparsable: invariant repair -
    /// both keys are cleared and the process starts logged out. Read
    /// errors count as "nothing stored". Completion publishes the
    /// readiness signal awaited by [`SessionStore::ready`].
    pub async fn initialize(&self) -> Result<(), SessionError> {
        if *self.ready.borrow() {
            return Err(SessionError::AlreadyInitialized);
        }

        let token = self.read_persisted(AUTH_TOKEN_KEY).await;
        let raw_user = self.read_persisted(AUTH_USER_KEY).await;

        let user = raw_user.as_deref().and_then(|raw| {
            match serde_json::from_str::<UserProfile>(raw) {
                Ok(user) => Some(user),
                Err(error) => {
                    tracing::warn!(%error, "Persisted user record is unparsable");
                    None
                }
            }
        });

        let hydrated = Session::from_parts(token, user);
        if hydrated.is_authenticated() {
            tracing::info!(user_id = %hydrated.user_id().unwrap_or_default(), "Restored persisted session");
            *self.session.write().unwrap() = hydrated;
        } else {
            if hydrated.token().is_some() || hydrated.user().is_some() {
                tracing::warn!("Clearing partial persisted session");
                self.clear_persisted().await;
            }
            *self.session.write().unwrap() = Session::anonymous();
        }

        let _ = self.ready.send(true);
        Ok(())
    }

    /// Suspend until `initialize` has resolved. Returns immediately
    /// once the store is ready.
    pub async fn ready(&self) {
        let mut rx = self.ready.subscribe();
        while !*rx.borrow_and_update() {
            if rx.changed().await.is_err() {
                return;
            }
        }
    }

    /// Record a successful login.
    ///
    /// Rejects a blank token or a user without a recognized role before
    /// touching any state. The in-memory session is replaced first and
    /// stands even if the persistence writes fail; a write failure is
    /// reported through the returned error.
    pub async fn login(&self, token: &str, user: UserProfile) -> Result<(), SessionError> {
        if token.trim().is_empty() {
            return Err(SessionError::EmptyToken);
        }
        if !user.role.is_recognized() {
            return Err(SessionError::UnrecognizedRole);
        }

        let serialized = serde_json::to_string(&user)?;
        tracing::info!(user_id = %user.id, role = %user.role, "Session established");
        *self.session.write().unwrap() = Session::authenticated(token, user);

        if let Err(error) = self.persistence.set(AUTH_TOKEN_KEY, token).await {
            tracing::warn!(%error, "Failed to persist session token");
            return Err(SessionError::Persistence(error));
        }
        if let Err(error) = self.persistence.set(AUTH_USER_KEY, &serialized).await {
            tracing::warn!(%error, "Failed to persist session user");
            return Err(SessionError::Persistence(error));
        }
        Ok(())
    }

    /// Clear the session. Idempotent; the in-memory state is cleared
    /// even when removing the persisted copies fails.
    pub async fn logout(&self) -> Result<(), SessionError> {
        *self.session.write().unwrap() = Session::anonymous();

        let mut failure = None;
        for key in [AUTH_TOKEN_KEY, AUTH_USER_KEY] {
            if let Err(error) = self.persistence.remove(key).await {
                tracing::warn!(%error, key, "Failed to clear persisted session key");
                failure = Some(error);
            }
        }
        match failure {
            Some(error) => Err(SessionError::Persistence(error)),
            None => Ok(()),
        }
    }

    /// A downstream call rejected our credentials (expired or invalid
    /// token). Same effect as `logout`.
    pub async fn invalidate(&self) -> Result<(), SessionError> {
        tracing::warn!("Session token rejected downstream; clearing session");
        self.logout().await
    }

    /// Owned snapshot of the current session. Synchronous; never does
    /// I/O.
    pub fn current_session(&self) -> Session {
        self.session.read().unwrap().clone()
    }

    async fn read_persisted(&self, key: &str) -> Option<String> {
        match self.persistence.get(key).await {
            Ok(value) => value,
            Err(error) => {
                // Read failures at startup are non-fatal; proceed as
                // logged out.
                tracing::warn!(%error, key, "Failed to read persisted session key");
                None
            }
        }
    }

    async fn clear_persisted(&self) {
        for key in [AUTH_TOKEN_KEY, AUTH_USER_KEY] {
            if let Err(error) = self.persistence.remove(key).await {
                tracing::warn!(%error, key, "Failed to clear persisted session key");
            }
        }
    }
}
