//! Test helpers for session-store integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use access_core::{GateRoutes, Role, UserProfile};
use session_store::middleware::GuardState;
use session_store::{InMemoryStore, KeyValueStore, SessionStore};

pub fn user_with_role(role: Role) -> UserProfile {
    UserProfile::new(Uuid::new_v4(), "Test User", "user@example.com", role)
}

/// Store over a fresh in-memory persistence layer; returns both so
/// tests can inspect persisted keys directly.
pub fn memory_store() -> (SessionStore, Arc<InMemoryStore>) {
    let persistence = Arc::new(InMemoryStore::new());
    let store = SessionStore::new(persistence.clone());
    (store, persistence)
}

/// Initialized guard state with an optional logged-in role.
pub async fn guard_state(role: Option<Role>) -> GuardState {
    let (store, _) = memory_store();
    store.initialize().await.expect("initialize store");
    if let Some(role) = role {
        store
            .login("tok-test", user_with_role(role))
            .await
            .expect("login");
    }
    GuardState {
        store: Arc::new(store),
        routes: GateRoutes::default(),
    }
}

/// Key-value store whose every operation fails.
pub struct BrokenStore;

#[async_trait]
impl KeyValueStore for BrokenStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, anyhow::Error> {
        Err(anyhow::anyhow!("storage unavailable"))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), anyhow::Error> {
        Err(anyhow::anyhow!("storage unavailable"))
    }

    async fn remove(&self, _key: &str) -> Result<(), anyhow::Error> {
        Err(anyhow::anyhow!("storage unavailable"))
    }
}
