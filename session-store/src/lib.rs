//! session-store: persistent session state and the access-gate
//! middleware built on `access-core`.
//!
//! The store holds the process-wide session, hydrates it once from the
//! injected key-value collaborator, and hands out immutable snapshots
//! that the `access-core` predicates evaluate. The middleware module
//! adapts gate decisions to axum responses.

pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod persistence;
pub mod store;

pub use config::StoreConfig;
pub use error::SessionError;
pub use persistence::{InMemoryStore, KeyValueStore, RedisStore};
pub use store::{SessionStore, AUTH_TOKEN_KEY, AUTH_USER_KEY};
