//! Persistence collaborator for the session store.
//!
//! The store speaks to durable storage only through [`KeyValueStore`],
//! so tests substitute the in-memory implementation and production
//! wires in Redis.

mod memory;
mod redis;

pub use memory::InMemoryStore;
pub use redis::RedisStore;

use async_trait::async_trait;

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, anyhow::Error>;
    async fn set(&self, key: &str, value: &str) -> Result<(), anyhow::Error>;
    async fn remove(&self, key: &str) -> Result<(), anyhow::Error>;
}
