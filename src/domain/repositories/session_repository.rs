use async_trait::async_trait;

use crate::domain::error::StorageError;

/// Durable client-side key/value storage
#[async_trait]
pub trait SessionRepository {
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Write several keys at once. Either all of them are stored or none.
    async fn set_all(&self, entries: &[(&str, &str)]) -> Result<(), StorageError>;
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Remove every key
    async fn clear(&self) -> Result<(), StorageError>;
}
