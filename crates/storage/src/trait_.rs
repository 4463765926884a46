//! Storage trait abstraction.

use async_trait::async_trait;

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Slot key that cannot be used as a file name
    #[error("invalid slot key: {0:?}")]
    InvalidKey(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Durable key-value slots holding serialized snapshots.
///
/// Values are opaque strings; callers own the encoding.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Read a slot. `Ok(None)` when the slot has never been written.
    async fn read_slot(&self, key: &str) -> Result<Option<String>>;

    /// Write (create or replace) a slot.
    async fn write_slot(&mut self, key: &str, value: &str) -> Result<()>;

    /// Erase a slot. Erasing a missing slot succeeds.
    async fn remove_slot(&mut self, key: &str) -> Result<()>;
}

/// Reject keys that would escape the storage root or are otherwise unsafe.
pub(crate) fn validate_key(key: &str) -> Result<()> {
    let ok = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if ok {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key() {
        assert!(validate_key("dyvyn-progress").is_ok());
        assert!(validate_key("profile_2.v1").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../etc").is_err());
        assert!(validate_key("a/b").is_err());
        assert!(validate_key(".hidden").is_err());
    }
}
