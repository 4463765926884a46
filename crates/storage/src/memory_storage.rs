//! In-memory storage, for tests and ephemeral sessions.

use std::collections::HashMap;
use super::trait_::validate_key;
use super::{Storage, Result};

/// Slots kept in a map; nothing touches the disk.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    /// Empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one slot.
    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut slots = HashMap::new();
        slots.insert(key.into(), value.into());
        Self { slots }
    }

    /// Whether a slot exists.
    pub fn contains(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }
}

#[async_trait::async_trait]
impl Storage for MemoryStorage {
    async fn read_slot(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        Ok(self.slots.get(key).cloned())
    }

    async fn write_slot(&mut self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_slot(&mut self, key: &str) -> Result<()> {
        validate_key(key)?;
        self.slots.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StorageError;

    #[tokio::test]
    async fn test_memory_slots() {
        let mut storage = MemoryStorage::with_slot("a", "1");
        assert_eq!(storage.read_slot("a").await.unwrap().as_deref(), Some("1"));

        storage.write_slot("b", "2").await.unwrap();
        storage.remove_slot("a").await.unwrap();

        assert!(!storage.contains("a"));
        assert!(storage.contains("b"));
        assert!(storage.read_slot("a").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_rejects_path_keys() {
        let mut storage = MemoryStorage::new();
        let err = storage.write_slot("../x", "v").await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey(_)));
        assert!(storage.read_slot("a/b").await.is_err());
        assert!(storage.remove_slot("").await.is_err());
        assert!(!storage.contains("../x"));
    }
}
