//! Key-value persistence used by the theme context.
//!
//! The browser implementation lives in `folio-browser` (backed by
//! `window.localStorage`); `MemoryStorage` is the in-process double.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Error returned when a value cannot be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// No storage backend is reachable (private mode, no window, ...).
    Unavailable,
    /// The backend refused the write.
    Write(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "storage unavailable"),
            StorageError::Write(reason) => write!(f, "storage write failed: {}", reason),
        }
    }
}

impl std::error::Error for StorageError {}

/// String key-value slot store.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory storage. Clones share the same slots.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    slots: Rc<RefCell<BTreeMap<String, String>>>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    /// Storage that rejects every write, like a full or disabled `localStorage`.
    pub fn read_only() -> Self {
        Self {
            slots: Rc::default(),
            read_only: true,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Write(format!("'{}' is read-only", key)));
        }
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Write(format!("'{}' is read-only", key)));
        }
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_slots() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        storage.set("theme", "dark").unwrap();
        assert_eq!(other.get("theme").as_deref(), Some("dark"));

        other.remove("theme").unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn read_only_rejects_writes() {
        let storage = MemoryStorage::read_only();
        assert!(matches!(storage.set("theme", "dark"), Err(StorageError::Write(_))));
        assert_eq!(storage.get("theme"), None);
    }
}
