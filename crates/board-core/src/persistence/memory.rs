//! In-memory key-value store.

use std::cell::RefCell;
use std::collections::HashMap;

use super::traits::KvStore;
use crate::error::BoardResult;

#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RefCell<HashMap<String, String>>,
    writes: RefCell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with one slot already written
    pub fn with_slot(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.slots.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    /// Number of writes since creation
    pub fn writes(&self) -> usize {
        *self.writes.borrow()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> BoardResult<Option<String>> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> BoardResult<()> {
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}
