//! Persistence Layer - Core Traits
//!
//! The key-value substrate behind the board. Browsers back it with
//! `localStorage`; tests use [`MemoryStore`](super::MemoryStore).

use crate::error::BoardResult;

/// String key-value store
pub trait KvStore {
    /// Read a slot; `Ok(None)` when it was never written
    fn get(&self, key: &str) -> BoardResult<Option<String>>;

    /// Overwrite a slot
    fn set(&self, key: &str, value: &str) -> BoardResult<()>;
}

impl<S: KvStore + ?Sized> KvStore for &S {
    fn get(&self, key: &str) -> BoardResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> BoardResult<()> {
        (**self).set(key, value)
    }
}

impl<S: KvStore + ?Sized> KvStore for Box<S> {
    fn get(&self, key: &str) -> BoardResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> BoardResult<()> {
        (**self).set(key, value)
    }
}
