//! Board Repository
//!
//! Loads the board once and writes the full snapshot on every change.

use super::traits::KvStore;
use crate::domain::Board;
use crate::error::{BoardError, BoardResult};

pub struct BoardRepository<S> {
    store: S,
    key: String,
    loaded: bool,
}

impl<S: KvStore> BoardRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            loaded: false,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Read the persisted board.
    ///
    /// The slot counts as loaded once it has been read, even if its
    /// content fails to parse; a failed read leaves it unloaded so no save
    /// can overwrite data that was never seen.
    pub fn try_load(&mut self) -> BoardResult<Option<Board>> {
        let raw = self.store.get(&self.key)?;
        self.loaded = true;
        match raw {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Read the persisted board, falling back to an empty one
    pub fn load(&mut self) -> Board {
        match self.try_load() {
            Ok(Some(board)) => {
                log::info!("loaded {} cards from '{}'", board.len(), self.key);
                board
            }
            Ok(None) => {
                log::info!("no saved board under '{}', starting empty", self.key);
                Board::new()
            }
            Err(e) => {
                log::warn!("ignoring saved board under '{}': {}", self.key, e);
                Board::new()
            }
        }
    }

    /// Overwrite the slot with `board`
    pub fn save(&self, board: &Board) -> BoardResult<()> {
        if !self.loaded {
            return Err(BoardError::NotLoaded);
        }
        let raw = serde_json::to_string(board)?;
        self.store.set(&self.key, &raw)?;
        log::trace!("saved {} cards to '{}'", board.len(), self.key);
        Ok(())
    }
}
