//! Board State
//!
//! Owns the current snapshot and keeps the persisted slot in step with it.

use super::board_repo::BoardRepository;
use super::traits::KvStore;
use crate::config::BoardConfig;
use crate::domain::{sample_board, Board};

pub struct BoardState<S> {
    repo: BoardRepository<S>,
    board: Board,
}

impl<S: KvStore> BoardState<S> {
    /// Load the board from `store`; nothing is written here
    pub fn open(store: S, config: &BoardConfig) -> Self {
        let mut repo = BoardRepository::new(store, config.storage_key.clone());
        let mut board = repo.load();
        if board.is_empty() && config.seed_when_empty {
            log::info!("seeding empty board with sample cards");
            board = sample_board();
        }
        Self { repo, board }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Swap in a new snapshot and persist it.
    ///
    /// A failed write is logged; the in-memory board is still replaced.
    pub fn replace(&mut self, board: Board) {
        self.board = board;
        if let Err(e) = self.repo.save(&self.board) {
            log::error!("failed to persist board: {}", e);
        }
    }

    /// Apply `f` to the current snapshot; commits when it yields a new one
    pub fn apply<F>(&mut self, f: F) -> bool
    where
        F: FnOnce(&Board) -> Option<Board>,
    {
        match f(&self.board) {
            Some(next) => {
                self.replace(next);
                true
            }
            None => false,
        }
    }
}
