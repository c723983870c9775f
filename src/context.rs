//! Application Context
//!
//! Board access shared by every component via the Leptos Context API.

use board_core::{Board, BoardState, KvStore};
use leptos::prelude::*;

use crate::store::{AppStateStoreFields, AppStore};

/// Board snapshot plus the state that persists it
#[derive(Clone, Copy)]
pub struct BoardContext {
    store: AppStore,
    state: StoredValue<BoardState<Box<dyn KvStore>>, LocalStorage>,
}

impl BoardContext {
    pub fn new(store: AppStore, state: BoardState<Box<dyn KvStore>>) -> Self {
        Self {
            store,
            state: StoredValue::new_local(state),
        }
    }

    pub fn with_board<T>(&self, f: impl FnOnce(&Board) -> T) -> T {
        self.store.board().with(f)
    }

    /// Run a board operation; a returned snapshot is persisted and rendered
    pub fn commit<F>(&self, f: F) -> bool
    where
        F: FnOnce(&Board) -> Option<Board>,
    {
        let next = self
            .state
            .try_update_value(|state| state.apply(f).then(|| state.board().clone()))
            .flatten();
        match next {
            Some(board) => {
                *self.store.board().write() = board;
                true
            }
            None => false,
        }
    }
}

pub fn use_board() -> BoardContext {
    use_context::<BoardContext>().expect("BoardContext should be provided")
}
