//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity, plus the
//! `localStorage` adapter the board is persisted through.

use board_core::{Board, BoardError, BoardResult, KvStore, MemoryStore};
use leptos::prelude::*;
use reactive_stores::Store;

/// Which demo is on screen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Demo {
    #[default]
    Board,
    Reveal,
}

impl Demo {
    pub const ALL: [Demo; 2] = [Demo::Board, Demo::Reveal];

    pub fn label(&self) -> &'static str {
        match self {
            Demo::Board => "Kanban",
            Demo::Reveal => "Hover Reveal",
        }
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Current board snapshot, replaced on every change
    pub board: Board,
    /// Active demo tab
    pub demo: Demo,
}

impl AppState {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Browser Key-Value Store
// ========================

/// `window.localStorage` as a key-value store
pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

impl KvStore for LocalStore {
    fn get(&self, key: &str) -> BoardResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| BoardError::Storage(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> BoardResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| BoardError::Storage(format!("{:?}", e)))
    }
}

/// `localStorage` when the browser allows it, memory otherwise
pub fn open_browser_store() -> Box<dyn KvStore> {
    match LocalStore::open() {
        Some(store) => Box::new(store),
        None => {
            log::warn!("localStorage unavailable, board will not survive a reload");
            Box::new(MemoryStore::new())
        }
    }
}
