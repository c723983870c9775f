//! Kanban Board Core
//!
//! Layered:
//! - domain: cards, lanes and immutable board snapshots
//! - column_view / discard / draft: drag-and-drop and form controllers
//! - persistence: the board mirrored into a key-value slot

mod column_view;
mod config;
mod discard;
mod domain;
mod draft;
mod error;
mod persistence;

#[cfg(test)]
mod properties;

pub use column_view::ColumnView;
pub use config::{BoardConfig, DEFAULT_STORAGE_KEY, PAYLOAD_FORMAT};
pub use discard::DiscardZone;
pub use domain::{sample_board, Board, Card, CardId, Lane};
pub use draft::{fresh_id, CardDraft};
pub use error::{BoardError, BoardResult};
pub use persistence::{BoardRepository, BoardState, KvStore, MemoryStore};
