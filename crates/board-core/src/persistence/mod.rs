//! Persistence Layer
//!
//! Mirrors the board into a single slot of a key-value string store.

mod board_repo;
mod memory;
mod state;
mod traits;


pub use board_repo::BoardRepository;
pub use memory::MemoryStore;
pub use state::BoardState;
pub use traits::KvStore;
