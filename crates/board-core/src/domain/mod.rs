//! Domain Layer
//!
//! Cards, lanes and immutable board snapshots.

mod board;
mod card;
mod lane;
mod sample;

pub use board::Board;
pub use card::{Card, CardId};
pub use lane::Lane;
pub use sample::sample_board;
