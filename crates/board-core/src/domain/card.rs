//! Card Entity
//!
//! One task on the board.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::lane::Lane;

/// Opaque unique card identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Fresh random id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for CardId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CardId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for CardId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A task card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    pub column: Lane,
}

impl Card {
    pub fn new(id: impl Into<CardId>, title: impl Into<String>, column: Lane) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            column,
        }
    }

    /// Same card in another lane
    pub fn in_lane(&self, column: Lane) -> Self {
        Self {
            column,
            ..self.clone()
        }
    }
}
