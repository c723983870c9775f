//! Lane
//!
//! The fixed workflow stages a card can sit in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BoardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lane {
    Backlog,
    Todo,
    Doing,
    Done,
}

impl Lane {
    /// All lanes in display order
    pub const ALL: [Lane; 4] = [Lane::Backlog, Lane::Todo, Lane::Doing, Lane::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            Lane::Backlog => "backlog",
            Lane::Todo => "todo",
            Lane::Doing => "doing",
            Lane::Done => "done",
        }
    }

    /// Column heading
    pub fn title(&self) -> &'static str {
        match self {
            Lane::Backlog => "Backlog",
            Lane::Todo => "Todo",
            Lane::Doing => "In Progress",
            Lane::Done => "Complete",
        }
    }

    /// CSS class for the heading color
    pub fn heading_class(&self) -> &'static str {
        match self {
            Lane::Backlog => "heading-neutral",
            Lane::Todo => "heading-yellow",
            Lane::Doing => "heading-blue",
            Lane::Done => "heading-emerald",
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lane {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "backlog" => Ok(Lane::Backlog),
            "todo" => Ok(Lane::Todo),
            "doing" => Ok(Lane::Doing),
            "done" => Ok(Lane::Done),
            other => Err(BoardError::UnknownLane(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_strings() {
        for lane in Lane::ALL {
            assert_eq!(lane.as_str().parse::<Lane>().unwrap(), lane);
        }
        assert!(matches!("archived".parse::<Lane>(), Err(BoardError::UnknownLane(s)) if s == "archived"));
    }

    #[test]
    fn test_lane_serialization() {
        assert_eq!(serde_json::to_string(&Lane::Doing).unwrap(), "\"doing\"");
        assert_eq!(Lane::Doing.title(), "In Progress");
    }
}
