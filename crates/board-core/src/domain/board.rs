//! Board Snapshot
//!
//! The ordered sequence of every card across all lanes. Snapshots are never
//! mutated in place; each operation returns a new board.

use std::collections::HashSet;

use leptos_dragdrop::IndicatorSlot;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardId};
use super::lane::Lane;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Card>", into = "Vec<Card>")]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board, keeping the first card of any duplicated id
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let mut seen = HashSet::with_capacity(cards.len());
        let mut unique = Vec::with_capacity(cards.len());
        for card in cards {
            if seen.insert(card.id.clone()) {
                unique.push(card);
            } else {
                log::warn!("dropping card with duplicate id {}", card.id);
            }
        }
        Self { cards: unique }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| &c.id == id)
    }

    pub fn contains(&self, id: &CardId) -> bool {
        self.get(id).is_some()
    }

    /// Cards of one lane in board order
    pub fn column(&self, lane: Lane) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter().filter(move |c| c.column == lane)
    }

    pub fn column_len(&self, lane: Lane) -> usize {
        self.column(lane).count()
    }

    /// Append a card; `None` if its id is already taken
    pub fn with_card(&self, card: Card) -> Option<Board> {
        if self.contains(&card.id) {
            log::warn!("refusing to add card with existing id {}", card.id);
            return None;
        }
        let mut cards = self.cards.clone();
        cards.push(card);
        Some(Board { cards })
    }

    /// Move a card into `lane` at `target`.
    ///
    /// Returns `None` when nothing changes: the card is unknown, or the
    /// target is the slot right before the card itself. A target naming a
    /// card that is no longer on the board appends at the end.
    pub fn with_card_moved(&self, id: &CardId, lane: Lane, target: &IndicatorSlot<CardId>) -> Option<Board> {
        if target.before() == Some(id) {
            return None;
        }
        let moving = self.get(id)?.in_lane(lane);

        let mut cards: Vec<Card> = self.cards.iter().filter(|c| &c.id != id).cloned().collect();
        match target {
            IndicatorSlot::End => cards.push(moving),
            IndicatorSlot::Before(before) => match cards.iter().position(|c| &c.id == before) {
                Some(index) => cards.insert(index, moving),
                None => {
                    log::warn!("drop target {} is gone, appending {} instead", before, id);
                    cards.push(moving);
                }
            },
        }
        log::debug!("moved card {} to {} before {}", id, lane, target);
        Some(Board { cards })
    }

    /// Remove a card; `None` if it is not on the board
    pub fn without_card(&self, id: &CardId) -> Option<Board> {
        if !self.contains(id) {
            return None;
        }
        let cards = self.cards.iter().filter(|c| &c.id != id).cloned().collect();
        Some(Board { cards })
    }
}

impl From<Vec<Card>> for Board {
    fn from(cards: Vec<Card>) -> Self {
        Board::from_cards(cards)
    }
}

impl From<Board> for Vec<Card> {
    fn from(board: Board) -> Self {
        board.cards
    }
}
