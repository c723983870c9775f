//! Add-Card Draft
//!
//! Local state of the add-card form of one lane.

use crate::domain::{Board, Card, CardId, Lane};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDraft {
    text: String,
    open: bool,
}

impl CardDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Submit the draft into `lane`.
    ///
    /// Blank drafts are ignored and keep the form open. Otherwise the new
    /// card is appended, the form closes and the draft clears.
    pub fn submit(&mut self, board: &Board, lane: Lane) -> Option<Board> {
        let title = self.text.trim();
        if title.is_empty() {
            return None;
        }
        let card = Card::new(fresh_id(board), title, lane);
        let next = board.with_card(card)?;
        self.text.clear();
        self.open = false;
        Some(next)
    }
}

/// A random id not used on `board`
pub fn fresh_id(board: &Board) -> CardId {
    loop {
        let id = CardId::generate();
        if !board.contains(&id) {
            return id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_draft_keeps_form_open() {
        let board = Board::new();
        let mut draft = CardDraft::new();
        draft.open();
        draft.set_text("   ");
        assert!(draft.submit(&board, Lane::Todo).is_none());
        assert!(draft.is_open());
        assert_eq!(draft.text(), "   ");
        assert!(board.is_empty());
    }

    #[test]
    fn test_submit_appends_trimmed_card() {
        let board = Board::from_cards(vec![Card::new("1", "A", Lane::Done)]);
        let mut draft = CardDraft::new();
        draft.open();
        draft.set_text("  Ship it \n");

        let next = draft.submit(&board, Lane::Doing).unwrap();
        assert_eq!(next.len(), 2);
        let card = &next.cards()[1];
        assert_eq!(card.title, "Ship it");
        assert_eq!(card.column, Lane::Doing);
        assert_ne!(card.id, CardId::from("1"));
        assert!(!draft.is_open());
        assert_eq!(draft.text(), "");
    }

    #[test]
    fn test_close_keeps_text() {
        let mut draft = CardDraft::new();
        draft.open();
        draft.set_text("half written");
        draft.close();
        assert!(!draft.is_open());
        assert_eq!(draft.text(), "half written");
    }
}
