//! Discard Zone
//!
//! Drop target that removes the dragged card from the board.

use leptos_dragdrop::DragZone;

use crate::domain::{Board, CardId};

#[derive(Debug, Clone, Default)]
pub struct DiscardZone {
    zone: DragZone<CardId>,
}

impl DiscardZone {
    pub fn new() -> Self {
        Self::default()
    }

    /// Armed while a card hovers the zone
    pub fn is_armed(&self) -> bool {
        self.zone.is_active()
    }

    pub fn drag_over(&mut self) {
        self.zone.enter();
    }

    pub fn drag_leave(&mut self) {
        self.zone.drag_leave();
    }

    /// Handle a drop; `Some` carries the snapshot without the card
    pub fn drop(&mut self, board: &Board, payload: Option<&str>) -> Option<Board> {
        self.zone.reset();
        let id = CardId::from(payload.filter(|id| !id.is_empty())?);
        let next = board.without_card(&id);
        if next.is_some() {
            log::debug!("discarded card {}", id);
        }
        next
    }
}
