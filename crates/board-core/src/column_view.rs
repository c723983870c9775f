//! Column View Controller
//!
//! Drag handling for one lane: tracks the nearest drop indicator while a
//! card hovers the lane and turns a drop into a new board snapshot.

use leptos_dragdrop::{Anchor, DragZone, IndicatorSlot};

use crate::domain::{Board, CardId, Lane};

#[derive(Debug, Clone)]
pub struct ColumnView {
    lane: Lane,
    zone: DragZone<CardId>,
}

impl ColumnView {
    pub fn new(lane: Lane) -> Self {
        Self {
            lane,
            zone: DragZone::new(),
        }
    }

    pub fn zone(&self) -> &DragZone<CardId> {
        &self.zone
    }

    /// Column background highlighted?
    pub fn is_active(&self) -> bool {
        self.zone.is_active()
    }

    pub fn highlighted(&self) -> Option<&IndicatorSlot<CardId>> {
        self.zone.highlighted()
    }

    /// Indicator slots of this lane in render order: one before each card,
    /// then the end slot.
    pub fn slots(&self, board: &Board) -> Vec<IndicatorSlot<CardId>> {
        board
            .column(self.lane)
            .map(|c| IndicatorSlot::Before(c.id.clone()))
            .chain(std::iter::once(IndicatorSlot::End))
            .collect()
    }

    pub fn drag_over(&mut self, anchors: &[Anchor<CardId>], pointer_y: f64) {
        self.zone.drag_over(anchors, pointer_y);
    }

    pub fn drag_leave(&mut self) {
        self.zone.drag_leave();
    }

    /// Handle a drop; `Some` carries the snapshot to commit.
    pub fn drop(
        &mut self,
        board: &Board,
        payload: Option<&str>,
        anchors: &[Anchor<CardId>],
        pointer_y: f64,
    ) -> Option<Board> {
        let target = self.zone.drop(anchors, pointer_y);
        let dragged = match payload {
            Some(id) if !id.is_empty() => CardId::from(id),
            _ => {
                log::debug!("drop on {} without a card payload", self.lane);
                return None;
            }
        };
        board.with_card_moved(&dragged, self.lane, &target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Card;

    fn board() -> Board {
        Board::from_cards(vec![
            Card::new("1", "A", Lane::Todo),
            Card::new("2", "B", Lane::Todo),
            Card::new("3", "C", Lane::Done),
        ])
    }

    /// Lay the lane's slots out 40px apart, starting at y = 100
    fn layout(view: &ColumnView, board: &Board) -> Vec<Anchor<CardId>> {
        view.slots(board)
            .into_iter()
            .enumerate()
            .map(|(i, slot)| Anchor::new(slot, 100.0 + 40.0 * i as f64))
            .collect()
    }

    fn ids(board: &Board) -> Vec<&str> {
        board.cards().iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_slots_follow_column_order() {
        let view = ColumnView::new(Lane::Todo);
        let slots = view.slots(&board());
        assert_eq!(
            slots,
            vec![
                IndicatorSlot::Before(CardId::from("1")),
                IndicatorSlot::Before(CardId::from("2")),
                IndicatorSlot::End,
            ]
        );
        assert_eq!(ColumnView::new(Lane::Backlog).slots(&board()), vec![IndicatorSlot::End]);
    }

    #[test]
    fn test_drag_over_then_leave_changes_nothing() {
        let board = board();
        let mut view = ColumnView::new(Lane::Todo);
        let anchors = layout(&view, &board);

        view.drag_over(&anchors, 138.0);
        assert!(view.is_active());
        assert_eq!(view.highlighted(), Some(&IndicatorSlot::Before(CardId::from("2"))));

        view.drag_over(&anchors, 190.0);
        assert_eq!(view.highlighted(), Some(&IndicatorSlot::End));

        view.drag_leave();
        assert!(!view.is_active());
        assert!(view.highlighted().is_none());
        assert_eq!(ids(&board), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_drop_reorders_within_lane() {
        let board = board();
        let mut view = ColumnView::new(Lane::Todo);
        let anchors = layout(&view, &board);

        view.drag_over(&anchors, 95.0);
        let next = view.drop(&board, Some("2"), &anchors, 95.0).unwrap();
        assert_eq!(ids(&next), vec!["2", "1", "3"]);
        assert!(next.column(Lane::Todo).count() == 2);
        assert!(!view.is_active());
    }

    #[test]
    fn test_drop_transfers_between_lanes() {
        let board = board();
        let mut view = ColumnView::new(Lane::Done);
        let anchors = layout(&view, &board);

        // nearest to the slot before card 3
        let next = view.drop(&board, Some("1"), &anchors, 102.0).unwrap();
        assert_eq!(ids(&next), vec!["2", "1", "3"]);
        assert_eq!(next.get(&CardId::from("1")).unwrap().column, Lane::Done);
        assert_eq!(next.column_len(Lane::Todo), 1);
        assert_eq!(next.column_len(Lane::Done), 2);
    }

    #[test]
    fn test_drop_onto_own_slot_is_noop() {
        let board = board();
        let mut view = ColumnView::new(Lane::Todo);
        let anchors = layout(&view, &board);
        // slot before card 2 sits at y = 140
        assert!(view.drop(&board, Some("2"), &anchors, 141.0).is_none());
        assert!(!view.is_active());
    }

    #[test]
    fn test_drop_without_payload_is_noop() {
        let board = board();
        let mut view = ColumnView::new(Lane::Todo);
        let anchors = layout(&view, &board);
        view.drag_over(&anchors, 100.0);
        assert!(view.drop(&board, None, &anchors, 100.0).is_none());
        assert!(view.drop(&board, Some(""), &anchors, 100.0).is_none());
        assert!(!view.is_active());
    }

    #[test]
    fn test_drop_into_empty_lane_appends() {
        let board = board();
        let mut view = ColumnView::new(Lane::Backlog);
        let anchors = layout(&view, &board);
        let next = view.drop(&board, Some("3"), &anchors, 0.0).unwrap();
        assert_eq!(ids(&next), vec!["1", "2", "3"]);
        assert_eq!(next.get(&CardId::from("3")).unwrap().column, Lane::Backlog);
    }

    #[test]
    fn test_drop_with_unmeasured_indicators_appends() {
        let board = board();
        let mut view = ColumnView::new(Lane::Todo);
        let next = view.drop(&board, Some("1"), &[], 0.0).unwrap();
        assert_eq!(ids(&next), vec!["2", "3", "1"]);
    }
}
