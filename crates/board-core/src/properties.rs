//! Property tests over random boards and operations.

use std::collections::HashSet;

use leptos_dragdrop::IndicatorSlot;
use proptest::prelude::*;

use crate::{Board, BoardRepository, Card, CardDraft, CardId, DiscardZone, Lane, MemoryStore};

fn lane() -> impl Strategy<Value = Lane> {
    prop::sample::select(Lane::ALL.to_vec())
}

fn board() -> impl Strategy<Value = Board> {
    prop::collection::vec((lane(), "[a-z ]{1,12}"), 0..12).prop_map(|cards| {
        Board::from_cards(
            cards
                .into_iter()
                .enumerate()
                .map(|(i, (lane, title))| Card::new(i.to_string(), title, lane))
                .collect(),
        )
    })
}

fn non_empty_board() -> impl Strategy<Value = Board> {
    board().prop_filter("needs a card", |b| !b.is_empty())
}

proptest! {
    #[test]
    fn added_ids_are_unique(titles in prop::collection::vec(("[a-z]{1,8}", lane()), 1..30)) {
        let mut board = Board::new();
        for (title, lane) in titles {
            let mut draft = CardDraft::new();
            draft.open();
            draft.set_text(title);
            board = draft.submit(&board, lane).expect("non-blank draft");
        }
        let ids: HashSet<&CardId> = board.cards().iter().map(|c| &c.id).collect();
        prop_assert_eq!(ids.len(), board.len());
    }

    #[test]
    fn columns_partition_board(board in board()) {
        let total: usize = Lane::ALL.iter().map(|l| board.column_len(*l)).sum();
        prop_assert_eq!(total, board.len());
        for card in board.cards() {
            let hits = Lane::ALL.iter().filter(|l| board.column(**l).any(|c| c.id == card.id)).count();
            prop_assert_eq!(hits, 1);
        }
    }

    #[test]
    fn move_preserves_cardinality(board in non_empty_board(), pick in any::<prop::sample::Index>(), to in lane()) {
        let card = pick.get(board.cards()).clone();
        let from = card.column;
        let moved = board.with_card_moved(&card.id, to, &IndicatorSlot::End).expect("card exists");

        prop_assert_eq!(moved.len(), board.len());
        if from != to {
            prop_assert_eq!(moved.column_len(from), board.column_len(from) - 1);
            prop_assert_eq!(moved.column_len(to), board.column_len(to) + 1);
        }
        prop_assert_eq!(moved.get(&card.id).map(|c| c.column), Some(to));
    }

    #[test]
    fn discard_removes_exactly_one(board in non_empty_board(), pick in any::<prop::sample::Index>()) {
        let id = pick.get(board.cards()).id.clone();
        let mut zone = DiscardZone::new();
        let after = zone.drop(&board, Some(id.as_str())).expect("card exists");
        prop_assert_eq!(after.len(), board.len() - 1);
        prop_assert!(!after.contains(&id));
    }

    #[test]
    fn self_drop_is_noop(board in non_empty_board(), pick in any::<prop::sample::Index>()) {
        let card = pick.get(board.cards());
        prop_assert!(board.with_card_moved(&card.id, card.column, &IndicatorSlot::Before(card.id.clone())).is_none());
    }

    #[test]
    fn persistence_round_trip(board in board()) {
        let store = MemoryStore::new();
        let mut repo = BoardRepository::new(&store, "cards");
        repo.load();
        repo.save(&board).expect("save");
        let mut again = BoardRepository::new(&store, "cards");
        prop_assert_eq!(again.load(), board);
    }
}
