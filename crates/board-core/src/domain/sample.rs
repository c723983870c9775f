//! Sample board shown on request for an empty board.

use super::{Board, Card, Lane};

const SAMPLE: &[(&str, &str, Lane)] = &[
    ("1", "Complete Quiz App", Lane::Done),
    ("2", "Complete drag and drop", Lane::Doing),
    ("3", "Vs code extension for Auto semicolon", Lane::Doing),
    ("4", "Add project in Portfolio site", Lane::Done),
    ("5", "Study aptitude", Lane::Backlog),
    ("6", "Complete Quiz App", Lane::Done),
    ("7", "Complete drag and drop", Lane::Todo),
    ("8", "Vs code extension for Auto semicolon", Lane::Todo),
    ("9", "Add project in Portfolio site", Lane::Done),
    ("10", "Study aptitude", Lane::Backlog),
];

pub fn sample_board() -> Board {
    Board::from_cards(
        SAMPLE
            .iter()
            .map(|(id, title, lane)| Card::new(*id, *title, *lane))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_board() {
        let board = sample_board();
        assert_eq!(board.len(), SAMPLE.len());
        for lane in Lane::ALL {
            assert!(board.column_len(lane) > 0);
        }
        // second half repeats the first half's titles
        assert_eq!(board.cards()[5].title, board.cards()[0].title);
        assert_eq!(board.cards()[9].title, "Study aptitude");
    }
}
