//! Word extraction.
//!
//! Given a legal placement already overlaid on a board, the resolver
//! finds every word the move forms: the primary word along the move's
//! axis, plus a perpendicular word through each newly placed tile. A
//! span counts as a word only when it covers at least two squares; the
//! one exception, a single-letter opening move, is the caller's to
//! handle via [`primary_word`].

use crate::board::Board;
use crate::core::{Axis, Move, Position, Tile};

use super::validator;

/// An ordered run of occupied squares read off the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    letters: Vec<(Position, Tile)>,
}

impl Word {
    /// Number of squares the word covers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// True for a zero-length span (never produced for occupied
    /// starts).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Iterate over the word's squares in reading order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        self.letters.iter().copied()
    }

    /// The word as text, e.g. `"BAKER"`.
    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().map(|(_, tile)| tile.letter()).collect()
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// Every word formed by `mv`, whose tiles must already sit on `board`.
///
/// The primary word is included when it covers two or more squares;
/// each placement additionally contributes its perpendicular span when
/// that span covers two or more squares.
#[must_use]
pub fn resolve(board: &Board, mv: &Move) -> Vec<Word> {
    let Some(axis) = validator::move_axis(mv) else {
        return Vec::new();
    };

    let mut words = Vec::new();

    let primary = primary_word(board, mv);
    if primary.len() >= 2 {
        words.push(primary);
    }

    for placement in mv.iter() {
        let cross = span(board, placement.position, axis.cross());
        if cross.len() >= 2 {
            words.push(cross);
        }
    }

    words
}

/// The word along the move's own axis, regardless of length.
///
/// A legal single-letter opening move forms a one-square "word"; the
/// game loop scores it only when the move creates nothing longer.
#[must_use]
pub fn primary_word(board: &Board, mv: &Move) -> Word {
    let axis = validator::move_axis(mv).unwrap_or(Axis::Horizontal);
    match mv.positions().next() {
        Some(start) => span(board, start, axis),
        None => Word { letters: Vec::new() },
    }
}

/// Walk outward from `start` along `axis` until empty squares bound the
/// run, and read it off in order.
fn span(board: &Board, start: Position, axis: Axis) -> Word {
    let mut first = start;
    while let Some(prev) = first.step(axis, -1) {
        if !board.is_occupied(prev) {
            break;
        }
        first = prev;
    }

    let mut letters = Vec::new();
    let mut cursor = Some(first);
    while let Some(pos) = cursor {
        match board.tile(pos) {
            Some(tile) => letters.push((pos, tile)),
            None => break,
        }
        cursor = pos.step(axis, 1);
    }

    Word { letters }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlay(board: &mut Board, word: &str, start: (char, u8), vertical: bool) -> Move {
        let mv = Move::from_word(word, start, vertical).unwrap();
        for p in mv.iter() {
            board.set_tile(p.position, p.tile);
        }
        mv
    }

    #[test]
    fn test_opening_word() {
        let mut board = Board::new();
        let mv = overlay(&mut board, "BAKER", ('h', 8), false);

        let words = resolve(&board, &mv);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text(), "BAKER");
    }

    #[test]
    fn test_single_letter_opening() {
        let mut board = Board::new();
        let mv = overlay(&mut board, "Q", ('h', 8), false);

        assert!(resolve(&board, &mv).is_empty());
        let primary = primary_word(&board, &mv);
        assert_eq!(primary.text(), "Q");
        assert_eq!(primary.len(), 1);
    }

    #[test]
    fn test_cross_through_existing_tile() {
        let mut board = Board::new();
        overlay(&mut board, "BAKER", ('h', 8), false);
        let mv = overlay(&mut board, "CA(K)E", ('j', 6), true);

        let words = resolve(&board, &mv);
        let texts: Vec<String> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["CAKE"]);
    }

    #[test]
    fn test_extension_picks_up_whole_run() {
        let mut board = Board::new();
        overlay(&mut board, "BAKER", ('h', 8), false);
        // S at m8 extends BAKER to BAKERS; FAKERS runs down column m.
        let mv = overlay(&mut board, "FAKERS", ('m', 3), true);

        let words = resolve(&board, &mv);
        let texts: Vec<String> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["FAKERS", "BAKERS"]);
    }

    #[test]
    fn test_parallel_word_forms_many_crosses() {
        let mut board = Board::new();
        overlay(&mut board, "BAKERS", ('h', 8), false);
        let mv = overlay(&mut board, "ALAN", ('h', 9), false);

        let words = resolve(&board, &mv);
        let texts: Vec<String> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["ALAN", "BA", "AL", "KA", "EN"]);
    }

    #[test]
    fn test_word_positions_are_ordered() {
        let mut board = Board::new();
        let mv = overlay(&mut board, "CAT", ('c', 5), true);

        let words = resolve(&board, &mv);
        let positions: Vec<String> = words[0].iter().map(|(p, _)| p.to_string()).collect();
        assert_eq!(positions, ["c5", "c6", "c7"]);
    }
}
