//! Move scoring.
//!
//! Letter and word multipliers fire only on the turn their square is
//! filled: tiles placed in earlier turns contribute their base points
//! to any later word that crosses them, but their premiums stay spent.

use rustc_hash::FxHashSet;

use crate::board::Board;
use crate::core::{Move, Position};
use crate::tiles::RACK_CAPACITY;

use super::resolver::Word;

/// Bonus for playing a full rack in one move.
pub const BINGO_BONUS: i32 = 50;

/// Total score for a move, given the words it forms.
///
/// Per word: each letter's points, times its square's letter multiplier
/// when that square was filled by this move; the subtotal then times the
/// product of word multipliers of the squares this move filled. Word
/// subtotals sum, and a seven-tile move earns [`BINGO_BONUS`] on top.
#[must_use]
pub fn score(words: &[Word], board: &Board, mv: &Move) -> i32 {
    let new_squares: FxHashSet<Position> = mv.positions().collect();

    let mut total = 0;
    for word in words {
        let mut subtotal = 0i32;
        let mut multiplier = 1i32;

        for (pos, tile) in word.iter() {
            let points = i32::from(tile.points());
            if new_squares.contains(&pos) {
                let square = board.square(pos);
                subtotal += points * i32::from(square.letter_multiplier);
                multiplier *= i32::from(square.word_multiplier);
            } else {
                subtotal += points;
            }
        }

        total += subtotal * multiplier;
    }

    if mv.len() == RACK_CAPACITY {
        total += BINGO_BONUS;
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::resolver;

    fn overlay(board: &mut Board, word: &str, start: (char, u8), vertical: bool) -> Move {
        let mv = Move::from_word(word, start, vertical).unwrap();
        for p in mv.iter() {
            board.set_tile(p.position, p.tile);
        }
        mv
    }

    fn play(board: &mut Board, word: &str, start: (char, u8), vertical: bool) -> i32 {
        let mv = overlay(board, word, start, vertical);
        let words = resolver::resolve(board, &mv);
        score(&words, board, &mv)
    }

    #[test]
    fn test_opening_baker_scores_12() {
        let mut board = Board::new();
        // B3 A1 K5 E1, R1 doubled on l8.
        assert_eq!(play(&mut board, "BAKER", ('h', 8), false), 12);
    }

    #[test]
    fn test_cross_word_premium_applies_to_new_tile_only() {
        let mut board = Board::new();
        play(&mut board, "BAKER", ('h', 8), false);
        // C3 tripled on j6; the existing K keeps its base 5.
        assert_eq!(play(&mut board, "CA(K)E", ('j', 6), true), 16);
    }

    #[test]
    fn test_word_multiplier_on_new_square() {
        let mut board = Board::new();
        play(&mut board, "BAKER", ('h', 8), false);
        // FAKER doubled through l4.
        assert_eq!(play(&mut board, "FAKE(R)", ('l', 4), true), 24);
    }

    #[test]
    fn test_extension_scores_both_words() {
        let mut board = Board::new();
        play(&mut board, "BAKER", ('h', 8), false);
        // FAKERS doubled at m3 with R doubled at m7 (28), plus BAKERS
        // at base value (12): the l8 premium was spent last turn.
        assert_eq!(play(&mut board, "FAKERS", ('m', 3), true), 40);
    }

    #[test]
    fn test_parallel_play_scores_every_cross() {
        let mut board = Board::new();
        assert_eq!(play(&mut board, "BAKERS", ('h', 8), false), 13);
        // ALAN (5 with L doubled) + BA(4) + AL(3) + KA(6) + EN(2).
        assert_eq!(play(&mut board, "ALAN", ('h', 9), false), 20);
    }

    #[test]
    fn test_bingo_bonus() {
        let mut board = Board::new();
        play(&mut board, "BAKER", ('h', 8), false);
        // Seven tiles: (16 + 1) * 2 + 50.
        assert_eq!(play(&mut board, "(R)AKELAKE", ('l', 8), true), 84);
    }

    #[test]
    fn test_score_is_deterministic() {
        let mut board = Board::new();
        let mv = overlay(&mut board, "QUIZ", ('h', 8), false);
        let words = resolver::resolve(&board, &mv);

        let first = score(&words, &board, &mv);
        assert_eq!(score(&words, &board, &mv), first);
    }

    #[test]
    fn test_single_letter_word_scores_its_premium() {
        let mut board = Board::new();
        let mv = overlay(&mut board, "Q", ('h', 8), false);
        let word = resolver::primary_word(&board, &mv);
        assert_eq!(score(&[word], &board, &mv), 10);
    }
}
