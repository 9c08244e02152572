//! Fixed premium-square layout.
//!
//! Coordinates are 0-based `(col, row)` pairs. The layout is the
//! classic symmetric arrangement: eight triple-word squares on the
//! edges, double-word diagonals, and letter premiums mirrored across
//! both axes. The center star anchors the opening move but carries no
//! multiplier of its own.

use crate::core::Position;

/// Triple-word-score squares.
pub const TRIPLE_WORD: &[(u8, u8)] = &[
    (0, 0),
    (7, 0),
    (14, 0),
    (0, 7),
    (14, 7),
    (0, 14),
    (7, 14),
    (14, 14),
];

/// Double-word-score squares: the four diagonals, excluding the center.
pub const DOUBLE_WORD: &[(u8, u8)] = &[
    (1, 1),
    (2, 2),
    (3, 3),
    (4, 4),
    (10, 10),
    (11, 11),
    (12, 12),
    (13, 13),
    (13, 1),
    (12, 2),
    (11, 3),
    (10, 4),
    (4, 10),
    (3, 11),
    (2, 12),
    (1, 13),
];

/// Triple-letter-score squares.
pub const TRIPLE_LETTER: &[(u8, u8)] = &[
    (5, 1),
    (9, 1),
    (1, 5),
    (5, 5),
    (9, 5),
    (13, 5),
    (1, 9),
    (5, 9),
    (9, 9),
    (13, 9),
    (5, 13),
    (9, 13),
];

/// Double-letter-score squares.
pub const DOUBLE_LETTER: &[(u8, u8)] = &[
    (3, 0),
    (11, 0),
    (6, 2),
    (8, 2),
    (0, 3),
    (7, 3),
    (14, 3),
    (2, 6),
    (6, 6),
    (8, 6),
    (12, 6),
    (3, 7),
    (11, 7),
    (2, 8),
    (6, 8),
    (8, 8),
    (12, 8),
    (0, 11),
    (7, 11),
    (14, 11),
    (6, 12),
    (8, 12),
    (3, 14),
    (11, 14),
];

/// Letter multiplier for a square, `1`, `2`, or `3`.
#[must_use]
pub fn letter_multiplier(position: Position) -> u8 {
    let key = (position.col(), position.row());
    if DOUBLE_LETTER.contains(&key) {
        2
    } else if TRIPLE_LETTER.contains(&key) {
        3
    } else {
        1
    }
}

/// Word multiplier for a square, `1`, `2`, or `3`.
#[must_use]
pub fn word_multiplier(position: Position) -> u8 {
    let key = (position.col(), position.row());
    if DOUBLE_WORD.contains(&key) {
        2
    } else if TRIPLE_WORD.contains(&key) {
        3
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BOARD_SIZE, CENTER};

    fn all_positions() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| {
            (0..BOARD_SIZE).filter_map(move |col| Position::new(col, row))
        })
    }

    #[test]
    fn test_premium_counts() {
        assert_eq!(TRIPLE_WORD.len(), 8);
        assert_eq!(DOUBLE_WORD.len(), 16);
        assert_eq!(TRIPLE_LETTER.len(), 12);
        assert_eq!(DOUBLE_LETTER.len(), 24);
    }

    #[test]
    fn test_premiums_do_not_overlap() {
        for pos in all_positions() {
            let letter = letter_multiplier(pos);
            let word = word_multiplier(pos);
            assert!(
                letter == 1 || word == 1,
                "square {} has both letter and word premiums",
                pos
            );
        }
    }

    #[test]
    fn test_layout_is_symmetric() {
        for pos in all_positions() {
            let mirror_col = Position::new(BOARD_SIZE - 1 - pos.col(), pos.row()).unwrap();
            let mirror_row = Position::new(pos.col(), BOARD_SIZE - 1 - pos.row()).unwrap();

            assert_eq!(letter_multiplier(pos), letter_multiplier(mirror_col));
            assert_eq!(letter_multiplier(pos), letter_multiplier(mirror_row));
            assert_eq!(word_multiplier(pos), word_multiplier(mirror_col));
            assert_eq!(word_multiplier(pos), word_multiplier(mirror_row));
        }
    }

    #[test]
    fn test_center_has_no_multiplier() {
        assert_eq!(letter_multiplier(CENTER), 1);
        assert_eq!(word_multiplier(CENTER), 1);
    }

    #[test]
    fn test_known_squares() {
        let l8 = Position::from_labels('l', 8).unwrap();
        assert_eq!(letter_multiplier(l8), 2);

        let j6 = Position::from_labels('j', 6).unwrap();
        assert_eq!(letter_multiplier(j6), 3);

        let m3 = Position::from_labels('m', 3).unwrap();
        assert_eq!(word_multiplier(m3), 2);

        let h15 = Position::from_labels('h', 15).unwrap();
        assert_eq!(word_multiplier(h15), 3);
    }
}
