//! Lettered tiles and the fixed tile distribution.
//!
//! A tile is an immutable (letter, point value) pair. Tiles are created
//! once, at bag initialization, from [`LETTER_DISTRIBUTION`]; after that
//! ownership transfers between bag, rack, and board — tiles are never
//! duplicated.

use serde::{Deserialize, Serialize};

/// The letter used for blank tiles.
pub const BLANK: char = '?';

/// Full tile set: `(letter, count, points)`. 100 tiles total, including
/// two 0-point blanks.
pub const LETTER_DISTRIBUTION: &[(char, u8, u8)] = &[
    ('A', 9, 1),
    ('B', 2, 3),
    ('C', 2, 3),
    ('D', 4, 2),
    ('E', 12, 1),
    ('F', 2, 4),
    ('G', 3, 2),
    ('H', 2, 4),
    ('I', 9, 1),
    ('J', 1, 8),
    ('K', 1, 5),
    ('L', 4, 1),
    ('M', 2, 3),
    ('N', 6, 1),
    ('O', 8, 1),
    ('P', 2, 3),
    ('Q', 1, 10),
    ('R', 6, 1),
    ('S', 4, 1),
    ('T', 6, 1),
    ('U', 4, 1),
    ('V', 2, 4),
    ('W', 2, 4),
    ('X', 1, 8),
    ('Y', 2, 4),
    ('Z', 1, 10),
    (BLANK, 2, 0),
];

/// Point value of a letter, or `None` if the letter is not in the tile set.
#[must_use]
pub fn letter_points(letter: char) -> Option<u8> {
    LETTER_DISTRIBUTION
        .iter()
        .find(|&&(l, _, _)| l == letter)
        .map(|&(_, _, points)| points)
}

/// A single lettered tile.
///
/// ```
/// use wordgrid::core::Tile;
///
/// let tile = Tile::of('Q').unwrap();
/// assert_eq!(tile.letter(), 'Q');
/// assert_eq!(tile.points(), 10);
///
/// assert!(Tile::of('&').is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    letter: char,
    points: u8,
}

impl Tile {
    /// Create the tile for a letter, looking up its point value.
    ///
    /// Returns `None` for characters outside the tile set.
    #[must_use]
    pub fn of(letter: char) -> Option<Self> {
        letter_points(letter).map(|points| Self { letter, points })
    }

    /// The tile's uppercase letter.
    #[must_use]
    pub const fn letter(self) -> char {
        self.letter
    }

    /// The tile's base point value.
    #[must_use]
    pub const fn points(self) -> u8 {
        self.points
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter)
    }
}
