//! The shared 15×15 board.
//!
//! The tile overlay is an `im::HashMap`, so cloning a board is cheap and
//! clones share structure — the reconstruction search clones boards at
//! every branch, and the game loop scores moves against a hypothetical
//! copy before committing anything.
//!
//! Rendering is part of the compatibility surface: a header row of
//! column labels, then one row per line with a width-2 row label, `_`
//! for empty squares, `★` for the empty center, and the tile letter
//! otherwise.

pub mod layout;
pub mod square;

pub use square::Square;

use im::HashMap as ImHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Position, Tile, BOARD_SIZE, CENTER};

/// The game board: a total mapping from every coordinate to a square.
///
/// ```
/// use wordgrid::board::Board;
/// use wordgrid::core::{Position, Tile};
///
/// let mut board = Board::new();
/// let center = Position::from_labels('h', 8).unwrap();
/// assert!(!board.is_occupied(center));
///
/// board.set_tile(center, Tile::of('Q').unwrap());
/// assert_eq!(board.tile(center).unwrap().letter(), 'Q');
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    tiles: ImHashMap<Position, Tile>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The tile at a coordinate, if any.
    #[must_use]
    pub fn tile(&self, position: Position) -> Option<Tile> {
        self.tiles.get(&position).copied()
    }

    /// Whether a coordinate holds a tile.
    #[must_use]
    pub fn is_occupied(&self, position: Position) -> bool {
        self.tiles.contains_key(&position)
    }

    /// Place a tile on a coordinate.
    ///
    /// ## Panics
    ///
    /// Panics if the square is already occupied; the validator rejects
    /// overwrites before any mutation, so reaching an occupied square
    /// here is a bug in the caller.
    pub fn set_tile(&mut self, position: Position, tile: Tile) {
        let previous = self.tiles.insert(position, tile);
        assert!(
            previous.is_none(),
            "square {} is already occupied",
            position
        );
    }

    /// Number of tiles on the board.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// True when no tile has been placed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Full square view (tile plus multipliers) for a coordinate.
    #[must_use]
    pub fn square(&self, position: Position) -> Square {
        Square::at(position, self.tile(position))
    }

    /// Iterate over every coordinate in row-major order.
    pub fn positions() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| {
            (0..BOARD_SIZE).filter_map(move |col| Position::new(col, row))
        })
    }

    /// Iterate over occupied squares in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        Self::positions().filter_map(|pos| self.tile(pos).map(|tile| (pos, tile)))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "  ")?;
        for col in 0..BOARD_SIZE {
            write!(f, "{}", (b'a' + col) as char)?;
        }

        for row in 0..BOARD_SIZE {
            write!(f, "\n{:<2}", row + 1)?;
            for col in 0..BOARD_SIZE {
                let pos = Position::new(col, row).ok_or(std::fmt::Error)?;
                match self.tile(pos) {
                    Some(tile) => write!(f, "{}", tile.letter())?,
                    None if pos == CENTER => write!(f, "★")?,
                    None => write!(f, "_")?,
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_rendering() {
        let board = Board::new();
        assert_eq!(
            board.to_string(),
            "  abcdefghijklmno\n\
             1 _______________\n\
             2 _______________\n\
             3 _______________\n\
             4 _______________\n\
             5 _______________\n\
             6 _______________\n\
             7 _______________\n\
             8 _______★_______\n\
             9 _______________\n\
             10_______________\n\
             11_______________\n\
             12_______________\n\
             13_______________\n\
             14_______________\n\
             15_______________"
        );
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let mut board = Board::new();
        board.set_tile(Position::from_labels('c', 11).unwrap(), Tile::of('W').unwrap());
        assert_eq!(board.to_string(), board.to_string());
    }

    #[test]
    fn test_set_and_read_tile() {
        let mut board = Board::new();
        let pos = Position::from_labels('d', 4).unwrap();

        assert!(board.is_empty());
        board.set_tile(pos, Tile::of('M').unwrap());

        assert!(board.is_occupied(pos));
        assert_eq!(board.tile(pos).unwrap().letter(), 'M');
        assert_eq!(board.tile_count(), 1);
        assert_eq!(board.square(pos).tile.unwrap().letter(), 'M');
    }

    #[test]
    #[should_panic(expected = "already occupied")]
    fn test_overwrite_panics() {
        let mut board = Board::new();
        let pos = Position::from_labels('a', 1).unwrap();
        board.set_tile(pos, Tile::of('A').unwrap());
        board.set_tile(pos, Tile::of('B').unwrap());
    }

    #[test]
    fn test_clone_shares_structure() {
        let mut board = Board::new();
        for (i, pos) in Board::positions().take(50).enumerate() {
            let letter = (b'A' + (i % 26) as u8) as char;
            board.set_tile(pos, Tile::of(letter).unwrap());
        }

        let copy = board.clone();
        assert_eq!(copy, board);

        // Mutating the copy leaves the original untouched.
        let mut copy = copy;
        let free = Board::positions()
            .find(|&p| !copy.is_occupied(p))
            .unwrap();
        copy.set_tile(free, Tile::of('Z').unwrap());
        assert!(!board.is_occupied(free));
    }

    #[test]
    fn test_occupied_iteration_is_row_major() {
        let mut board = Board::new();
        let first = Position::from_labels('o', 1).unwrap();
        let second = Position::from_labels('a', 2).unwrap();
        board.set_tile(second, Tile::of('B').unwrap());
        board.set_tile(first, Tile::of('A').unwrap());

        let letters: Vec<char> = board.occupied().map(|(_, t)| t.letter()).collect();
        assert_eq!(letters, ['A', 'B']);
    }
}
