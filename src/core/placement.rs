//! Move representation: a set of tile placements proposed in one turn.
//!
//! A `Move` exists only while a single turn is validated and scored; it is
//! never persisted. `SmallVec` keeps the common case (up to a full rack of
//! seven tiles) off the heap.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::position::Position;
use super::tile::Tile;

/// One (tile, coordinate) pair proposed in a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// The tile being placed.
    pub tile: Tile,
    /// Where it lands.
    pub position: Position,
}

impl Placement {
    /// Create a placement from a letter and position labels.
    ///
    /// Returns `None` if the letter is not in the tile set or the
    /// coordinate is out of bounds.
    #[must_use]
    pub fn from_labels(letter: char, col: char, row: u8) -> Option<Self> {
        Some(Self {
            tile: Tile::of(letter)?,
            position: Position::from_labels(col, row)?,
        })
    }
}

/// The full set of placements submitted in one turn.
///
/// ```
/// use wordgrid::core::Move;
///
/// let mv = Move::from_word("BAKER", ('h', 8), false).unwrap();
/// assert_eq!(mv.len(), 5);
/// assert_eq!(mv.letters().collect::<String>(), "BAKER");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    placements: SmallVec<[Placement; 7]>,
}

impl Move {
    /// An empty move (always illegal; build it up with [`Move::push`]).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a move from a word laid out in a straight line starting at
    /// `(col, row)` labels, going right (or down when `vertical`).
    ///
    /// Letters wrapped in parentheses denote tiles already on the board:
    /// they occupy a square of the run but are not placed. So
    /// `"(C)ODING"` places `ODING` in the five squares after the start.
    ///
    /// Returns `None` on a bad letter or an out-of-bounds coordinate.
    #[must_use]
    pub fn from_word(word: &str, start: (char, u8), vertical: bool) -> Option<Self> {
        let mut mv = Self::new();
        let mut pos = Position::from_labels(start.0, start.1)?;
        let mut first = true;
        let mut skip = false;

        for letter in word.chars() {
            match letter {
                '(' => skip = true,
                ')' => skip = false,
                _ => {
                    if !first {
                        pos = pos.step(crate::core::Axis::from_vertical(vertical), 1)?;
                    }
                    first = false;
                    if !skip {
                        mv.push(Placement {
                            tile: Tile::of(letter)?,
                            position: pos,
                        });
                    }
                }
            }
        }

        Some(mv)
    }

    /// Add a placement.
    pub fn push(&mut self, placement: Placement) {
        self.placements.push(placement);
    }

    /// Number of tiles placed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// True when no tiles are placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Iterate over the placements.
    pub fn iter(&self) -> impl Iterator<Item = &Placement> {
        self.placements.iter()
    }

    /// Iterate over the placed coordinates.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.placements.iter().map(|p| p.position)
    }

    /// Iterate over the placed letters.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.placements.iter().map(|p| p.tile.letter())
    }

    /// Whether the move places a tile at `position`.
    #[must_use]
    pub fn covers(&self, position: Position) -> bool {
        self.placements.iter().any(|p| p.position == position)
    }

    /// The tile this move places at `position`, if any.
    #[must_use]
    pub fn tile_at(&self, position: Position) -> Option<Tile> {
        self.placements
            .iter()
            .find(|p| p.position == position)
            .map(|p| p.tile)
    }
}

impl FromIterator<Placement> for Move {
    fn from_iter<I: IntoIterator<Item = Placement>>(iter: I) -> Self {
        Self {
            placements: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_word_horizontal() {
        let mv = Move::from_word("BAKER", ('h', 8), false).unwrap();
        assert_eq!(mv.len(), 5);

        let positions: Vec<String> = mv.positions().map(|p| p.to_string()).collect();
        assert_eq!(positions, ["h8", "i8", "j8", "k8", "l8"]);
    }

    #[test]
    fn test_from_word_vertical() {
        let mv = Move::from_word("CAKE", ('j', 6), true).unwrap();
        let positions: Vec<String> = mv.positions().map(|p| p.to_string()).collect();
        assert_eq!(positions, ["j6", "j7", "j8", "j9"]);
    }

    #[test]
    fn test_from_word_with_existing_tiles() {
        // (C)ODING: the C is already on the board at the start square.
        let mv = Move::from_word("(C)ODING", ('i', 8), true).unwrap();
        assert_eq!(mv.len(), 5);
        assert_eq!(mv.letters().collect::<String>(), "ODING");

        let positions: Vec<String> = mv.positions().map(|p| p.to_string()).collect();
        assert_eq!(positions, ["i9", "i10", "i11", "i12", "i13"]);

        // Existing tile mid-word.
        let mv = Move::from_word("CA(K)E", ('j', 6), true).unwrap();
        assert_eq!(mv.letters().collect::<String>(), "CAE");
        let positions: Vec<String> = mv.positions().map(|p| p.to_string()).collect();
        assert_eq!(positions, ["j6", "j7", "j9"]);
    }

    #[test]
    fn test_from_word_out_of_bounds() {
        assert!(Move::from_word("STYLISH", ('n', 14), true).is_none());
        assert!(Move::from_word("BAKER", ('m', 8), false).is_none());
    }

    #[test]
    fn test_covers_and_tile_at() {
        let mv = Move::from_word("BAKER", ('h', 8), false).unwrap();
        let center = Position::from_labels('h', 8).unwrap();
        assert!(mv.covers(center));
        assert_eq!(mv.tile_at(center).unwrap().letter(), 'B');

        let off = Position::from_labels('a', 1).unwrap();
        assert!(!mv.covers(off));
        assert!(mv.tile_at(off).is_none());
    }
}
