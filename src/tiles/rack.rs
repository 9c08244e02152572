//! A player's hand of tiles.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Tile;

/// Maximum number of tiles a rack holds.
pub const RACK_CAPACITY: usize = 7;

/// An ordered sequence of up to seven tiles held by one player.
///
/// Lookup by letter is a linear first-match scan; with at most seven
/// tiles there is nothing to index.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rack {
    tiles: SmallVec<[Tile; RACK_CAPACITY]>,
}

impl Rack {
    /// An empty rack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tiles held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// True when no tiles are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// True when the rack holds [`RACK_CAPACITY`] tiles.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.tiles.len() >= RACK_CAPACITY
    }

    /// Append a drawn tile.
    ///
    /// ## Panics
    ///
    /// Panics if the rack is already full.
    pub fn push(&mut self, tile: Tile) {
        assert!(!self.is_full(), "rack already holds {} tiles", RACK_CAPACITY);
        self.tiles.push(tile);
    }

    /// Remove the first tile bearing `letter`, if one is held.
    pub fn take(&mut self, letter: char) -> Option<Tile> {
        let index = self.tiles.iter().position(|t| t.letter() == letter)?;
        Some(self.tiles.remove(index))
    }

    /// Whether every requested letter can be taken from this rack,
    /// respecting duplicates. Used for both move placement and tile
    /// exchange.
    #[must_use]
    pub fn covers(&self, letters: impl IntoIterator<Item = char>) -> bool {
        let mut remaining: SmallVec<[char; RACK_CAPACITY]> =
            self.tiles.iter().map(|t| t.letter()).collect();

        for letter in letters {
            match remaining.iter().position(|&l| l == letter) {
                Some(index) => {
                    remaining.remove(index);
                }
                None => return false,
            }
        }

        true
    }

    /// Iterate over the held tiles.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// The held letters, in rack order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.tiles.iter().map(|t| t.letter())
    }

    /// Total point value of the held tiles. Feeds the endgame
    /// adjustment.
    #[must_use]
    pub fn points(&self) -> i32 {
        self.tiles.iter().map(|t| i32::from(t.points())).sum()
    }

    /// Discard all tiles, returning them.
    pub fn clear(&mut self) -> Vec<Tile> {
        std::mem::take(&mut self.tiles).into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Move;

    fn rack_of(letters: &str) -> Rack {
        let mut rack = Rack::new();
        for letter in letters.chars() {
            rack.push(Tile::of(letter).unwrap());
        }
        rack
    }

    #[test]
    fn test_push_and_take() {
        let mut rack = rack_of("BAKER");
        assert_eq!(rack.len(), 5);

        let tile = rack.take('K').unwrap();
        assert_eq!(tile.letter(), 'K');
        assert_eq!(rack.len(), 4);

        assert!(rack.take('K').is_none());
        assert!(rack.take('&').is_none());
    }

    #[test]
    fn test_take_removes_first_match_only() {
        let mut rack = rack_of("BANANA");
        rack.take('A');
        assert_eq!(rack.letters().collect::<String>(), "BNANA");
    }

    #[test]
    fn test_covers_respects_duplicates() {
        let rack = rack_of("BANANA");

        assert!(rack.covers("NN".chars()));
        assert!(!rack.covers("NNN".chars()));
        assert!(!rack.covers("BAND".chars()));
    }

    #[test]
    fn test_covers_leaves_rack_untouched() {
        let rack = rack_of("BAKER");
        let mv = Move::from_word("BAKER", ('h', 8), false).unwrap();
        assert!(rack.covers(mv.letters()));
        assert_eq!(rack.len(), 5);
    }

    #[test]
    fn test_full_rack() {
        let rack = rack_of("AEINRST");
        assert!(rack.is_full());
    }

    #[test]
    #[should_panic(expected = "already holds")]
    fn test_push_past_capacity_panics() {
        let mut rack = rack_of("AEINRST");
        rack.push(Tile::of('Z').unwrap());
    }

    #[test]
    fn test_points() {
        // C3 + A1 + T1
        assert_eq!(rack_of("CAT").points(), 5);
        assert_eq!(Rack::new().points(), 0);
    }

    #[test]
    fn test_clear() {
        let mut rack = rack_of("CAT");
        let tiles = rack.clear();
        assert_eq!(tiles.len(), 3);
        assert!(rack.is_empty());
    }
}
