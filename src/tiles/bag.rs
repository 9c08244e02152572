//! The shared draw pool.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Tile, LETTER_DISTRIBUTION};

/// The unordered multiset of undrawn tiles.
///
/// The bag shrinks on draw and grows again when an exchange returns
/// tiles. Drawing from an empty bag yields `None`; a depleted bag is a
/// normal part of the endgame, not an error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileBag {
    tiles: Vec<Tile>,
}

impl TileBag {
    /// The full 100-tile starting bag.
    #[must_use]
    pub fn standard() -> Self {
        let mut tiles = Vec::with_capacity(100);
        for &(letter, count, points) in LETTER_DISTRIBUTION {
            debug_assert_eq!(Tile::of(letter).map(Tile::points), Some(points));
            for _ in 0..count {
                tiles.extend(Tile::of(letter));
            }
        }
        Self { tiles }
    }

    /// An empty bag, for reference games and endgame scenarios.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of undrawn tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// True when no tiles remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Draw one tile uniformly at random, or `None` when the bag is
    /// empty.
    pub fn draw(&mut self, rng: &mut GameRng) -> Option<Tile> {
        if self.tiles.is_empty() {
            return None;
        }
        let index = rng.gen_index(self.tiles.len());
        Some(self.tiles.swap_remove(index))
    }

    /// Return exchanged tiles to the pool.
    pub fn put_back(&mut self, tiles: impl IntoIterator<Item = Tile>) {
        self.tiles.extend(tiles);
    }

    /// Remove every tile from the bag, leaving it empty.
    ///
    /// Used to stage endgame scenarios and reconstruction reference
    /// games, where the bag's contents are unknown.
    pub fn drain(&mut self) -> Vec<Tile> {
        std::mem::take(&mut self.tiles)
    }
}
