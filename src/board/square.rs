//! A single board cell as seen by the rules components.

use serde::{Deserialize, Serialize};

use crate::core::{Position, Tile};

use super::layout;

/// One cell of the board: its coordinate, fixed multipliers, and the
/// tile occupying it, if any.
///
/// Multipliers are assigned once from the premium layout; the tile slot
/// is the only mutable part, and a filled slot is never overwritten.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Square {
    /// The cell's coordinate.
    pub position: Position,
    /// The occupying tile, if any.
    pub tile: Option<Tile>,
    /// Multiplier applied to a newly placed tile's points, 1-3.
    pub letter_multiplier: u8,
    /// Multiplier applied to a whole word through a newly placed tile, 1-3.
    pub word_multiplier: u8,
}

impl Square {
    /// Assemble the square view for a coordinate.
    #[must_use]
    pub fn at(position: Position, tile: Option<Tile>) -> Self {
        Self {
            position,
            tile,
            letter_multiplier: layout::letter_multiplier(position),
            word_multiplier: layout::word_multiplier(position),
        }
    }

    /// True when a premium multiplier is attached to this cell.
    #[must_use]
    pub fn is_premium(&self) -> bool {
        self.letter_multiplier > 1 || self.word_multiplier > 1
    }
}
