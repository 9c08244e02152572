//! Board coordinates and axes.
//!
//! The board is a fixed 15×15 grid. Positions are stored 0-based
//! internally; the player-facing labels are columns `'a'..='o'` and rows
//! `1..=15`, so `('h', 8)` is the center square.
//!
//! Construction is fallible: an out-of-bounds coordinate has no
//! `Position`, which keeps every downstream component total over its
//! inputs.

use serde::{Deserialize, Serialize};

/// Width and height of the board in squares.
pub const BOARD_SIZE: u8 = 15;

/// The opening-move anchor square, `h8`.
pub const CENTER: Position = Position { col: 7, row: 7 };

/// A square coordinate on the board.
///
/// ```
/// use wordgrid::core::Position;
///
/// let pos = Position::from_labels('h', 8).unwrap();
/// assert_eq!(pos.column_label(), 'h');
/// assert_eq!(pos.row_label(), 8);
///
/// // Out of bounds coordinates are unrepresentable.
/// assert!(Position::from_labels('p', 1).is_none());
/// assert!(Position::from_labels('a', 16).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    col: u8,
    row: u8,
}

impl Position {
    /// Create a position from 0-based column and row indices.
    #[must_use]
    pub const fn new(col: u8, row: u8) -> Option<Self> {
        if col < BOARD_SIZE && row < BOARD_SIZE {
            Some(Self { col, row })
        } else {
            None
        }
    }

    /// Create a position from the player-facing labels: column `'a'..='o'`,
    /// row `1..=15`.
    #[must_use]
    pub fn from_labels(col: char, row: u8) -> Option<Self> {
        if !col.is_ascii_lowercase() || row == 0 {
            return None;
        }
        Self::new(col as u8 - b'a', row - 1)
    }

    /// 0-based column index.
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// 0-based row index.
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Column label, `'a'..='o'`.
    #[must_use]
    pub const fn column_label(self) -> char {
        (b'a' + self.col) as char
    }

    /// Row label, `1..=15`.
    #[must_use]
    pub const fn row_label(self) -> u8 {
        self.row + 1
    }

    /// Coordinate along the given axis (column for horizontal, row for
    /// vertical walks).
    #[must_use]
    pub const fn along(self, axis: Axis) -> u8 {
        match axis {
            Axis::Horizontal => self.col,
            Axis::Vertical => self.row,
        }
    }

    /// Step one square along an axis. `None` at the board edge.
    #[must_use]
    pub fn step(self, axis: Axis, delta: i8) -> Option<Self> {
        let (dc, dr) = match axis {
            Axis::Horizontal => (delta, 0),
            Axis::Vertical => (0, delta),
        };
        let col = self.col.checked_add_signed(dc)?;
        let row = self.row.checked_add_signed(dr)?;
        Self::new(col, row)
    }

    /// The up-to-four orthogonal neighbors.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        [
            self.step(Axis::Horizontal, -1),
            self.step(Axis::Horizontal, 1),
            self.step(Axis::Vertical, -1),
            self.step(Axis::Vertical, 1),
        ]
        .into_iter()
        .flatten()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.column_label(), self.row_label())
    }
}

/// Orientation of a word or a walk across the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Along a row, increasing column.
    Horizontal,
    /// Along a column, increasing row.
    Vertical,
}

impl Axis {
    /// `Vertical` when the flag is set, `Horizontal` otherwise.
    #[must_use]
    pub const fn from_vertical(vertical: bool) -> Self {
        if vertical {
            Axis::Vertical
        } else {
            Axis::Horizontal
        }
    }

    /// The perpendicular axis.
    #[must_use]
    pub const fn cross(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}
