//! Recovery document parsing.
//!
//! A recovery document is a JSON object with two fields: `board`, a
//! 15×15 grid of cells (`""` for an empty square, a single letter for
//! an occupied one), and `scores`, one per-turn score history per
//! player. Parsing validates shape and cell contents and produces the
//! reference [`GameState`] the search runs against.

use serde::Deserialize;

use crate::board::Board;
use crate::core::{PlayerMap, Position, Tile, BOARD_SIZE};
use crate::game::GameState;

/// Why a recovery document was rejected.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum RecoveryError {
    /// The document is not valid JSON of the expected shape.
    #[display("malformed recovery document: {_0}")]
    Json(serde_json::Error),

    /// The board grid does not have [`BOARD_SIZE`] rows.
    #[display("expected {BOARD_SIZE} board rows, found {found}")]
    RowCount {
        #[error(not(source))]
        found: usize,
    },

    /// A board row does not have [`BOARD_SIZE`] cells.
    #[display("board row {row} has {len} cells, expected {BOARD_SIZE}")]
    RaggedRow {
        #[error(not(source))]
        row: usize,
        len: usize,
    },

    /// A cell holds something other than `""` or a single tile letter.
    #[display("board cell at row {row}, column {column} is not a tile: {cell:?}")]
    BadCell {
        #[error(not(source))]
        row: usize,
        column: usize,
        cell: String,
    },

    /// The score list is empty.
    #[display("score histories for at least one player are required")]
    NoPlayers,
}

/// The raw shape of a recovery document.
#[derive(Debug, Deserialize)]
pub struct RecoveryInput {
    /// Rows of cells, top to bottom; each cell is `""` or one letter.
    pub board: Vec<Vec<String>>,
    /// One score history per player, in seating order.
    pub scores: Vec<Vec<i32>>,
}

/// Parse a recovery document without validating the grid.
pub fn parse(doc: &str) -> Result<RecoveryInput, RecoveryError> {
    serde_json::from_str(doc).map_err(RecoveryError::Json)
}

/// Build the reference state a reconstruction search targets.
///
/// Validates the grid shape and every cell, then assembles the target
/// board and score histories.
pub fn reference_game(input: &RecoveryInput) -> Result<GameState, RecoveryError> {
    if input.scores.is_empty() {
        return Err(RecoveryError::NoPlayers);
    }
    if input.board.len() != BOARD_SIZE as usize {
        return Err(RecoveryError::RowCount {
            found: input.board.len(),
        });
    }

    let mut board = Board::new();
    for (row, cells) in input.board.iter().enumerate() {
        if cells.len() != BOARD_SIZE as usize {
            return Err(RecoveryError::RaggedRow {
                row,
                len: cells.len(),
            });
        }

        for (column, cell) in cells.iter().enumerate() {
            if cell.is_empty() {
                continue;
            }

            let tile = cell
                .chars()
                .next()
                .filter(|_| cell.chars().count() == 1)
                .and_then(Tile::of);
            let position = Position::new(column as u8, row as u8);
            match (tile, position) {
                (Some(tile), Some(position)) => board.set_tile(position, tile),
                _ => {
                    return Err(RecoveryError::BadCell {
                        row,
                        column,
                        cell: cell.clone(),
                    })
                }
            }
        }
    }

    let scores = PlayerMap::new(input.scores.len(), |p| input.scores[p.index()].clone());
    Ok(GameState::reference(board, scores))
}
