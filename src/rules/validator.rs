//! Move legality.
//!
//! Legality is purely geometric and is evaluated against the board as
//! it stands, never mutating it — the game loop and the reconstruction
//! search both probe hypothetical moves through this entry point. Rack
//! sufficiency is the caller's concern ([`crate::tiles::Rack::covers`]),
//! checked before any mutation so a rejected move has no side effect.

use crate::board::Board;
use crate::core::{Axis, Move, Position, CENTER};

/// Whether a move may legally be played on `board`.
///
/// A move is legal when, in order:
/// 1. it places at least one tile, each on a distinct square;
/// 2. no placed square is already occupied;
/// 3. the placements share a row or a column;
/// 4. the occupied run between the outermost placements has no gaps
///    once existing tiles are overlaid;
/// 5. the opening move covers the center square, and every later move
///    either absorbs an existing tile into its run or sits orthogonally
///    adjacent to one.
#[must_use]
pub fn is_legal(board: &Board, move_number: u32, mv: &Move) -> bool {
    if mv.is_empty() {
        return false;
    }

    let positions: Vec<Position> = mv.positions().collect();
    for (i, pos) in positions.iter().enumerate() {
        if positions[i + 1..].contains(pos) {
            return false;
        }
    }

    if positions.iter().any(|&pos| board.is_occupied(pos)) {
        return false;
    }

    let Some(axis) = move_axis(mv) else {
        return false;
    };

    let Some(run) = contiguous_run(board, mv, axis) else {
        return false;
    };

    if move_number == 0 {
        mv.covers(CENTER)
    } else {
        run.iter().any(|&pos| board.is_occupied(pos))
            || positions
                .iter()
                .any(|pos| pos.neighbors().any(|n| board.is_occupied(n)))
    }
}

/// The shared axis of a move's placements.
///
/// A single tile is trivially aligned and reports `Horizontal`; the
/// resolver finds any vertical word through its cross-walk. `None`
/// when the placements share neither a row nor a column.
#[must_use]
pub fn move_axis(mv: &Move) -> Option<Axis> {
    let first = mv.positions().next()?;

    if mv.positions().all(|p| p.row() == first.row()) {
        Some(Axis::Horizontal)
    } else if mv.positions().all(|p| p.col() == first.col()) {
        Some(Axis::Vertical)
    } else {
        None
    }
}

/// The full run of squares between the outermost placements, or `None`
/// if any square in between is covered by neither an existing tile nor
/// a new placement.
fn contiguous_run(board: &Board, mv: &Move, axis: Axis) -> Option<Vec<Position>> {
    let first = mv.positions().next()?;
    let min = mv.positions().map(|p| p.along(axis)).min()?;
    let max = mv.positions().map(|p| p.along(axis)).max()?;

    let mut run = Vec::with_capacity((max - min + 1) as usize);
    for coord in min..=max {
        let pos = match axis {
            Axis::Horizontal => Position::new(coord, first.row()),
            Axis::Vertical => Position::new(first.col(), coord),
        }?;

        if !board.is_occupied(pos) && !mv.covers(pos) {
            return None;
        }
        run.push(pos);
    }

    Some(run)
}
