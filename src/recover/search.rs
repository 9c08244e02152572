//! Move-sequence reconstruction.
//!
//! Given a reference state (a final board plus per-turn score
//! histories), `MoveSearch` enumerates the move sequences that replay,
//! turn by turn, from an empty board to exactly the reference board
//! while matching every recorded score.
//!
//! The search is a depth-first walk over partial games. At each node
//! the candidate moves are subsets of the *frontier* — squares
//! occupied in the reference board but still empty in the live game —
//! restricted to one board line, validated with the live rules, and
//! kept only when their score equals the recorded entry for that turn.
//! Branches replay moves with conjured tiles ([`GameState::replay_move`]),
//! since the historical racks and bag are unknowable.
//!
//! Sequences are yielded lazily; boards use structural sharing, so
//! branching is cheap.

use tracing::trace;

use crate::board::Board;
use crate::core::{Axis, Move, Placement, Position, Tile, BOARD_SIZE};
use crate::game::GameState;
use crate::rules;
use crate::tiles::RACK_CAPACITY;

/// Lazy iterator over move sequences that reproduce a reference game.
pub struct MoveSearch {
    reference: GameState,
    stack: Vec<Frame>,
    pending: Option<Vec<Move>>,
}

struct Frame {
    game: GameState,
    moves: Vec<Move>,
    candidates: std::vec::IntoIter<(Move, i32)>,
}

impl MoveSearch {
    /// Start a search against a reference state (see
    /// [`GameState::reference`]).
    #[must_use]
    pub fn new(reference: GameState) -> Self {
        let live = GameState::bare(reference.player_count());

        let mut search = Self {
            reference,
            stack: Vec::new(),
            pending: None,
        };

        if search.reference.move_number() == 0 {
            // A zero-move reference is its own (empty) reconstruction,
            // provided the board is also empty.
            if search.reference.board().is_empty() {
                search.pending = Some(Vec::new());
            }
        } else {
            let candidates = search.candidates(&live);
            search.stack.push(Frame {
                game: live,
                moves: Vec::new(),
                candidates: candidates.into_iter(),
            });
        }

        search
    }

    /// Candidate (move, score) pairs for the player to move in `live`.
    fn candidates(&self, live: &GameState) -> Vec<(Move, i32)> {
        let player = live.to_move();
        let turn = live.move_number() as usize / live.player_count();
        let Some(&target) = self.reference.scores(player).get(turn) else {
            return Vec::new();
        };

        let frontier: Vec<(Position, Tile)> = self
            .reference
            .board()
            .occupied()
            .filter(|&(pos, _)| !live.board().is_occupied(pos))
            .collect();

        let mut out = Vec::new();
        for axis in [Axis::Horizontal, Axis::Vertical] {
            for line in 0..BOARD_SIZE {
                let cells: Vec<(Position, Tile)> = frontier
                    .iter()
                    .copied()
                    .filter(|(pos, _)| pos.along(axis.cross()) == line)
                    .collect();

                for mask in 1u32..(1u32 << cells.len()) {
                    let picked = mask.count_ones() as usize;
                    if picked > RACK_CAPACITY {
                        continue;
                    }
                    // Single-tile moves are axis-agnostic; keep one copy.
                    if picked == 1 && axis == Axis::Vertical {
                        continue;
                    }

                    let mv: Move = cells
                        .iter()
                        .enumerate()
                        .filter(|(i, _)| mask & (1 << i) != 0)
                        .map(|(_, &(position, tile))| Placement { tile, position })
                        .collect();

                    if rules::is_legal(live.board(), live.move_number(), &mv)
                        && score_on(live.board(), &mv) == target
                    {
                        out.push((mv, target));
                    }
                }
            }
        }

        trace!(
            %player,
            turn,
            target,
            frontier = frontier.len(),
            candidates = out.len(),
            "expanded search node"
        );
        out
    }
}

/// Score a hypothetical move against a board that does not yet hold it.
fn score_on(board: &Board, mv: &Move) -> i32 {
    let mut preview = board.clone();
    for placement in mv.iter() {
        preview.set_tile(placement.position, placement.tile);
    }

    let mut words = rules::resolve(&preview, mv);
    if words.is_empty() {
        words.push(rules::primary_word(&preview, mv));
    }
    rules::score(&words, &preview, mv)
}

impl Iterator for MoveSearch {
    type Item = Vec<Move>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(sequence) = self.pending.take() {
            return Some(sequence);
        }

        loop {
            let frame = self.stack.last_mut()?;
            let Some((mv, points)) = frame.candidates.next() else {
                self.stack.pop();
                continue;
            };

            let mut game = frame.game.clone_state();
            let mut moves = frame.moves.clone();
            game.replay_move(&mv, points);
            moves.push(mv);

            if game.move_number() == self.reference.move_number() {
                if game.board() == self.reference.board() {
                    return Some(moves);
                }
            } else {
                let candidates = self.candidates(&game);
                self.stack.push(Frame {
                    game,
                    moves,
                    candidates: candidates.into_iter(),
                });
            }
        }
    }
}
