//! Game state: board, tile pools, and score history.
//!
//! `GameState` owns every piece of shared data — the board, the bag,
//! one rack and one score history per player, and the monotonic move
//! counter — and exposes the low-level mutations the turn loop and the
//! reconstruction search compose. It enforces no turn policy itself;
//! that belongs to [`crate::game::Game`].

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{GameRng, Move, PlayerId, PlayerMap, Tile};
use crate::tiles::{Rack, TileBag};

/// Complete state of one game.
///
/// ## Invariants
///
/// - `move_number` only ever increments; the player to move is
///   `move_number % player_count`.
/// - Score histories are append-only. Corrections (challenge
///   reversals, endgame adjustments) append new entries rather than
///   rewriting old ones.
/// - Tiles move between bag, racks, and board; apart from the
///   reconstruction paths that conjure reference tiles, none are
///   created or destroyed mid-game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    bag: TileBag,
    racks: PlayerMap<Rack>,
    scores: PlayerMap<Vec<i32>>,
    move_number: u32,
    #[serde(skip, default = "default_rng")]
    rng: GameRng,
    over: bool,
}

fn default_rng() -> GameRng {
    GameRng::new(0)
}

impl GameState {
    /// Start a fresh game: full bag, every rack drawn up to capacity.
    #[must_use]
    pub fn new(player_count: usize, seed: u64) -> Self {
        let mut state = Self {
            board: Board::new(),
            bag: TileBag::standard(),
            racks: PlayerMap::with_default(player_count),
            scores: PlayerMap::with_default(player_count),
            move_number: 0,
            rng: GameRng::new(seed),
            over: false,
        };

        for player in PlayerId::all(player_count) {
            state.refill_rack(player);
        }

        state
    }

    /// A bare state: empty board, bag, and racks. The reconstruction
    /// search builds its live games from this.
    #[must_use]
    pub fn bare(player_count: usize) -> Self {
        Self {
            board: Board::new(),
            bag: TileBag::empty(),
            racks: PlayerMap::with_default(player_count),
            scores: PlayerMap::with_default(player_count),
            move_number: 0,
            rng: GameRng::new(0),
            over: false,
        }
    }

    /// A reference state for the reconstruction search: a target board
    /// and score history, with the move counter set to the number of
    /// recorded turns.
    #[must_use]
    pub fn reference(board: Board, scores: PlayerMap<Vec<i32>>) -> Self {
        let move_number = scores.iter().map(|(_, list)| list.len() as u32).sum();
        Self {
            board,
            bag: TileBag::empty(),
            racks: PlayerMap::with_default(scores.player_count()),
            scores,
            move_number,
            rng: GameRng::new(0),
            over: false,
        }
    }

    // === Queries ===

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.racks.player_count()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn to_move(&self) -> PlayerId {
        PlayerId::new((self.move_number % self.player_count() as u32) as u8)
    }

    /// Number of moves played so far.
    #[must_use]
    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of tiles left in the bag.
    #[must_use]
    pub fn bag_len(&self) -> usize {
        self.bag.len()
    }

    /// A player's rack.
    #[must_use]
    pub fn rack(&self, player: PlayerId) -> &Rack {
        &self.racks[player]
    }

    /// A player's per-turn score history.
    #[must_use]
    pub fn scores(&self, player: PlayerId) -> &[i32] {
        &self.scores[player]
    }

    /// A player's running total.
    #[must_use]
    pub fn total(&self, player: PlayerId) -> i32 {
        self.scores[player].iter().sum()
    }

    /// Whether the game has concluded.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.over
    }

    // === Scaffolding ===

    /// Replace a player's rack with the given letters.
    ///
    /// Test and reference-game scaffolding: the tiles are conjured, not
    /// drawn from the bag.
    ///
    /// ## Panics
    ///
    /// Panics on letters outside the tile set or more than a rackful.
    pub fn set_rack(&mut self, player: PlayerId, letters: &str) {
        self.racks[player].clear();
        for letter in letters.chars() {
            match Tile::of(letter) {
                Some(tile) => self.racks[player].push(tile),
                None => panic!("no tile for letter {letter:?}"),
            }
        }
    }

    /// Empty the bag, returning its tiles. Stages endgame scenarios.
    pub fn drain_bag(&mut self) -> Vec<Tile> {
        self.bag.drain()
    }

    // === Mutations used by the turn loop ===

    /// Transfer a move's tiles from the player's rack to the board.
    ///
    /// The caller must have verified rack coverage; letters missing
    /// from the rack are skipped rather than conjured.
    pub(crate) fn commit_move(&mut self, player: PlayerId, mv: &Move) {
        for placement in mv.iter() {
            if let Some(tile) = self.racks[player].take(placement.tile.letter()) {
                self.board.set_tile(placement.position, tile);
            }
        }
    }

    /// Append a score entry for a player.
    pub(crate) fn append_score(&mut self, player: PlayerId, points: i32) {
        self.scores[player].push(points);
    }

    /// Draw from the bag until the rack is full or the bag is empty.
    pub(crate) fn refill_rack(&mut self, player: PlayerId) {
        while !self.racks[player].is_full() {
            match self.bag.draw(&mut self.rng) {
                Some(tile) => self.racks[player].push(tile),
                None => break,
            }
        }
    }

    /// Swap the given rack letters for fresh draws, returning the
    /// surrendered tiles to the bag afterwards.
    pub(crate) fn exchange_tiles(&mut self, player: PlayerId, letters: &[char]) {
        let mut surrendered = Vec::with_capacity(letters.len());
        for &letter in letters {
            if let Some(tile) = self.racks[player].take(letter) {
                surrendered.push(tile);
            }
        }

        for _ in 0..surrendered.len() {
            match self.bag.draw(&mut self.rng) {
                Some(tile) => self.racks[player].push(tile),
                None => break,
            }
        }

        self.bag.put_back(surrendered);
    }

    /// Consume the turn slot.
    pub(crate) fn advance_turn(&mut self) {
        self.move_number += 1;
    }

    /// Final scoring once `finisher` goes out with an empty bag.
    ///
    /// Every player's history gets a negative entry for the points left
    /// on their rack; the finisher then gains the sum of all opponents'
    /// leftovers.
    pub(crate) fn conclude(&mut self, finisher: PlayerId) {
        let mut forfeited = 0;
        for player in PlayerId::all(self.player_count()) {
            let leftover = self.racks[player].points();
            self.scores[player].push(-leftover);
            if player != finisher {
                forfeited += leftover;
            }
        }
        self.scores[finisher].push(forfeited);
        self.over = true;

        tracing::debug!(%finisher, forfeited, "game concluded");
    }

    // === Reconstruction support ===

    /// Apply a move without rack or bag bookkeeping.
    ///
    /// The reconstruction search plays hypothetical moves whose
    /// historical racks are unknown: tiles are conjured straight onto
    /// the board, the given score is appended, and the turn advances.
    /// Challenge adjudication, refill, and conclusion are all skipped.
    pub fn replay_move(&mut self, mv: &Move, points: i32) {
        let player = self.to_move();
        for placement in mv.iter() {
            self.board.set_tile(placement.position, placement.tile);
        }
        self.append_score(player, points);
        self.advance_turn();
    }

    /// Clone this state for a hypothetical branch.
    ///
    /// Takes `&mut self` because the clone forks the RNG, keeping
    /// branches on independent deterministic streams.
    #[must_use]
    pub fn clone_state(&mut self) -> Self {
        Self {
            board: self.board.clone(),
            bag: self.bag.clone(),
            racks: self.racks.clone(),
            scores: self.scores.clone(),
            move_number: self.move_number,
            rng: self.rng.fork(),
            over: self.over,
        }
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board)?;
        writeln!(f, "Moves played: {}", self.move_number)?;
        writeln!(f, "Player {}'s move", self.to_move().index() + 1)?;
        write!(f, "{} tiles remain in bag", self.bag.len())?;
        for player in PlayerId::all(self.player_count()) {
            write!(f, "\nPlayer {}: {}", player.index() + 1, self.total(player))?;
        }
        Ok(())
    }
}
