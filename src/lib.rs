//! # wordgrid
//!
//! A turn-based word-placement board game engine, with an offline
//! search that reconstructs move sequences from a finished board and
//! its score histories.
//!
//! ## Design Principles
//!
//! 1. **N-Player First**: Every API takes `player_count` as context.
//!    Turn order is always `move_number % player_count`.
//!
//! 2. **Injected Capabilities**: The engine embeds no lexicon and no
//!    challenge policy. Word acceptability and challenge decisions are
//!    strategy objects supplied at construction.
//!
//! 3. **Shared Rules**: Validation, word resolution, and scoring are
//!    pure functions over board state, used identically by the live
//!    game loop and the reconstruction search.
//!
//! ## Architecture
//!
//! - **Persistent Board**: the tile overlay is an `im::HashMap`, so
//!   cloning a board is O(1) and the search can branch freely.
//!
//! - **Append-Only Scores**: per-player score histories only grow;
//!   challenge reversals and endgame adjustments are new entries, which
//!   is what makes score-matched reconstruction well-defined.
//!
//! ## Modules
//!
//! - `core`: positions, tiles, moves, players, RNG
//! - `board`: the 15×15 board, premium layout, rendering
//! - `tiles`: the bag and per-player racks
//! - `rules`: move validation, word resolution, scoring
//! - `game`: game state and the turn loop, with injected judges
//! - `recover`: recovery-document parsing and move reconstruction

pub mod board;
pub mod core;
pub mod game;
pub mod recover;
pub mod rules;
pub mod tiles;

// Re-export commonly used types
pub use crate::core::{Axis, Move, Placement, PlayerId, PlayerMap, Position, Tile, BOARD_SIZE};

pub use crate::board::Board;

pub use crate::tiles::{Rack, TileBag, RACK_CAPACITY};

pub use crate::rules::Word;

pub use crate::game::{
    AcceptAll, AlwaysChallenge, ChallengeOracle, Game, GameState, NoChallenges, RejectAll,
    WordJudge, WordList,
};

pub use crate::recover::{reconstruct, MoveSearch, RecoveryError, RecoveryInput};
