//! Core engine types: players, coordinates, tiles, moves, RNG.
//!
//! This module contains the fundamental building blocks shared by the
//! board, the rules cluster, the game loop, and the reconstruction
//! search.

pub mod placement;
pub mod player;
pub mod position;
pub mod rng;
pub mod tile;

pub use placement::{Move, Placement};
pub use player::{PlayerId, PlayerMap};
pub use position::{Axis, Position, BOARD_SIZE, CENTER};
pub use rng::GameRng;
pub use tile::{letter_points, Tile, BLANK, LETTER_DISTRIBUTION};
