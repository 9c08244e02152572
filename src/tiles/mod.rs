//! Tile containers: the shared draw pool and per-player racks.

pub mod bag;
pub mod rack;

pub use bag::TileBag;
pub use rack::{Rack, RACK_CAPACITY};
