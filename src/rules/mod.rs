//! The move-legality and scoring engine.
//!
//! Three stages run in order each turn: the [`validator`] decides
//! whether a placement set may be played at all, the [`resolver`]
//! extracts every word the placement forms, and the [`scorer`] turns
//! the word set into a point total. All three are pure with respect to
//! board state and are shared verbatim by the live game loop and the
//! reconstruction search.

pub mod resolver;
pub mod scorer;
pub mod validator;

pub use resolver::{primary_word, resolve, Word};
pub use scorer::{score, BINGO_BONUS};
pub use validator::{is_legal, move_axis};
