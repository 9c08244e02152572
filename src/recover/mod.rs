//! Offline game reconstruction.
//!
//! Given a finished (or partial) game's board and per-turn score
//! histories, recover move sequences that could have produced it:
//! parse the recovery document ([`input`]), then walk the candidate
//! space ([`search`]).

pub mod input;
pub mod search;

pub use input::{parse, reference_game, RecoveryError, RecoveryInput};
pub use search::MoveSearch;

/// Parse a recovery document and start a reconstruction search over it.
pub fn reconstruct(doc: &str) -> Result<MoveSearch, RecoveryError> {
    let input = parse(doc)?;
    let reference = reference_game(&input)?;
    Ok(MoveSearch::new(reference))
}
