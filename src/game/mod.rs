//! Game orchestration: state, the turn loop, and injected decision
//! capabilities.

pub mod engine;
pub mod oracle;
pub mod state;

pub use engine::Game;
pub use oracle::{
    AcceptAll, AlwaysChallenge, ChallengeOracle, NoChallenges, RejectAll, WordJudge, WordList,
};
pub use state::GameState;
