//! The turn loop.
//!
//! `Game` wires a [`GameState`] to the injected decision capabilities
//! and drives one move at a time: validate, resolve, score, adjudicate
//! challenges, then commit or revert. Every path through [`Game::play`]
//! consumes the turn slot, so the rotation never stalls on a bad move.

use tracing::debug;

use crate::core::{Move, PlayerId};
use crate::rules;
use crate::tiles::RACK_CAPACITY;

use super::oracle::{AcceptAll, ChallengeOracle, NoChallenges, WordJudge};
use super::state::GameState;

/// A running game: state plus the word judge and challenge oracle.
///
/// ## Example
///
/// ```
/// use wordgrid::game::Game;
///
/// let mut game = Game::new(2, 42);
/// let mover = game.state().to_move();
/// game.state_mut().set_rack(mover, "BAKERXX");
/// assert!(game.play_word("BAKER", ('h', 8), false));
/// assert_eq!(game.state().scores(mover), [12]);
/// ```
pub struct Game {
    state: GameState,
    judge: Box<dyn WordJudge>,
    challenges: Box<dyn ChallengeOracle>,
}

impl Game {
    /// A fresh game with a permissive judge and no challengers.
    #[must_use]
    pub fn new(player_count: usize, seed: u64) -> Self {
        Self {
            state: GameState::new(player_count, seed),
            judge: Box::new(AcceptAll),
            challenges: Box::new(NoChallenges),
        }
    }

    /// Replace the word judge.
    #[must_use]
    pub fn with_judge(mut self, judge: impl WordJudge + 'static) -> Self {
        self.judge = Box::new(judge);
        self
    }

    /// Replace the challenge oracle.
    #[must_use]
    pub fn with_challenges(mut self, oracle: impl ChallengeOracle + 'static) -> Self {
        self.challenges = Box::new(oracle);
        self
    }

    /// The underlying state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access to the underlying state, for staging scenarios.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Play one move for the player to move.
    ///
    /// Returns `false` when the game is already over or the move is
    /// rejected outright (illegal placement, or tiles the rack does not
    /// hold); a rejected move still consumes the turn. Returns `true`
    /// when the move resolves, whether it scored or was reverted by a
    /// successful challenge.
    pub fn play(&mut self, mv: &Move) -> bool {
        if self.state.is_over() {
            return false;
        }

        let mover = self.state.to_move();
        let legal = rules::is_legal(self.state.board(), self.state.move_number(), mv)
            && self.state.rack(mover).covers(mv.letters());
        if !legal {
            debug!(%mover, placements = mv.len(), "rejected move");
            self.state.advance_turn();
            return false;
        }

        // Preview the move on a throwaway board to resolve and score it.
        let mut preview = self.state.board().clone();
        for placement in mv.iter() {
            preview.set_tile(placement.position, placement.tile);
        }
        let mut words = rules::resolve(&preview, mv);
        if words.is_empty() {
            // Single-tile opener: the lone tile is still a scoring word.
            words.push(rules::primary_word(&preview, mv));
        }
        let points = rules::score(&words, &preview, mv);

        let challenged = PlayerId::all(self.state.player_count())
            .filter(|&p| p != mover)
            .any(|p| self.challenges.challenges(p, mover, &words));

        if challenged {
            let rejected = words.iter().any(|w| !self.judge.accept(&w.text()));
            if rejected {
                debug!(%mover, "challenge upheld, move reverted");
                self.state.append_score(mover, 0);
                self.state.advance_turn();
                return true;
            }
        }

        self.state.commit_move(mover, mv);
        self.state.append_score(mover, points);
        self.state.refill_rack(mover);
        debug!(%mover, points, "move played");

        if self.state.bag_len() == 0 && self.state.rack(mover).is_empty() {
            self.state.conclude(mover);
        }

        self.state.advance_turn();
        true
    }

    /// Play a move described in word notation. See
    /// [`Move::from_word`] for the notation; returns `false` on
    /// notation that does not parse, without consuming the turn.
    pub fn play_word(&mut self, word: &str, start: (char, u8), vertical: bool) -> bool {
        match Move::from_word(word, start, vertical) {
            Some(mv) => self.play(&mv),
            None => false,
        }
    }

    /// Exchange rack tiles for fresh draws instead of playing.
    ///
    /// Allowed only while the bag still holds a full rack's worth of
    /// tiles, and only for letters the rack holds. A successful
    /// exchange consumes the turn; a rejected one does not.
    pub fn exchange(&mut self, letters: &[char]) -> bool {
        if self.state.is_over() {
            return false;
        }

        let player = self.state.to_move();
        if self.state.bag_len() < RACK_CAPACITY
            || !self.state.rack(player).covers(letters.iter().copied())
        {
            return false;
        }

        self.state.exchange_tiles(player, letters);
        self.state.advance_turn();
        debug!(%player, count = letters.len(), "tiles exchanged");
        true
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.state.fmt(f)
    }
}
