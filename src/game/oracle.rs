//! External decision capabilities.
//!
//! The engine never embeds a lexicon or a challenge policy. Both are
//! injected strategy objects, passed to the game at construction:
//!
//! - [`WordJudge`] decides whether a formed word is acceptable. The
//!   default accepts everything; tests and real games can supply a
//!   [`WordList`] or their own implementation.
//! - [`ChallengeOracle`] decides, per opposing player, whether to
//!   challenge a scored move. Polling stops at the first challenger.
//!
//! Both traits take `&mut self` so scripted test doubles can consume
//! their scripts.

use rustc_hash::FxHashSet;

use crate::core::PlayerId;
use crate::rules::Word;

/// Word-acceptability oracle, consulted once per formed word when a
/// move is challenged.
pub trait WordJudge {
    /// Whether `word` is an acceptable play.
    fn accept(&mut self, word: &str) -> bool;
}

/// Challenge-decision oracle, polled once per opposing player after a
/// move is scored. The first `true` short-circuits further polling.
pub trait ChallengeOracle {
    /// Whether `challenger` challenges the words `mover` just formed.
    fn challenges(&mut self, challenger: PlayerId, mover: PlayerId, words: &[Word]) -> bool;
}

/// Accepts every word.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptAll;

impl WordJudge for AcceptAll {
    fn accept(&mut self, _word: &str) -> bool {
        true
    }
}

/// Rejects every word. A successful challenge against this judge always
/// reverts the move.
#[derive(Clone, Copy, Debug, Default)]
pub struct RejectAll;

impl WordJudge for RejectAll {
    fn accept(&mut self, _word: &str) -> bool {
        false
    }
}

/// Accepts exactly the words in a caller-supplied list.
#[derive(Clone, Debug, Default)]
pub struct WordList {
    words: FxHashSet<String>,
}

impl WordList {
    /// Build a judge from a word list. Matching is case-insensitive.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_ascii_uppercase())
                .collect(),
        }
    }
}

impl WordJudge for WordList {
    fn accept(&mut self, word: &str) -> bool {
        self.words.contains(&word.to_ascii_uppercase())
    }
}

/// No player ever challenges.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoChallenges;

impl ChallengeOracle for NoChallenges {
    fn challenges(&mut self, _challenger: PlayerId, _mover: PlayerId, _words: &[Word]) -> bool {
        false
    }
}

/// The first opposing player always challenges.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysChallenge;

impl ChallengeOracle for AlwaysChallenge {
    fn challenges(&mut self, _challenger: PlayerId, _mover: PlayerId, _words: &[Word]) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_all() {
        assert!(AcceptAll.accept("ZZZZ"));
        assert!(AcceptAll.accept(""));
    }

    #[test]
    fn test_reject_all() {
        assert!(!RejectAll.accept("BAKER"));
    }

    #[test]
    fn test_word_list() {
        let mut judge = WordList::new(["baker", "CAKE"]);
        assert!(judge.accept("BAKER"));
        assert!(judge.accept("cake"));
        assert!(!judge.accept("SCRAB"));
    }

    #[test]
    fn test_challenge_doubles() {
        let words: Vec<Word> = Vec::new();
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert!(!NoChallenges.challenges(p1, p0, &words));
        assert!(AlwaysChallenge.challenges(p1, p0, &words));
    }
}
