//! Pure derivation of round facts from `(word, guessed, lives_total)`.
//!
//! Nothing here is stored between actions. `Game` re-runs `evaluate` after
//! every mutation, so the wrong count, win/loss flags and farewell target
//! can never drift from the ledger they are computed from.

use crate::alphabet::{Alphabet, Letter};
use crate::ledger::GuessLedger;
use crate::wordbank::Word;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RoundStatus {
    Playing,
    Won,
    Lost,
}

/// How a guessed (or unguessed) letter relates to the secret word.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LetterStatus {
    Correct,
    Wrong,
    Untouched,
}

/// One keyboard key. `disabled` is orthogonal to `status`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct KeyState {
    pub letter: Letter,
    pub status: LetterStatus,
    pub disabled: bool,
}

/// Facts derived from one round snapshot. Fields are private so callers
/// can read them but never set them.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Evaluation {
    wrong_count: usize,
    lives_total: usize,
    status: RoundStatus,
    last_guess: Option<Letter>,
    last_guess_was_wrong: bool,
}

impl Evaluation {
    #[must_use]
    pub fn wrong_count(&self) -> usize {
        self.wrong_count
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status == RoundStatus::Won
    }

    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.status == RoundStatus::Lost
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != RoundStatus::Playing
    }

    #[must_use]
    pub fn last_guess(&self) -> Option<Letter> {
        self.last_guess
    }

    #[must_use]
    pub fn last_guess_was_wrong(&self) -> bool {
        self.last_guess_was_wrong
    }

    /// Lives with an index below this are lost.
    #[must_use]
    pub fn lives_lost_threshold(&self) -> usize {
        self.wrong_count
    }

    /// Wrong guesses still allowed before the round is lost.
    #[must_use]
    pub fn attempts_left(&self) -> usize {
        loss_threshold(self.lives_total).saturating_sub(self.wrong_count)
    }

    /// Index of the life that was consumed by the latest guess, if any.
    #[must_use]
    pub fn farewell_index(&self) -> Option<usize> {
        if !self.is_over() && self.last_guess_was_wrong {
            self.wrong_count.checked_sub(1)
        } else {
            None
        }
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }
}

fn loss_threshold(lives_total: usize) -> usize {
    lives_total.saturating_sub(1)
}

#[must_use]
pub fn evaluate(word: &Word, guessed: &GuessLedger, lives_total: usize) -> Evaluation {
    let wrong_count = guessed.iter().filter(|&l| !word.contains(l)).count();
    // A fully guessed word wins even if the ledger also carries enough wrong letters to lose.
    let status = if word.letters().iter().all(|&l| guessed.contains(l)) {
        RoundStatus::Won
    } else if wrong_count >= loss_threshold(lives_total) {
        RoundStatus::Lost
    } else {
        RoundStatus::Playing
    };
    let last_guess = guessed.last_guessed();
    let last_guess_was_wrong = last_guess.is_some_and(|l| !word.contains(l));

    Evaluation {
        wrong_count,
        lives_total,
        status,
        last_guess,
        last_guess_was_wrong,
    }
}

#[must_use]
pub fn letter_status(letter: Letter, word: &Word, guessed: &GuessLedger) -> LetterStatus {
    match (guessed.contains(letter), word.contains(letter)) {
        (true, true) => LetterStatus::Correct,
        (true, false) => LetterStatus::Wrong,
        (false, _) => LetterStatus::Untouched,
    }
}

/// Key states for every letter of `alphabet`, in alphabet order.
#[must_use]
pub fn keyboard(alphabet: &Alphabet, word: &Word, guessed: &GuessLedger, is_over: bool) -> Vec<KeyState> {
    alphabet
        .letters()
        .iter()
        .map(|&letter| KeyState {
            letter,
            status: letter_status(letter, word, guessed),
            disabled: is_over,
        })
        .collect()
}
