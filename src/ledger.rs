use crate::alphabet::Letter;

/// Letters guessed this round, in first-guessed order, without duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GuessLedger {
    letters: Vec<Letter>,
}

impl GuessLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a guess. Returns `false` if the letter was already present.
    pub fn add(&mut self, letter: Letter) -> bool {
        if self.letters.contains(&letter) {
            return false;
        }
        self.letters.push(letter);
        true
    }

    /// The most recently *newly* added letter.
    #[must_use]
    pub fn last_guessed(&self) -> Option<Letter> {
        self.letters.last().copied()
    }

    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }

    pub fn iter(&self) -> impl Iterator<Item = Letter> + '_ {
        self.letters.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.letters.clear();
    }
}
