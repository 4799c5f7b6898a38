use std::fmt;

/// A single lowercase ASCII letter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Letter(char);

impl Letter {
    /// Accepts `a..=z` only. Front ends fold case before calling this.
    #[must_use]
    pub fn new(c: char) -> Option<Self> {
        c.is_ascii_lowercase().then_some(Self(c))
    }

    #[must_use]
    pub fn as_char(self) -> char {
        self.0
    }

    #[must_use]
    pub fn to_upper(self) -> char {
        self.0.to_ascii_uppercase()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The set of letters a player may guess, in keyboard display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<Letter>,
}

impl Alphabet {
    /// The 26-letter English alphabet.
    #[must_use]
    pub fn english() -> Self {
        Self {
            letters: ('a'..='z').filter_map(Letter::new).collect(),
        }
    }

    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Resolve a raw character to a letter of this alphabet.
    #[must_use]
    pub fn letter(&self, c: char) -> Option<Letter> {
        Letter::new(c).filter(|l| self.letters.contains(l))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::english()
    }
}
