use crate::alphabet::Letter;
use crate::error::ConfigError;
use rand::Rng;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

/// A secret word: non-empty, lowercase letters only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    letters: Vec<Letter>,
}

impl Word {
    /// Parse a trimmed line into a word. The line is lowercased first; any non-letter rejects it.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let lower = text.trim().to_ascii_lowercase();
        let letters: Option<Vec<Letter>> = lower.chars().map(Letter::new).collect();
        letters.filter(|l| !l.is_empty()).map(|letters| Self { letters })
    }

    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false; kept for parity with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

pub fn load_wordbank_from_str(data: &str) -> Vec<Word> {
    data.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let word = Word::parse(line);
            if word.is_none() {
                log::warn!("Skipping invalid word list entry {:?}", line.trim());
            }
            word
        })
        .collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match Word::parse(&line) {
            Some(word) => words.push(word),
            None => log::warn!("Skipping invalid word list entry {:?}", line.trim()),
        }
    }
    Ok(words)
}

/// The fixed list of candidate secret words.
#[derive(Clone, Debug)]
pub struct WordBank {
    words: Vec<Word>,
}

impl WordBank {
    pub fn new(words: Vec<Word>) -> Result<Self, ConfigError> {
        if words.is_empty() {
            return Err(ConfigError::EmptyWordList);
        }
        Ok(Self { words })
    }

    /// The word list compiled into the binary.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::new(load_wordbank_from_str(EMBEDDED_WORDBANK))
    }

    /// Draw one word uniformly at random from `rng`.
    pub fn pick_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Word {
        let index = rng.gen_range(0..self.words.len());
        self.words[index].clone()
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
