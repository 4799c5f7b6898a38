//! The pool of themed lives consumed by wrong guesses.
//!
//! Lives are fixed at startup and consumed strictly in order: the entry at
//! index `i` is lost once `wrong_count > i`. The last entry can never be
//! consumed because the round is lost as soon as `N - 1` lives are gone.

use crate::error::ConfigError;

/// A 24-bit RGB colour.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse `#RRGGBB` (the leading `#` is optional).
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Life {
    pub name: String,
    pub color: Rgb,
    pub background_color: Rgb,
}

impl Life {
    pub fn new(name: &str, color: &str, background_color: &str) -> Result<Self, ConfigError> {
        let parse = |value: &str| {
            Rgb::from_hex(value).ok_or_else(|| ConfigError::InvalidColor {
                name: name.to_string(),
                value: value.to_string(),
            })
        };
        Ok(Self {
            name: name.to_string(),
            color: parse(color)?,
            background_color: parse(background_color)?,
        })
    }
}

/// Name, foreground, background.
const DEFAULT_LIVES: [(&str, &str, &str); 8] = [
    ("HTML", "#F9F4DA", "#E2680F"),
    ("CSS", "#F9F4DA", "#328AF1"),
    ("JavaScript", "#1E1E1E", "#F4EB13"),
    ("React", "#1E1E1E", "#2ED3E9"),
    ("TypeScript", "#F9F4DA", "#298EC6"),
    ("Node.js", "#F9F4DA", "#599137"),
    ("Python", "#1E1E1E", "#FFD742"),
    ("Assembly", "#F9F4DA", "#2D519F"),
];

#[derive(Clone, Debug)]
pub struct LifePool {
    lives: Vec<Life>,
}

impl LifePool {
    pub fn new(lives: Vec<Life>) -> Result<Self, ConfigError> {
        if lives.is_empty() {
            return Err(ConfigError::EmptyLifePool);
        }
        Ok(Self { lives })
    }

    /// The programming-language pool, ending with Assembly.
    pub fn programming_languages() -> Result<Self, ConfigError> {
        let lives = DEFAULT_LIVES
            .iter()
            .map(|(name, fg, bg)| Life::new(name, fg, bg))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(lives)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lives.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lives.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Life> {
        self.lives.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Life> {
        self.lives.iter()
    }

    /// Number of wrong guesses that ends the round.
    #[must_use]
    pub fn loss_threshold(&self) -> usize {
        self.lives.len().saturating_sub(1)
    }

    /// Each life paired with whether it has been lost after `wrong_count` wrong guesses.
    pub fn statuses(&self, wrong_count: usize) -> impl Iterator<Item = (&Life, bool)> {
        self.lives
            .iter()
            .enumerate()
            .map(move |(i, life)| (life, i < wrong_count))
    }
}
