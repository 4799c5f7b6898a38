use crate::evaluator::LetterStatus;
use crate::game_state::{GameInterface, RevealedLetter, UserAction, ViewState};
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

/// Assembly: Endgame - guess the word before every language is gone
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list (replaces the built-in one)
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// Seed for the word picker, for reproducible rounds
    #[arg(long)]
    pub seed: Option<u64>,

    /// Play with line-based prompts instead of the terminal UI
    #[arg(long)]
    pub plain: bool,

    /// Where to write the log file
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

pub enum GuessInput {
    Letter(char),
    Invalid,
    Exit,
    NewGame,
}

fn parse_guess(input: &str) -> GuessInput {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "exit" | "quit" => GuessInput::Exit,
        "new" | "next" => GuessInput::NewGame,
        _ => {
            let mut chars = input.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_alphabetic() => GuessInput::Letter(c),
                _ => GuessInput::Invalid,
            }
        }
    }
}

pub fn read_guess<R: BufRead>(reader: &mut R) -> GuessInput {
    println!("\nGuess a letter ('new' for a new game, 'exit' to quit):");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => GuessInput::Exit,
        Ok(_) => match parse_guess(&input) {
            GuessInput::Invalid => {
                println!("Invalid guess. Please enter a single letter.");
                GuessInput::Invalid
            }
            other => other,
        },
        Err(e) => {
            log::error!("Failed to read input: {e}");
            GuessInput::Exit
        }
    }
}

fn format_lives(view: &ViewState) -> String {
    view.lives()
        .iter()
        .map(|l| {
            if l.lost {
                format!("[💀 {}]", l.life.name)
            } else {
                format!("[{}]", l.life.name)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_word(view: &ViewState) -> String {
    view.revealed_word()
        .iter()
        .map(|tile| match tile {
            RevealedLetter::Hidden => "_".to_string(),
            RevealedLetter::Guessed(l) => l.to_upper().to_string(),
            RevealedLetter::Missed(l) => format!("({})", l.to_upper()),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Guessed letters grouped by outcome, e.g. `correct: R E  wrong: X`.
fn format_keyboard(view: &ViewState) -> String {
    let collect = |status: LetterStatus| -> String {
        view.keyboard()
            .iter()
            .filter(|k| k.status == status)
            .map(|k| k.letter.to_upper().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    };
    format!("correct: {}  wrong: {}", collect(LetterStatus::Correct), collect(LetterStatus::Wrong))
}

#[must_use]
pub fn format_view(view: &ViewState) -> String {
    let mut lines = vec![format_lives(view), format!("Word: {}", format_word(view))];
    lines.push(format_keyboard(view));

    if let Some(message) = view.status_message() {
        if message.detail.is_empty() {
            lines.push(message.headline.clone());
        } else {
            lines.push(format!("{} {}", message.headline, message.detail));
        }
    }
    if view.is_over() {
        lines.push("Type 'new' for another round.".to_string());
    } else {
        lines.push(format!("Attempts left: {}", view.attempts_left()));
    }
    lines.join("\n")
}

pub fn display_view(view: &ViewState) {
    println!("\n{}", format_view(view));
}

pub fn display_exit_message() {
    println!("Exiting.");
}

pub fn display_new_game_message() {
    println!("New game started.");
}

/// Line-based implementation of `GameInterface` over any `BufRead`.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_view(&mut self, view: &ViewState) {
        display_view(view);
    }

    fn read_action(&mut self) -> Option<UserAction> {
        match read_guess(&mut self.reader) {
            GuessInput::Letter(c) => Some(UserAction::Guess(c)),
            GuessInput::Exit => Some(UserAction::Exit),
            GuessInput::NewGame => Some(UserAction::NewGame),
            GuessInput::Invalid => None,
        }
    }

    fn display_new_game_message(&mut self) {
        display_new_game_message();
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}
