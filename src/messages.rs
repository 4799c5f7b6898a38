use crate::alphabet::Letter;
use crate::evaluator::{Evaluation, RoundStatus};
use crate::ledger::GuessLedger;
use crate::wordbank::Word;

const FAREWELL_TEMPLATES: [&str; 12] = [
    "Farewell, {}",
    "Adios, {}",
    "R.I.P., {}",
    "We'll miss you, {}",
    "Oh no, not {}!",
    "{} bites the dust",
    "Gone but not forgotten, {}",
    "The end of {} as we know it",
    "Off into the sunset, {}",
    "{}, it's been real",
    "{}, your watch has ended",
    "{} has left the building",
];

/// Headline plus detail line for the status banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub headline: String,
    pub detail: String,
}

/// Farewell for the life at `index`. The template is chosen by index so
/// the same round state always yields the same text.
#[must_use]
pub fn farewell_text(index: usize, name: &str) -> String {
    FAREWELL_TEMPLATES[index % FAREWELL_TEMPLATES.len()].replace("{}", name)
}

#[must_use]
pub fn status_message(status: RoundStatus, farewell: Option<&str>) -> Option<StatusMessage> {
    match status {
        RoundStatus::Won => Some(StatusMessage {
            headline: "You win!".to_string(),
            detail: "Well done! 🎉".to_string(),
        }),
        RoundStatus::Lost => Some(StatusMessage {
            headline: "Game over!".to_string(),
            detail: "You lose! Better start learning Assembly 😭".to_string(),
        }),
        RoundStatus::Playing => farewell.map(|text| StatusMessage {
            headline: format!("\u{201c}{text}\u{201d} 🫡"),
            detail: String::new(),
        }),
    }
}

fn last_guess_sentence(letter: Letter, wrong: bool) -> String {
    let upper = letter.to_upper();
    if wrong {
        format!("Sorry, the letter {upper} is not in the word.")
    } else {
        format!("Correct! The letter {upper} is in the word.")
    }
}

/// Screen-reader text describing the latest guess and the revealed word.
#[must_use]
pub fn accessibility_announcement(word: &Word, guessed: &GuessLedger, eval: &Evaluation) -> String {
    let mut text = String::new();
    if let Some(letter) = eval.last_guess() {
        text.push_str(&last_guess_sentence(letter, eval.last_guess_was_wrong()));
        text.push(' ');
    }
    let attempts = eval.attempts_left();
    let noun = if attempts == 1 { "attempt" } else { "attempts" };
    text.push_str(&format!("You have {attempts} {noun} left. Current word: "));

    let spoken: Vec<String> = word
        .letters()
        .iter()
        .map(|&l| {
            if guessed.contains(l) {
                format!("{l}.")
            } else {
                "blank.".to_string()
            }
        })
        .collect();
    text.push_str(&spoken.join(" "));
    text
}
