// Library interface for assembly-endgame
// This allows integration tests to access internal modules

pub mod alphabet;
pub mod cli;
pub mod error;
pub mod evaluator;
pub mod game_state;
pub mod ledger;
pub mod lives;
pub mod logging;
pub mod messages;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use alphabet::{Alphabet, Letter};
pub use error::ConfigError;
pub use evaluator::{Evaluation, KeyState, LetterStatus, RoundStatus, evaluate};
pub use game_state::{Game, GameConfig, GameInterface, RevealedLetter, UserAction, ViewState, game_loop};
pub use ledger::GuessLedger;
pub use lives::{Life, LifePool};
pub use wordbank::{Word, WordBank, load_wordbank_from_file, load_wordbank_from_str};
