use crate::alphabet::{Alphabet, Letter};
use crate::error::ConfigError;
use crate::evaluator::{Evaluation, KeyState, RoundStatus, evaluate, keyboard};
use crate::ledger::GuessLedger;
use crate::lives::{Life, LifePool};
use crate::messages::{StatusMessage, accessibility_announcement, farewell_text, status_message};
use crate::wordbank::{Word, WordBank, load_wordbank_from_file};
use crate::{debug_log, info_log};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;

/// Static data loaded once at startup.
#[derive(Clone, Debug)]
pub struct GameConfig {
    pub wordbank: WordBank,
    pub lives: LifePool,
    pub alphabet: Alphabet,
}

impl GameConfig {
    #[must_use]
    pub fn new(wordbank: WordBank, lives: LifePool) -> Self {
        Self {
            wordbank,
            lives,
            alphabet: Alphabet::english(),
        }
    }

    /// Embedded word list (or the one at `wordbank_path`) with the default life pool.
    pub fn load(wordbank_path: Option<&Path>) -> Result<Self, ConfigError> {
        let wordbank = match wordbank_path {
            Some(path) => {
                let words = load_wordbank_from_file(path).map_err(|source| ConfigError::WordListIo {
                    path: path.to_path_buf(),
                    source,
                })?;
                WordBank::new(words)?
            }
            None => WordBank::embedded()?,
        };
        log::info!("Loaded {} words", wordbank.len());
        Ok(Self::new(wordbank, LifePool::programming_languages()?))
    }
}

/// One tile of the secret word as shown to the player.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RevealedLetter {
    Hidden,
    Guessed(Letter),
    /// Never guessed; only revealed once the round is lost.
    Missed(Letter),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LifeState {
    pub life: Life,
    pub lost: bool,
}

/// Read-only snapshot handed to front ends after every action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    revealed_word: Vec<RevealedLetter>,
    keyboard: Vec<KeyState>,
    lives: Vec<LifeState>,
    evaluation: Evaluation,
    status_message: Option<StatusMessage>,
    farewell_message: Option<String>,
    accessibility_announcement: String,
}

impl ViewState {
    #[must_use]
    pub fn revealed_word(&self) -> &[RevealedLetter] {
        &self.revealed_word
    }

    #[must_use]
    pub fn keyboard(&self) -> &[KeyState] {
        &self.keyboard
    }

    #[must_use]
    pub fn lives(&self) -> &[LifeState] {
        &self.lives
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.evaluation.is_won()
    }

    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.evaluation.is_lost()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.evaluation.is_over()
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.evaluation.status()
    }

    #[must_use]
    pub fn wrong_count(&self) -> usize {
        self.evaluation.wrong_count()
    }

    #[must_use]
    pub fn attempts_left(&self) -> usize {
        self.evaluation.attempts_left()
    }

    #[must_use]
    pub fn last_guess(&self) -> Option<Letter> {
        self.evaluation.last_guess()
    }

    #[must_use]
    pub fn last_guess_was_wrong(&self) -> bool {
        self.evaluation.last_guess_was_wrong()
    }

    #[must_use]
    pub fn status_message(&self) -> Option<&StatusMessage> {
        self.status_message.as_ref()
    }

    #[must_use]
    pub fn farewell_message(&self) -> Option<&str> {
        self.farewell_message.as_deref()
    }

    #[must_use]
    pub fn accessibility_announcement(&self) -> &str {
        &self.accessibility_announcement
    }

    /// The word as uppercase letters with `_` for hidden tiles.
    #[must_use]
    pub fn revealed_text(&self) -> String {
        self.revealed_word
            .iter()
            .map(|tile| match tile {
                RevealedLetter::Hidden => '_',
                RevealedLetter::Guessed(l) | RevealedLetter::Missed(l) => l.to_upper(),
            })
            .collect()
    }
}

/// The round engine. Owns the word and the ledger; everything else is derived.
pub struct Game<R = StdRng> {
    config: GameConfig,
    rng: R,
    word: Word,
    guessed: GuessLedger,
}

impl Game<StdRng> {
    #[must_use]
    pub fn from_entropy(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    #[must_use]
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(config: GameConfig, mut rng: R) -> Self {
        let word = config.wordbank.pick_word(&mut rng);
        debug_log!("Game::with_rng() - picked word of length {}", word.len());
        Self {
            config,
            rng,
            word,
            guessed: GuessLedger::new(),
        }
    }

    /// Start a fresh round with a newly drawn word.
    pub fn new_game(&mut self) -> ViewState {
        self.word = self.config.wordbank.pick_word(&mut self.rng);
        self.guessed.clear();
        info_log!("New game started ({} letters)", self.word.len());
        self.view_state()
    }

    /// Apply a guess. Characters outside the alphabet, repeats, and guesses
    /// after the round has ended leave the state untouched.
    pub fn guess_letter(&mut self, c: char) -> ViewState {
        let Some(letter) = self.config.alphabet.letter(c) else {
            debug_log!("guess_letter() - ignoring {:?}: not in alphabet", c);
            return self.view_state();
        };
        if self.evaluation().is_over() {
            debug_log!("guess_letter() - ignoring '{}': round is over", letter);
            return self.view_state();
        }
        if !self.guessed.add(letter) {
            debug_log!("guess_letter() - ignoring '{}': already guessed", letter);
            return self.view_state();
        }

        let view = self.view_state();
        info_log!(
            "guess_letter() - '{}' ({}), wrong guesses: {}",
            letter,
            if view.last_guess_was_wrong() { "wrong" } else { "correct" },
            view.wrong_count()
        );
        match view.status() {
            RoundStatus::Won => log::info!("Round won: {}", self.word),
            RoundStatus::Lost => log::info!("Round lost: {}", self.word),
            RoundStatus::Playing => {}
        }
        view
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.evaluation().status()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    fn evaluation(&self) -> Evaluation {
        evaluate(&self.word, &self.guessed, self.config.lives.len())
    }

    /// Derive the full view from the current round state.
    #[must_use]
    pub fn view_state(&self) -> ViewState {
        let evaluation = self.evaluation();
        let word = &self.word;
        let guessed = &self.guessed;

        let revealed_word = word
            .letters()
            .iter()
            .map(|&l| {
                if guessed.contains(l) {
                    RevealedLetter::Guessed(l)
                } else if evaluation.is_lost() {
                    RevealedLetter::Missed(l)
                } else {
                    RevealedLetter::Hidden
                }
            })
            .collect();

        let lives = self
            .config
            .lives
            .statuses(evaluation.lives_lost_threshold())
            .map(|(life, lost)| LifeState {
                life: life.clone(),
                lost,
            })
            .collect();

        let farewell_message = evaluation
            .farewell_index()
            .and_then(|i| self.config.lives.get(i).map(|life| farewell_text(i, &life.name)));

        ViewState {
            revealed_word,
            keyboard: keyboard(&self.config.alphabet, word, guessed, evaluation.is_over()),
            lives,
            status_message: status_message(evaluation.status(), farewell_message.as_deref()),
            farewell_message,
            accessibility_announcement: accessibility_announcement(word, guessed, &evaluation),
            evaluation,
        }
    }
}

/// Actions a front end can feed into the game loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserAction {
    Guess(char),
    NewGame,
    Exit,
}

/// Implemented by each front end (plain CLI, TUI).
pub trait GameInterface {
    /// Redraw from a freshly derived view.
    fn display_view(&mut self, view: &ViewState);

    /// Block for the next action. `None` means the input was unusable and the loop should ask again.
    fn read_action(&mut self) -> Option<UserAction>;

    fn display_new_game_message(&mut self);

    fn display_exit_message(&mut self);
}

/// Run rounds until the interface asks to exit. Each action is applied and
/// re-derived in full before the next one is read.
pub fn game_loop<R: Rng, I: GameInterface + ?Sized>(game: &mut Game<R>, interface: &mut I) {
    interface.display_view(&game.view_state());

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };
        debug_log!("game_loop() - action: {:?}", action);

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::NewGame => {
                let view = game.new_game();
                interface.display_new_game_message();
                interface.display_view(&view);
            }
            UserAction::Guess(c) => {
                let view = game.guess_letter(c);
                interface.display_view(&view);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordbank::load_wordbank_from_str;

    fn single_word_game(word: &str) -> Game {
        let config = GameConfig::new(
            WordBank::new(load_wordbank_from_str(word)).unwrap(),
            LifePool::programming_languages().unwrap(),
        );
        Game::seeded(config, 0)
    }

    fn lost_lives(view: &ViewState) -> usize {
        view.lives().iter().filter(|l| l.lost).count()
    }

    #[test]
    fn test_react_win_scenario() {
        let mut game = single_word_game("react");

        let view = game.guess_letter('r');
        assert_eq!(view.revealed_text(), "R____");
        assert_eq!(view.wrong_count(), 0);
        assert!(!view.is_over());

        let view = game.guess_letter('x');
        assert_eq!(view.wrong_count(), 1);
        assert_eq!(lost_lives(&view), 1);
        assert!(view.lives()[0].lost);
        assert_eq!(view.farewell_message(), Some("Farewell, HTML"));
        assert!(!view.is_over());

        for c in ['e', 'a', 'c', 't'] {
            game.guess_letter(c);
        }
        let view = game.view_state();
        assert_eq!(view.revealed_text(), "REACT");
        assert!(view.is_won());
        assert!(view.is_over());
        assert!(!view.is_lost());
        assert_eq!(view.status(), RoundStatus::Won);
        assert_eq!(view.farewell_message(), None);
        assert_eq!(view.status_message().unwrap().headline, "You win!");
    }

    #[test]
    fn test_react_loss_scenario() {
        let mut game = single_word_game("react");
        for c in ['b', 'd', 'f', 'g', 'h', 'i', 'j'] {
            game.guess_letter(c);
        }
        let view = game.view_state();
        assert_eq!(view.wrong_count(), 7);
        assert!(view.is_lost());
        assert!(view.is_over());
        assert_eq!(lost_lives(&view), 7);
        assert!(!view.lives()[7].lost);
        assert_eq!(view.lives()[7].life.name, "Assembly");
        assert_eq!(view.status_message().unwrap().headline, "Game over!");
    }

    #[test]
    fn test_loss_reveals_missed_letters() {
        let mut game = single_word_game("react");
        game.guess_letter('r');
        for c in ['b', 'd', 'f', 'g', 'h', 'i', 'j'] {
            game.guess_letter(c);
        }
        let view = game.view_state();
        assert_eq!(view.revealed_text(), "REACT");
        assert!(matches!(view.revealed_word()[0], RevealedLetter::Guessed(_)));
        assert!(matches!(view.revealed_word()[1], RevealedLetter::Missed(_)));
    }

    #[test]
    fn test_terminal_state_ignores_guesses() {
        let mut game = single_word_game("react");
        for c in ['b', 'd', 'f', 'g', 'h', 'i', 'j'] {
            game.guess_letter(c);
        }
        let before = game.view_state();
        for c in ['r', 'e', 'k', 'z'] {
            assert_eq!(game.guess_letter(c), before);
        }
        assert!(game.view_state().keyboard().iter().all(|k| k.disabled));
    }

    #[test]
    fn test_repeat_guess_is_noop() {
        let mut game = single_word_game("react");
        game.guess_letter('q');
        let once = game.view_state();
        let twice = game.guess_letter('q');
        assert_eq!(once, twice);
    }

    #[test]
    fn test_invalid_character_is_noop() {
        let mut game = single_word_game("react");
        let before = game.view_state();
        assert_eq!(game.guess_letter('7'), before);
        assert_eq!(game.guess_letter(' '), before);
        assert_eq!(game.guess_letter('é'), before);
    }

    #[test]
    fn test_uppercase_guess_is_noop() {
        // Case folding happens in the front ends, the core only takes `a..=z`
        let mut game = single_word_game("react");
        let before = game.view_state();
        assert_eq!(game.guess_letter('R'), before);
        assert_eq!(game.guess_letter('r').revealed_text(), "R____");
    }

    #[test]
    fn test_new_game_resets() {
        let mut game = single_word_game("react");
        game.guess_letter('x');
        game.guess_letter('r');
        let view = game.new_game();
        assert_eq!(view.wrong_count(), 0);
        assert_eq!(view.last_guess(), None);
        assert_eq!(lost_lives(&view), 0);
        assert_eq!(view.revealed_text(), "_____");
        assert_eq!(view.status(), RoundStatus::Playing);
    }

    #[test]
    fn test_new_game_after_loss_accepts_guesses() {
        let mut game = single_word_game("react");
        for c in ['b', 'd', 'f', 'g', 'h', 'i', 'j'] {
            game.guess_letter(c);
        }
        assert_eq!(game.status(), RoundStatus::Lost);
        game.new_game();
        let view = game.guess_letter('b');
        assert_eq!(view.wrong_count(), 1);
        assert_eq!(game.status(), RoundStatus::Playing);
    }

    #[test]
    fn test_wrong_count_is_monotonic() {
        let mut game = single_word_game("assembly");
        let mut previous = 0;
        for c in "zaqxsmwbely".chars() {
            let view = game.guess_letter(c);
            assert!(view.wrong_count() >= previous);
            previous = view.wrong_count();
        }
    }

    #[test]
    fn test_won_and_lost_never_both_true() {
        // Every letter of the alphabet in several orders; the round ends one way or the other.
        let orders = [
            "abcdefghijklmnopqrstuvwxyz",
            "zyxwvutsrqponmlkjihgfedcba",
            "qwertyuiopasdfghjklzxcvbnm",
            "etaoinshrdlcumwfgypbvkjxqz",
        ];
        for order in orders {
            let mut game = single_word_game("react");
            for c in order.chars() {
                let view = game.guess_letter(c);
                assert!(!(view.is_won() && view.is_lost()));
            }
            assert!(game.view_state().is_over());
        }
    }

    #[test]
    fn test_seeded_games_pick_same_words() {
        let config = GameConfig::load(None).unwrap();
        let mut a = Game::seeded(config.clone(), 42);
        let mut b = Game::seeded(config, 42);
        for _ in 0..5 {
            assert_eq!(a.new_game().revealed_word().len(), b.new_game().revealed_word().len());
            assert_eq!(a.word, b.word);
        }
    }

    #[test]
    fn test_load_missing_wordbank_file() {
        let path = std::env::temp_dir().join("assembly_endgame_no_such_list.txt");
        let _ = std::fs::remove_file(&path);
        let result = GameConfig::load(Some(path.as_path()));
        assert!(matches!(result, Err(ConfigError::WordListIo { .. })));
    }

    struct ScriptedInterface {
        actions: Vec<UserAction>,
        views: Vec<ViewState>,
        new_games: usize,
        exited: bool,
    }

    impl GameInterface for ScriptedInterface {
        fn display_view(&mut self, view: &ViewState) {
            self.views.push(view.clone());
        }

        fn read_action(&mut self) -> Option<UserAction> {
            if self.actions.is_empty() {
                Some(UserAction::Exit)
            } else {
                Some(self.actions.remove(0))
            }
        }

        fn display_new_game_message(&mut self) {
            self.new_games += 1;
        }

        fn display_exit_message(&mut self) {
            self.exited = true;
        }
    }

    #[test]
    fn test_game_loop_applies_actions_in_order() {
        let mut game = single_word_game("react");
        let mut interface = ScriptedInterface {
            actions: vec![
                UserAction::Guess('r'),
                UserAction::Guess('x'),
                UserAction::NewGame,
                UserAction::Guess('e'),
                UserAction::Exit,
            ],
            views: Vec::new(),
            new_games: 0,
            exited: false,
        };
        game_loop(&mut game, &mut interface);

        assert!(interface.exited);
        assert_eq!(interface.new_games, 1);
        // Initial view plus one per guess/new game.
        assert_eq!(interface.views.len(), 5);
        assert_eq!(interface.views[2].wrong_count(), 1);
        assert_eq!(interface.views[3].wrong_count(), 0);
        assert_eq!(interface.views[4].revealed_text(), "_E___");
    }
}
