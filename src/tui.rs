//! TUI (Terminal User Interface) module for Assembly: Endgame
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # Layout
//! Title, tagline, status banner, life chips, word tiles, keyboard, the
//! screen-reader announcement, and a line of key hints.
//!
//! # Input
//! While a round is in progress every letter key is a guess. Once the round
//! is over, `ENTER` or `N` starts a new one. `ESC` quits at any time.

use crate::evaluator::{KeyState, LetterStatus, RoundStatus};
use crate::game_state::{GameInterface, LifeState, RevealedLetter, UserAction, ViewState};
use crate::lives::Rgb;
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const KEYS_PER_ROW: usize = 13;
const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const WON_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD);
const LOST_STYLE: Style = Style::new().fg(Color::White).bg(Color::Red).add_modifier(Modifier::BOLD);
const FAREWELL_STYLE: Style = Style::new()
    .fg(Color::White)
    .bg(Color::Magenta)
    .add_modifier(Modifier::ITALIC);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Gray);
const TILE_STYLE: Style = Style::new().fg(Color::White).bg(Color::DarkGray);
const MISSED_TILE_STYLE: Style = Style::new().fg(Color::LightRed).bg(Color::DarkGray);
const LOST_LIFE_STYLE: Style = Style::new().fg(Color::Gray).bg(Color::Black);

fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

fn key_colors(status: LetterStatus) -> (Color, Color) {
    match status {
        LetterStatus::Correct => (Color::Green, Color::Black),
        LetterStatus::Wrong => (Color::Red, Color::White),
        LetterStatus::Untouched => (Color::Yellow, Color::Black),
    }
}

/// Map a key press to a game action. Returns `None` for keys with no meaning in the current phase.
#[must_use]
pub fn action_for_key(key: KeyEvent, is_over: bool) -> Option<UserAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(UserAction::Exit);
    }
    if has_modifier_keys(&key) {
        return None;
    }

    match key.code {
        KeyCode::Esc => Some(UserAction::Exit),
        KeyCode::Enter if is_over => Some(UserAction::NewGame),
        KeyCode::Char('n' | 'N') if is_over => Some(UserAction::NewGame),
        KeyCode::Char(c) if !is_over && c.is_ascii_alphabetic() => {
            Some(UserAction::Guess(c.to_ascii_lowercase()))
        }
        _ => None,
    }
}

fn has_modifier_keys(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    view: Option<&'a ViewState>,
    message: &'a str,
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and game state display.
pub struct TuiInterface<B: Backend = CrosstermBackend<io::Stdout>> {
    terminal: Terminal<B>,
    view: Option<ViewState>,
    message: String,
    owns_terminal: bool,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        info_log!("Terminal setup complete: alternate screen, cursor hidden");
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            view: None,
            message: String::new(),
            owns_terminal: true,
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        if !self.owns_terminal {
            return Ok(());
        }
        self.owns_terminal = false;
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, cursor::Show)?;
        Ok(())
    }
}

impl<B: Backend> TuiInterface<B> {
    /// Wrap an existing terminal without touching raw mode or the alternate screen.
    pub fn with_terminal(terminal: Terminal<B>) -> Self {
        Self {
            terminal,
            view: None,
            message: String::new(),
            owns_terminal: false,
        }
    }

    /// Draw the current UI state to the terminal.
    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            view: self.view.as_ref(),
            message: &self.message,
        };
        self.terminal.draw(|f| Self::render_static(f, &ctx))?;
        Ok(())
    }

    /// Log and handle draw errors appropriately
    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            log::error!("Draw error: {e}");
        }
    }

    fn is_over(&self) -> bool {
        self.view.as_ref().is_some_and(ViewState::is_over)
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(2), // Tagline
                Constraint::Length(4), // Status banner
                Constraint::Length(3), // Lives
                Constraint::Length(3), // Word
                Constraint::Length(6), // Keyboard
                Constraint::Min(3),    // Announcement
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        let Some(view) = ctx.view else {
            Self::render_instructions(f, chunks[7], false);
            return;
        };
        Self::render_tagline(f, chunks[1], view.lives().len().saturating_sub(1));
        Self::render_status(f, chunks[2], view, ctx.message);
        Self::render_lives(f, chunks[3], view.lives());
        Self::render_word(f, chunks[4], view.revealed_word());
        Self::render_keyboard(f, chunks[5], view.keyboard());
        Self::render_announcement(f, chunks[6], view.accessibility_announcement());
        Self::render_instructions(f, chunks[7], view.is_over());
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("ASSEMBLY: ENDGAME")
            .style(HEADER_STYLE)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_tagline(f: &mut Frame, area: Rect, attempts: usize) {
        let text = format!(
            "Guess the word within {attempts} attempts to keep the programming world safe from Assembly!"
        );
        let paragraph = Paragraph::new(text)
            .style(MESSAGE_STYLE)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, view: &ViewState, message: &str) {
        let style = match view.status() {
            RoundStatus::Won => WON_STYLE,
            RoundStatus::Lost => LOST_STYLE,
            RoundStatus::Playing if view.farewell_message().is_some() => FAREWELL_STYLE,
            RoundStatus::Playing => Style::default(),
        };

        let lines = match view.status_message() {
            Some(status) => vec![
                Line::from(status.headline.clone()),
                Line::from(status.detail.clone()),
            ],
            None => vec![Line::from(message.to_string())],
        };

        let paragraph = Paragraph::new(lines)
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn life_spans(lives: &[LifeState]) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        for life in lives {
            if life.lost {
                spans.push(Span::styled(format!(" 💀 {} ", life.life.name), LOST_LIFE_STYLE));
            } else {
                spans.push(Span::styled(
                    format!(" {} ", life.life.name),
                    Style::default()
                        .fg(rgb(life.life.color))
                        .bg(rgb(life.life.background_color)),
                ));
            }
            spans.push(Span::raw(" "));
        }
        spans
    }

    fn render_lives(f: &mut Frame, area: Rect, lives: &[LifeState]) {
        let paragraph = Paragraph::new(Line::from(Self::life_spans(lives)))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Languages"));
        f.render_widget(paragraph, area);
    }

    fn render_word(f: &mut Frame, area: Rect, tiles: &[RevealedLetter]) {
        let mut spans = Vec::new();
        for tile in tiles {
            let span = match tile {
                RevealedLetter::Hidden => Span::styled("   ", TILE_STYLE),
                RevealedLetter::Guessed(l) => Span::styled(format!(" {} ", l.to_upper()), TILE_STYLE),
                RevealedLetter::Missed(l) => Span::styled(format!(" {} ", l.to_upper()), MISSED_TILE_STYLE),
            };
            spans.push(span);
            spans.push(Span::raw(" "));
        }
        let paragraph = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Word"));
        f.render_widget(paragraph, area);
    }

    fn render_keyboard(f: &mut Frame, area: Rect, keys: &[KeyState]) {
        let mut lines = Vec::new();
        for row in keys.chunks(KEYS_PER_ROW) {
            let mut spans = Vec::new();
            for key in row {
                let (bg, fg) = key_colors(key.status);
                let mut style = Style::default().fg(fg).bg(bg);
                if key.disabled {
                    style = style.add_modifier(Modifier::DIM);
                }
                spans.push(Span::styled(format!(" {} ", key.letter.to_upper()), style));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
            lines.push(Line::from(""));
        }
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Keyboard"));
        f.render_widget(paragraph, area);
    }

    fn render_announcement(f: &mut Frame, area: Rect, text: &str) {
        let paragraph = Paragraph::new(text.to_string())
            .style(MESSAGE_STYLE)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, is_over: bool) {
        let text = if is_over {
            "ENTER / N: New Game | ESC: Quit"
        } else {
            "Type a letter to guess | ESC: Quit"
        };
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => {
                // Escape-sequence garbage from focus changes shows up as control or replacement chars
                if let KeyCode::Char(c) = key.code
                    && (c == '\u{FFFD}' || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD)
                {
                    debug_log!("handle_input() - Ignoring invalid character {:?}", c);
                    return Ok(None);
                }
                debug_log!(
                    "handle_input() - Key event: code={:?}, modifiers={:?}",
                    key.code,
                    key.modifiers
                );
                Ok(action_for_key(key, self.is_over()))
            }
            Event::Resize(_, _) => {
                self.draw_or_log();
                Ok(None)
            }
            other => {
                debug_log!("handle_input() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }
}

impl<B: Backend> GameInterface for TuiInterface<B> {
    fn display_view(&mut self, view: &ViewState) {
        // The new-game banner only lasts until the first guess lands.
        if view.last_guess().is_some() {
            self.message.clear();
        }
        self.view = Some(view.clone());
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            match self.handle_input() {
                Ok(Some(action)) => {
                    info_log!("read_action() - Action received: {:?}", action);
                    return Some(action);
                }
                Ok(None) => {}
                Err(e) => {
                    log::error!("Error handling input: {e}");
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_new_game_message(&mut self) {
        self.message = "New game started. Good luck!".to_string();
    }

    fn display_exit_message(&mut self) {
        self.message = "Exiting...".to_string();
        self.draw_or_log();
    }
}

impl<B: Backend> Drop for TuiInterface<B> {
    fn drop(&mut self) {
        if self.owns_terminal {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::{Game, GameConfig};
    use crate::lives::LifePool;
    use crate::wordbank::{WordBank, load_wordbank_from_str};
    use ratatui::backend::TestBackend;

    fn react_game() -> Game {
        let config = GameConfig::new(
            WordBank::new(load_wordbank_from_str("react")).unwrap(),
            LifePool::programming_languages().unwrap(),
        );
        Game::seeded(config, 3)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen_text(interface: &TuiInterface<TestBackend>) -> String {
        interface
            .terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_letter_is_guess_while_playing() {
        assert_eq!(action_for_key(press(KeyCode::Char('r')), false), Some(UserAction::Guess('r')));
    }

    #[test]
    fn test_shifted_letter_is_lowercased() {
        assert_eq!(action_for_key(press(KeyCode::Char('N')), false), Some(UserAction::Guess('n')));
        let shift_r = KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT);
        assert_eq!(action_for_key(shift_r, false), Some(UserAction::Guess('r')));
    }

    #[test]
    fn test_letters_ignored_after_round() {
        assert_eq!(action_for_key(press(KeyCode::Char('r')), true), None);
        assert_eq!(action_for_key(press(KeyCode::Char('n')), true), Some(UserAction::NewGame));
        assert_eq!(action_for_key(press(KeyCode::Enter), true), Some(UserAction::NewGame));
    }

    #[test]
    fn test_enter_does_nothing_while_playing() {
        assert_eq!(action_for_key(press(KeyCode::Enter), false), None);
    }

    #[test]
    fn test_escape_and_ctrl_c_exit() {
        assert_eq!(action_for_key(press(KeyCode::Esc), false), Some(UserAction::Exit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for_key(ctrl_c, false), Some(UserAction::Exit));
    }

    #[test]
    fn test_modified_letters_ignored() {
        let alt_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::ALT);
        assert_eq!(action_for_key(alt_a, false), None);
    }

    #[test]
    fn test_digits_ignored() {
        assert_eq!(action_for_key(press(KeyCode::Char('4')), false), None);
    }

    #[test]
    fn test_life_spans_mark_lost() {
        let mut game = react_game();
        let view = game.guess_letter('x');
        let spans = TuiInterface::<TestBackend>::life_spans(view.lives());
        assert!(spans[0].content.contains("💀 HTML"));
        assert_eq!(spans[2].content, " CSS ");
    }

    #[test]
    fn test_render_in_progress_round() {
        let mut game = react_game();
        game.guess_letter('r');
        let view = game.guess_letter('x');

        let terminal = Terminal::new(TestBackend::new(120, 34)).unwrap();
        let mut interface = TuiInterface::with_terminal(terminal);
        interface.display_view(&view);

        let text = screen_text(&interface);
        assert!(text.contains("ASSEMBLY: ENDGAME"));
        assert!(text.contains("Guess the word within 7 attempts"));
        assert!(text.contains("Farewell, HTML"));
        assert!(text.contains("TypeScript"));
        assert!(text.contains("Type a letter to guess"));
    }

    #[test]
    fn test_new_game_banner_cleared_by_first_guess() {
        let mut game = react_game();
        let terminal = Terminal::new(TestBackend::new(120, 34)).unwrap();
        let mut interface = TuiInterface::with_terminal(terminal);

        interface.display_new_game_message();
        interface.display_view(&game.new_game());
        assert!(screen_text(&interface).contains("New game started"));

        interface.display_view(&game.guess_letter('r'));
        assert!(!screen_text(&interface).contains("New game started"));
    }

    #[test]
    fn test_render_won_round() {
        let mut game = react_game();
        for c in "react".chars() {
            game.guess_letter(c);
        }
        let terminal = Terminal::new(TestBackend::new(120, 34)).unwrap();
        let mut interface = TuiInterface::with_terminal(terminal);
        interface.display_view(&game.view_state());

        let text = screen_text(&interface);
        assert!(text.contains("You win!"));
        assert!(text.contains("New Game"));
    }
}
