//! TUI application state and event loop

use crate::core::{Action, Board};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state: the game board plus terminal lifecycle flags
pub struct App<'a> {
    pub board: Board<'a>,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(board: Board<'a>) -> Self {
        Self {
            board,
            should_quit: false,
        }
    }

    /// Translate a key press into a game action or app command
    ///
    /// While a game is running, letter keys type, Backspace deletes and
    /// Enter submits. Once the game is over the grid ignores input, and
    /// `n` (new game), `r` (try again) and `q` become active.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.board.is_over() {
            match code {
                KeyCode::Char('n') => self.board.new_game(),
                KeyCode::Char('r') => self.board.retry(),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) => {
                // Invalid-word errors surface through the board's notice
                // flag, which the renderer picks up next frame.
                let _ = self.board.apply(Action::Letter(c));
            }
            KeyCode::Backspace => {
                let _ = self.board.apply(Action::Backspace);
            }
            KeyCode::Enter => {
                let _ = self.board.apply(Action::Submit);
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameStatus;
    use crate::wordlists::WordLists;
    use crate::wordlists::loader::words_from_slice;

    fn lists() -> WordLists {
        WordLists::new(
            words_from_slice(&["crane", "slate", "dance"]),
            words_from_slice(&["crane"]),
        )
        .unwrap()
    }

    fn key(app: &mut App, code: KeyCode) {
        app.handle_key(code, KeyModifiers::NONE);
    }

    #[test]
    fn typing_and_enter_play_the_game() {
        let lists = lists();
        let mut app = App::new(Board::with_seed(&lists, 1));

        for ch in "crane".chars() {
            key(&mut app, KeyCode::Char(ch));
        }
        key(&mut app, KeyCode::Enter);

        assert_eq!(app.board.status(), GameStatus::Won);
        assert!(!app.should_quit);
    }

    #[test]
    fn escape_quits_mid_game() {
        let lists = lists();
        let mut app = App::new(Board::with_seed(&lists, 1));

        key(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_always_quits() {
        let lists = lists();
        let mut app = App::new(Board::with_seed(&lists, 1));

        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn n_starts_new_game_only_after_game_over() {
        let lists = lists();
        let mut app = App::new(Board::with_seed(&lists, 1));

        // Mid-game, 'n' is just a letter
        key(&mut app, KeyCode::Char('n'));
        assert_eq!(app.board.tile_index(), 1);
        key(&mut app, KeyCode::Backspace);

        for ch in "crane".chars() {
            key(&mut app, KeyCode::Char(ch));
        }
        key(&mut app, KeyCode::Enter);
        assert!(app.board.is_over());

        key(&mut app, KeyCode::Char('n'));
        assert_eq!(app.board.status(), GameStatus::InProgress);
        assert_eq!(app.board.tile_index(), 0);
    }

    #[test]
    fn r_retries_with_same_target_after_game_over() {
        let lists = lists();
        let mut app = App::new(Board::with_seed(&lists, 1));
        let target = app.board.target().clone();

        for _ in 0..crate::core::MAX_ATTEMPTS {
            for ch in "slate".chars() {
                key(&mut app, KeyCode::Char(ch));
            }
            key(&mut app, KeyCode::Enter);
        }
        assert_eq!(app.board.status(), GameStatus::Lost);

        key(&mut app, KeyCode::Char('r'));
        assert_eq!(app.board.status(), GameStatus::InProgress);
        assert_eq!(app.board.target(), &target);
    }
}
