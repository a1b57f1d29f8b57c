//! TUI application state and event loop

use super::board::{BoardView, HelpOverlay};
use super::config::UiConfig;
use super::pacing::ToastSlot;
use super::rendering::{self, KeyCap};
use crate::game::{AnswerSource, ConfigError, GameConfig, GameController, Signal, Transition};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::Instant;
use tracing::debug;

/// The controller wired to the TUI's sinks
pub type TuiGame = GameController<BoardView, ToastSlot, HelpOverlay>;

/// Application state
pub struct App {
    pub game: TuiGame,
    pub ui: UiConfig,
    pub should_quit: bool,
}

impl App {
    /// Build the app and start the first round
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the game cannot start from `config` and
    /// `answers`.
    pub fn new(
        config: GameConfig,
        answers: AnswerSource,
        ui: UiConfig,
    ) -> Result<Self, ConfigError> {
        let config = config.with_notice_duration(ui.toast_duration);
        let game = GameController::new(
            config,
            answers,
            BoardView::new(ui.reveal_interval),
            ToastSlot::default(),
            HelpOverlay::default(),
        )?;

        Ok(Self {
            game,
            ui,
            should_quit: false,
        })
    }

    /// Translate a key press into overlay toggles or game signals
    pub fn handle_key(&mut self, key: KeyEvent) -> Transition {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                Transition::Ignored
            }
            KeyCode::Esc => {
                if self.game.overlay().is_open() {
                    self.game.overlay_mut().close();
                } else {
                    self.should_quit = true;
                }
                Transition::Ignored
            }
            KeyCode::F(1) | KeyCode::Tab | KeyCode::Char('?') => {
                self.game.overlay_mut().toggle();
                Transition::Ignored
            }
            KeyCode::Enter => self.press(KeyCap::Enter),
            KeyCode::Backspace => self.press(KeyCap::Backspace),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.game.handle(Signal::Letter(c))
            }
            _ => Transition::Ignored,
        }
    }

    /// Clicks close the help overlay or press on-screen keys
    pub fn handle_click(&mut self, column: u16, row: u16, screen: Rect) -> Transition {
        if self.game.overlay().is_open() {
            self.game.overlay_mut().close();
            return Transition::Ignored;
        }

        let layout = rendering::screen_layout(screen, self.game.config().max_attempts);
        match rendering::key_at(layout.keyboard, column, row) {
            Some(cap) => {
                debug!(?cap, "on-screen key pressed");
                self.press(cap)
            }
            None => Transition::Ignored,
        }
    }

    /// Enter submits while playing and starts the next round once the
    /// end-of-round panel is showing
    fn press(&mut self, cap: KeyCap) -> Transition {
        let signal = match cap {
            KeyCap::Enter if self.game.round().status().is_over() => {
                if self.game.display().outcome(Instant::now()).is_none() {
                    debug!("next round held until the final row is revealed");
                    return Transition::Ignored;
                }
                Signal::NextRound
            }
            other => other.signal(),
        };
        self.game.handle(signal)
    }

    /// Advance presentation timers
    pub fn tick(&mut self, now: Instant) {
        self.game.display_mut().tick(now);
        self.game.notifier_mut().expire(now);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|f| rendering::ui(f, &app, now))?;

        if !event::poll(app.ui.tick_rate)? {
            continue;
        }

        match event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.handle_key(key);
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                let size = terminal.size()?;
                app.handle_click(column, row, Rect::new(0, 0, size.width, size.height));
            }
            _ => {}
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
    use crate::game::RoundStatus;

    fn app(answers: &[&str]) -> App {
        App::new(
            GameConfig::default(),
            AnswerSource::from_slice(answers).unwrap(),
            UiConfig::default(),
        )
        .unwrap()
    }

    fn instant_reveal_app(answers: &[&str]) -> App {
        let ui = UiConfig {
            reveal_interval: std::time::Duration::ZERO,
            ..UiConfig::default()
        };
        App::new(GameConfig::default(), AnswerSource::from_slice(answers).unwrap(), ui).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_word(app: &mut App, word: &str) {
        for ch in word.chars() {
            app.handle_key(key(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn typing_and_submitting() {
        let mut app = app(&["slave", "egypt"]);
        type_word(&mut app, "slave");
        assert_eq!(
            app.handle_key(key(KeyCode::Enter)),
            Transition::Evaluated(RoundStatus::Won)
        );
    }

    #[test]
    fn enter_after_round_over_starts_next_round() {
        let mut app = instant_reveal_app(&["slave", "egypt"]);
        type_word(&mut app, "slave");
        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.handle_key(key(KeyCode::Enter)), Transition::NewRound);
        assert_eq!(app.game.round().status(), RoundStatus::InProgress);
    }

    #[test]
    fn enter_during_final_reveal_keeps_round_over() {
        let mut app = app(&["slave", "egypt"]);
        type_word(&mut app, "slave");
        assert_eq!(
            app.handle_key(key(KeyCode::Enter)),
            Transition::Evaluated(RoundStatus::Won)
        );

        // The final row takes 500ms to reveal at the default interval
        assert_eq!(app.handle_key(key(KeyCode::Enter)), Transition::Ignored);
        assert_eq!(app.game.round().status(), RoundStatus::Won);
        assert_eq!(app.game.revealed_answer().map(|w| w.text()), Some("slave"));
    }

    #[test]
    fn modified_letters_do_not_type() {
        let mut app = app(&["slave"]);
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::ALT)),
            Transition::Ignored
        );
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL)),
            Transition::Ignored
        );
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT)),
            Transition::InputChanged
        );
        assert_eq!(app.game.round().buffer(), "s");
    }

    #[test]
    fn help_overlay_blocks_typing() {
        let mut app = app(&["slave"]);
        app.handle_key(key(KeyCode::F(1)));
        assert!(app.game.overlay().is_open());

        assert_eq!(app.handle_key(key(KeyCode::Char('s'))), Transition::Ignored);
        assert_eq!(app.game.round().cell_cursor(), 0);

        app.handle_key(key(KeyCode::Esc));
        assert!(!app.game.overlay().is_open());
        assert!(!app.should_quit);
        assert_eq!(app.handle_key(key(KeyCode::Char('s'))), Transition::InputChanged);
    }

    #[test]
    fn incomplete_submit_shows_toast() {
        let mut app = app(&["slave"]);
        type_word(&mut app, "sl");
        assert_eq!(app.handle_key(key(KeyCode::Enter)), Transition::Incomplete);
        assert_eq!(
            app.game.notifier().visible(Instant::now()),
            Some("Not enough letters")
        );
    }

    #[test]
    fn toast_duration_comes_from_ui_config() {
        let ui = UiConfig {
            toast_duration: std::time::Duration::from_millis(300),
            ..UiConfig::default()
        };
        let app = App::new(
            GameConfig::default(),
            AnswerSource::from_slice(&["slave"]).unwrap(),
            ui,
        )
        .unwrap();
        assert_eq!(
            app.game.config().notice_duration,
            std::time::Duration::from_millis(300)
        );
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let mut app = app(&["slave"]);
        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit);

        let mut app = self::app(&["slave"]);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert_eq!(app.game.round().cell_cursor(), 0);
    }

    #[test]
    fn clicking_keys_types_letters() {
        let mut app = app(&["slave"]);
        let screen = Rect::new(0, 0, 80, 30);
        let layout = rendering::screen_layout(screen, 6);
        let keys = rendering::key_rects(layout.keyboard);

        let (q_rect, cap) = keys[0];
        assert_eq!(cap, KeyCap::Letter(b'q'));
        assert_eq!(
            app.handle_click(q_rect.x, q_rect.y, screen),
            Transition::InputChanged
        );
        assert_eq!(app.game.round().buffer(), "q");

        let (back, _) = keys
            .iter()
            .copied()
            .find(|&(_, cap)| cap == KeyCap::Backspace)
            .unwrap();
        app.handle_click(back.x, back.y, screen);
        assert_eq!(app.game.round().buffer(), "");
    }

    #[test]
    fn click_closes_help() {
        let mut app = app(&["slave"]);
        app.handle_key(key(KeyCode::Tab));
        app.handle_click(0, 0, Rect::new(0, 0, 80, 30));
        assert!(!app.game.overlay().is_open());
    }
}
