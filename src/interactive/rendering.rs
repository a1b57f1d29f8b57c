//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard, toast line and the help/round-over popups.

use super::app::App;
use crate::core::LetterClassification;
use crate::game::{RoundStatus, Signal};
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};
use std::time::Instant;

/// Screen regions, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub board: Rect,
    pub toast: Rect,
    pub keyboard: Rect,
    pub status: Rect,
}

/// Split the screen for a board with `max_attempts` rows
#[must_use]
pub fn screen_layout(area: Rect, max_attempts: usize) -> ScreenLayout {
    let board_height = u16::try_from(max_attempts).unwrap_or(u16::MAX).saturating_add(2);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Length(board_height), // Board
            Constraint::Length(1),            // Toast
            Constraint::Length(7),            // Keyboard
            Constraint::Length(1),            // Status bar
            Constraint::Min(0),
        ])
        .split(area);

    ScreenLayout {
        header: chunks[0],
        board: chunks[1],
        toast: chunks[2],
        keyboard: chunks[3],
        status: chunks[4],
    }
}

/// A key of the on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCap {
    Letter(u8),
    Enter,
    Backspace,
}

impl KeyCap {
    fn label(self) -> String {
        match self {
            Self::Letter(letter) => format!(" {} ", char::from(letter.to_ascii_uppercase())),
            Self::Enter => " ENTER ".to_string(),
            Self::Backspace => " ⌫ ".to_string(),
        }
    }

    fn width(self) -> u16 {
        match self {
            Self::Enter => 7,
            Self::Letter(_) | Self::Backspace => 3,
        }
    }

    /// Signal this key sends while a round is in progress
    #[must_use]
    pub const fn signal(self) -> Signal {
        match self {
            Self::Letter(letter) => Signal::Letter(letter as char),
            Self::Enter => Signal::Submit,
            Self::Backspace => Signal::Backspace,
        }
    }
}

/// Position of every key inside the keyboard area
///
/// Keys that would not fit are left out, so drawing and hit-testing agree on
/// small terminals.
#[must_use]
pub fn key_rects(area: Rect) -> Vec<(Rect, KeyCap)> {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let mut rects = Vec::new();

    for (i, letters) in KEYBOARD_ROWS.iter().enumerate() {
        let mut caps: Vec<KeyCap> = letters.bytes().map(KeyCap::Letter).collect();
        if i == KEYBOARD_ROWS.len() - 1 {
            caps.insert(0, KeyCap::Enter);
            caps.push(KeyCap::Backspace);
        }

        let gaps = u16::try_from(caps.len().saturating_sub(1)).unwrap_or(0);
        let total: u16 = caps.iter().map(|cap| cap.width()).sum::<u16>() + gaps;
        let y = inner.y + u16::try_from(i * 2).unwrap_or(u16::MAX);
        if y >= inner.bottom() || total > inner.width {
            continue;
        }

        let mut x = inner.x + (inner.width - total) / 2;
        for cap in caps {
            rects.push((Rect::new(x, y, cap.width(), 1), cap));
            x += cap.width() + 1;
        }
    }

    rects
}

/// The key under a mouse position, if any
#[must_use]
pub fn key_at(area: Rect, column: u16, row: u16) -> Option<KeyCap> {
    key_rects(area)
        .into_iter()
        .find(|(rect, _)| {
            column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
        })
        .map(|(_, cap)| cap)
}

fn classification_style(classification: Option<LetterClassification>) -> Style {
    match classification {
        Some(LetterClassification::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(LetterClassification::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(LetterClassification::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::Black).bg(Color::Gray),
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App, now: Instant) {
    let layout = screen_layout(f.area(), app.game.config().max_attempts);

    render_header(f, layout.header);
    render_board(f, app, layout.board, now);
    render_toast(f, app, layout.toast, now);
    render_keyboard(f, app, layout.keyboard);
    render_status(f, app, layout.status);

    if app.game.overlay().is_open() {
        render_help(f, app);
    } else if let Some((status, answer)) = app.game.display().outcome(now) {
        render_round_over(f, app, status, &answer.text().to_uppercase());
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("S E D L E")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect, now: Instant) {
    let board = app.game.display();
    let lines: Vec<Line> = (0..board.max_attempts())
        .map(|attempt| {
            let mut spans = Vec::with_capacity(board.word_length() * 2);
            for position in 0..board.word_length() {
                if position > 0 {
                    spans.push(Span::raw(" "));
                }
                let cell = board.cell(attempt, position, now);
                let span = match (cell.letter, cell.classification) {
                    (Some(letter), Some(classification)) => Span::styled(
                        format!(" {} ", letter.to_ascii_uppercase()),
                        classification_style(Some(classification)),
                    ),
                    (Some(letter), None) => Span::styled(
                        format!(" {} ", letter.to_ascii_uppercase()),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                    ),
                    (None, _) => Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                };
                spans.push(span);
            }
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_toast(f: &mut Frame, app: &App, area: Rect, now: Instant) {
    if let Some(message) = app.game.notifier().visible(now) {
        let toast = Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
        f.render_widget(toast, area);
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    f.render_widget(block, area);

    let keyboard = app.game.display().keyboard();
    for (rect, cap) in key_rects(area) {
        let classification = match cap {
            KeyCap::Letter(letter) => keyboard.get(letter),
            KeyCap::Enter | KeyCap::Backspace => None,
        };
        let key = Paragraph::new(cap.label()).style(classification_style(classification));
        f.render_widget(key, rect);
    }
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.game.stats();
    let status = format!(
        "Round {} | Played {} | Won {} ({:.0}%) | ?: Help | Esc: Quit",
        stats.rounds_played + 1,
        stats.rounds_played,
        stats.rounds_won,
        stats.win_rate()
    );
    let paragraph = Paragraph::new(status)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(paragraph, area);
}

fn render_help(f: &mut Frame, app: &App) {
    let config = app.game.config();
    let content = vec![
        Line::from(Span::styled(
            "How to play",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "Guess the word in {} tries. Each guess must be {} letters.",
            config.max_attempts, config.word_length
        )),
        Line::from("Press Enter to submit. After each guess the tiles change color."),
        Line::from(""),
        Line::from(vec![
            Span::styled(" S ", classification_style(Some(LetterClassification::Correct))),
            Span::raw(" is in the word and in the correct spot."),
        ]),
        Line::from(vec![
            Span::styled(" L ", classification_style(Some(LetterClassification::Present))),
            Span::raw(" is in the word but in the wrong spot."),
        ]),
        Line::from(vec![
            Span::styled(" V ", classification_style(Some(LetterClassification::Absent))),
            Span::raw(" is not in the word in any spot."),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Esc or click to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let area = centered_rect(f.area(), 64, 14);
    f.render_widget(Clear, area);
    let popup = Paragraph::new(content).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(popup, area);
}

fn render_round_over(f: &mut Frame, app: &App, status: RoundStatus, answer: &str) {
    let color = match status {
        RoundStatus::Won => Color::Green,
        RoundStatus::Lost | RoundStatus::InProgress => Color::Red,
    };

    let mut content = vec![
        Line::from(Span::styled(
            "Sedle!",
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("The word was: "),
            Span::styled(
                answer.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];
    for row in app.game.display().rows() {
        content.push(Line::from(row.to_emoji()));
    }
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "Enter: Next Sedler?",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));

    let height = u16::try_from(content.len()).unwrap_or(u16::MAX).saturating_add(2);
    let area = centered_rect(f.area(), 36, height);
    f.render_widget(Clear, area);
    let popup = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );
    f.render_widget(popup, area);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [vertical] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [centered] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(vertical);
    centered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{AnswerSource, GameConfig};
    use crate::interactive::config::UiConfig;
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App {
        App::new(
            GameConfig::default(),
            AnswerSource::from_slice(&["slave", "egypt"]).unwrap(),
            UiConfig::default(),
        )
        .unwrap()
    }

    fn render(app: &App, now: Instant) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| ui(f, app, now)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn layout_stacks_regions() {
        let layout = screen_layout(Rect::new(0, 0, 80, 30), 6);
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.board.height, 8);
        assert_eq!(layout.keyboard.y, layout.toast.y + 1);
        assert_eq!(layout.keyboard.height, 7);
    }

    #[test]
    fn keyboard_has_every_letter_plus_enter_and_backspace() {
        let keys = key_rects(Rect::new(0, 0, 80, 7));
        assert_eq!(keys.len(), 26 + 2);
        assert!(keys.iter().any(|&(_, cap)| cap == KeyCap::Enter));
        assert!(keys.iter().all(|(rect, _)| rect.right() <= 79));
    }

    #[test]
    fn narrow_keyboard_drops_rows_that_do_not_fit() {
        assert!(key_rects(Rect::new(0, 0, 20, 7)).is_empty());
    }

    #[test]
    fn key_at_hits_and_misses() {
        let area = Rect::new(0, 10, 80, 7);
        let (rect, cap) = key_rects(area)[3];
        assert_eq!(key_at(area, rect.x + 1, rect.y), Some(cap));
        assert_eq!(key_at(area, 0, 0), None);
    }

    #[test]
    fn key_signals() {
        assert_eq!(KeyCap::Letter(b'q').signal(), Signal::Letter('q'));
        assert_eq!(KeyCap::Enter.signal(), Signal::Submit);
        assert_eq!(KeyCap::Backspace.signal(), Signal::Backspace);
    }

    #[test]
    fn renders_title_keyboard_and_typed_letters() {
        let mut app = app();
        app.game.handle(Signal::Letter('s'));
        let screen = render(&app, Instant::now());

        assert!(screen.contains("S E D L E"));
        assert!(screen.contains("ENTER"));
        assert!(screen.contains(" S "));
        assert!(screen.contains("Round 1"));
    }

    #[test]
    fn renders_help_overlay() {
        let mut app = app();
        app.game.overlay_mut().open();
        let screen = render(&app, Instant::now());
        assert!(screen.contains("How to play"));
    }

    #[test]
    fn renders_round_over_after_reveal() {
        let mut app = app();
        for ch in "slave".chars() {
            app.game.handle(Signal::Letter(ch));
        }
        app.game.handle(Signal::Submit);

        let screen = render(&app, Instant::now() + std::time::Duration::from_secs(1));
        assert!(screen.contains("The word was: SLAVE"));
        assert!(screen.contains("Next Sedler?"));
    }
}
