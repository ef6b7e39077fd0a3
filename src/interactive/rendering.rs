//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::{length_badge, spaced_letters};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<W, S>(f: &mut Frame, app: &App<W, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Accepted words
            Constraint::Percentage(40), // Score + messages
        ])
        .split(chunks[1]);

    render_words(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    if app.input_mode == InputMode::Alert {
        render_alert(f, app);
    }
}

fn render_header<W, S>(f: &mut Frame, app: &App<W, S>, area: Rect) {
    let root = app
        .session()
        .map(|s| spaced_letters(s.root_word()))
        .unwrap_or_default();

    let header = Paragraph::new(root)
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" 🔤 WORD SCRAMBLE ")
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_words<W, S>(f: &mut Frame, app: &App<W, S>, area: Rect) {
    let words = app.session().map(|s| s.accepted_words()).unwrap_or_default();

    let items: Vec<ListItem> = if words.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "No words yet. Start typing!",
            Style::default().fg(Color::DarkGray),
        )))]
    } else {
        words
            .iter()
            .map(|word| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        length_badge(word.chars().count()),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::raw("  "),
                    Span::styled(word.clone(), Style::default().fg(Color::White)),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(" Your Words ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_info_panel<W, S>(f: &mut Frame, app: &App<W, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Score
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_score(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_score<W, S>(f: &mut Frame, app: &App<W, S>, area: Rect) {
    let longest = app
        .session()
        .and_then(|s| s.accepted_words().iter().map(|w| w.chars().count()).max())
        .unwrap_or(0);

    let content = vec![
        Line::from(vec![
            Span::raw("Score:   "),
            Span::styled(
                app.score().to_string(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Longest: {longest} letters")),
        Line::from(format!("Round:   {}", app.engine.rounds_started())),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Score ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn render_messages<W, S>(f: &mut Frame, app: &App<W, S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<W, S>(f: &mut Frame, app: &App<W, S>, area: Rect) {
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Enter your word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(input, area);

    if app.input_mode == InputMode::Typing {
        let cursor_x = area.x + 1 + app.input_buffer.chars().count() as u16;
        f.set_cursor_position((cursor_x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

fn render_status<W, S>(f: &mut Frame, app: &App<W, S>, area: Rect) {
    let help_text = match app.input_mode {
        InputMode::Typing => "Enter: Submit | Ctrl+R: New Word | Esc: Quit",
        InputMode::Alert => "Press any key to continue",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn render_alert<W, S>(f: &mut Frame, app: &App<W, S>) {
    let Some(alert) = &app.alert else {
        return;
    };

    let area = centered_rect(f.area(), 50, 7);
    let content = vec![
        Line::from(""),
        Line::from(alert.message.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let popup = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", alert.title))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Thick)
                .style(Style::default().fg(Color::Red)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// Rectangle of the given width (percent) and height (rows) centered in `area`
fn centered_rect(area: Rect, percent_x: u16, height: u16) -> Rect {
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(area);
    area
}
