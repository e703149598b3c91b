//! Landing page

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

const TAGLINE: &str = "Upload your files, and let Build Up transform them into powerful study tools, flashcards, and quizzes at your fingertips";

pub fn render_landing(frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Min(8),
            Constraint::Percentage(30),
        ])
        .split(columns[1]);

    let lines = vec![
        Line::from(Span::styled(
            "B U I L D U P",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(TAGLINE),
        Line::from(""),
        Line::from(Span::styled(
            "[ Enter ] Start now",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "3 browse educational resources",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let landing = Paragraph::new(lines).centered().wrap(Wrap { trim: true });
    frame.render_widget(landing, rows[1]);
}
