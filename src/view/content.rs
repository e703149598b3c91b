//! Result list and detail pane rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::{BrowseScreen, CatalogItem, Quiz, SearchStatus};
use super::utils::{render_scrollable_list, section_block};

pub const NO_RESULTS_TEXT: &str = "No resources found.";
pub const NO_SELECTION_TEXT: &str = "Select a book to view its details and preview";

pub fn render_results_list(
    frame: &mut Frame,
    area: Rect,
    screen: &BrowseScreen,
    title: &str,
    idle_hint: &str,
    is_focused: bool,
) {
    let block = section_block(title, is_focused);

    let message = match screen.search.status() {
        SearchStatus::Idle => Some((idle_hint.to_string(), Style::default().fg(Color::DarkGray))),
        SearchStatus::Loading => Some(("Loading...".to_string(), Style::default().fg(Color::Yellow))),
        SearchStatus::Failed(reason) => Some((format!("Error: {}", reason), Style::default().fg(Color::Red))),
        SearchStatus::Ready if screen.search.results().is_empty() => {
            Some((NO_RESULTS_TEXT.to_string(), Style::default().fg(Color::DarkGray)))
        }
        SearchStatus::Ready => None,
    };

    if let Some((text, style)) = message {
        let paragraph = Paragraph::new(text)
            .style(style)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let picked_id = screen.selection.selected().map(|item| item.id.as_str());
    let items: Vec<ListItem> = screen
        .search
        .results()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let is_cursor = i == screen.cursor;
            let marker = if picked_id == Some(item.id.as_str()) { "▶ " } else { "  " };

            let title_style = if is_cursor && is_focused {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else if is_cursor {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let mut lines = vec![Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Cyan)),
                Span::styled(item.display_title().to_string(), title_style),
            ])];
            let byline = item.byline();
            if !byline.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("  {}", byline),
                    Style::default().fg(Color::Gray),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    render_scrollable_list(frame, area, items, screen.cursor, block);
}

pub fn render_detail(frame: &mut Frame, area: Rect, screen: &BrowseScreen) {
    // A failed request takes over the detail pane as well
    if let SearchStatus::Failed(reason) = screen.search.status() {
        let error = Paragraph::new(format!("Error: {}", reason))
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true })
            .block(section_block(" Details ", false));
        frame.render_widget(error, area);
        return;
    }

    let Some(item) = screen.selection.selected() else {
        let placeholder = Paragraph::new(NO_SELECTION_TEXT)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true })
            .block(section_block(" Details ", false));
        frame.render_widget(placeholder, area);
        return;
    };

    let quiz = screen.visible_quiz();
    let quiz_height = quiz.map(|q| q.questions.len() as u16 + 3).unwrap_or(0);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),              // Book details
            Constraint::Length(quiz_height), // Quiz panel
            Constraint::Length(4),           // Embedded preview
        ])
        .split(area);

    render_item_info(frame, chunks[0], item);
    if let Some(quiz) = quiz {
        render_quiz(frame, chunks[1], quiz);
    }
    render_preview(frame, chunks[2], item);
}

fn render_item_info(frame: &mut Frame, area: Rect, item: &CatalogItem) {
    let mut lines = vec![Line::from(Span::styled(
        item.display_title().to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    let byline = item.byline();
    if !byline.is_empty() {
        lines.push(Line::from(Span::styled(byline, Style::default().fg(Color::Gray))));
    }
    if let Some(thumbnail) = &item.thumbnail_url {
        lines.push(Line::from(Span::styled(
            format!("Cover: {}", thumbnail),
            Style::default().fg(Color::DarkGray),
        )));
    }
    if let Some(description) = &item.description {
        lines.push(Line::from(""));
        lines.push(Line::from(description.as_str()));
    }

    lines.push(Line::from(""));
    let mut links = vec![action_span("p", "Preview Book", Color::Blue)];
    if item.buy_link.is_some() {
        links.push(Span::raw("  "));
        links.push(action_span("b", "Buy Book", Color::Green));
    }
    links.push(Span::raw("  "));
    links.push(action_span("i", "More Info", Color::Gray));
    lines.push(Line::from(links));
    lines.push(Line::from(vec![
        action_span("z", "Create Quiz", Color::Magenta),
        Span::raw("  "),
        action_span("f", "Create Flashcards", Color::Yellow),
    ]));

    let info = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(section_block(" Details ", false));
    frame.render_widget(info, area);
}

fn action_span(key: &str, label: &str, color: Color) -> Span<'static> {
    Span::styled(
        format!("[{}] {}", key, label),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

fn render_quiz(frame: &mut Frame, area: Rect, quiz: &Quiz) {
    let lines: Vec<Line> = quiz
        .questions
        .iter()
        .map(|q| Line::from(q.as_str()))
        .collect();

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", quiz.title))
            .padding(Padding::horizontal(1))
            .border_style(Style::default().fg(Color::Magenta)),
    );
    frame.render_widget(panel, area);
}

fn render_preview(frame: &mut Frame, area: Rect, item: &CatalogItem) {
    let lines = vec![
        Line::from(Span::styled(item.embed_url(), Style::default().fg(Color::Cyan))),
        Line::from(Span::styled(
            "[v] open the preview in your browser",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let preview = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Book Preview ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(preview, area);
}
