//! Layout rendering (navigation bar, search bar, drop zone, status line)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::model::{ActiveSection, DropZone, Route, UiState};
use super::utils::{section_block, truncate_string};

pub fn render_nav_bar(frame: &mut Frame, area: Rect, route: Route) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14), // Brand
            Constraint::Min(0),     // Route tabs
        ])
        .split(area);

    let brand = Paragraph::new("BuildUp")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).padding(Padding::horizontal(1)));
    frame.render_widget(brand, chunks[0]);

    let titles: Vec<Line> = Route::ALL
        .iter()
        .enumerate()
        .map(|(i, r)| Line::from(format!("{} {}", i + 1, r.title())))
        .collect();
    let selected = Route::ALL.iter().position(|r| *r == route).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(tabs, chunks[1]);
}

pub fn render_search_bar(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let is_focused = ui_state.active_section == ActiveSection::Search;
    let search_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };

    let search_text = if ui_state.search_input.is_empty() {
        "Type to search..."
    } else {
        &ui_state.search_input
    };

    let search = Paragraph::new(search_text)
        .style(search_style)
        .block(section_block(" Search ", is_focused));
    frame.render_widget(search, area);
}

pub fn render_drop_zone(frame: &mut Frame, area: Rect, drop_zone: &DropZone) {
    let border_color = if drop_zone.armed { Color::Blue } else { Color::DarkGray };

    let text = if drop_zone.files.is_empty() {
        Line::from("Drag and drop files here, or paste their paths")
    } else {
        let names: Vec<String> = drop_zone
            .files
            .iter()
            .map(|path| {
                path.file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string())
            })
            .collect();
        let listing = truncate_string(&names.join(", "), area.width.saturating_sub(30) as usize);
        Line::from(vec![
            Span::styled(
                format!("{} file(s) selected", drop_zone.files.len()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(listing, Style::default().fg(Color::Gray)),
        ])
    };

    let zone = Paragraph::new(text)
        .centered()
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Files ")
                .border_style(Style::default().fg(border_color)),
        );
    frame.render_widget(zone, area);
}

pub fn render_status_bar(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let line = if let Some(notice) = &ui_state.notice {
        Line::from(Span::styled(notice.as_str(), Style::default().fg(Color::Yellow)))
    } else {
        Line::from(Span::styled(
            key_hints(ui_state),
            Style::default().fg(Color::DarkGray),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn key_hints(ui_state: &UiState) -> &'static str {
    match (ui_state.route, ui_state.active_section) {
        (Route::Landing, _) => " Enter start  1/2/3 switch view  h help  q quit",
        (Route::Home, ActiveSection::Search) => " type to search  Enter/↓ results  Tab next section  Esc clear",
        (Route::Home, ActiveSection::DropZone) => " drop files to capture them  Del clear  Tab next section",
        (_, _) => " ↑/↓ move  Enter select  p/b/i links  z quiz  f flashcards  r reload  h help",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn drop_zone_counts_files() {
        let zone = DropZone {
            files: vec![PathBuf::from("/tmp/week1.pdf"), PathBuf::from("/tmp/week2.pdf")],
            armed: true,
        };
        let mut terminal = Terminal::new(TestBackend::new(100, 5)).unwrap();
        terminal
            .draw(|f| render_drop_zone(f, f.area(), &zone))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = (0..buffer.area.height)
            .flat_map(|y| (0..buffer.area.width).map(move |x| (x, y)))
            .map(|pos| buffer[pos].symbol().to_string())
            .collect();
        assert!(text.contains("2 file(s) selected"));
        assert!(text.contains("week1.pdf"));
    }
}
