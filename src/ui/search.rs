//! Search tab: query input plus matched players and games.
//!
//! Three mutually exclusive result states: the "start typing" placeholder
//! for an empty query, the "no results" card for a query matching nothing,
//! and the result sections otherwise.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use super::theme::{status_color, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_input(frame, chunks[0], app);
    render_results(frame, chunks[1], app);
}

fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let input = Paragraph::new(Line::from(vec![
        Span::styled(app.search_query.clone(), Style::default().fg(COLOR_HEADER)),
        Span::styled("\u{258C}", Style::default().fg(COLOR_ACCENT)),
    ]))
    .block(
        Block::default()
            .title(" Search Players & Games ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_ACCENT)),
    );
    frame.render_widget(input, area);
}

fn render_results(frame: &mut Frame, area: Rect, app: &App) {
    if !app.is_searching() {
        render_placeholder(frame, area, "Start typing to search...");
        return;
    }

    let players = app.filtered_players();
    let games = app.filtered_games();

    if players.is_empty() && games.is_empty() {
        render_placeholder(
            frame,
            area,
            &format!("No results found for \"{}\"", app.search_query),
        );
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            section_height(players.len()),
            section_height(games.len()),
            Constraint::Min(0),
        ])
        .split(area);

    if !players.is_empty() {
        let lines: Vec<Line> = players
            .iter()
            .map(|player| {
                Line::from(vec![
                    Span::styled(" \u{25CF} ", Style::default().fg(status_color(player.status))),
                    Span::styled(
                        format!("{:<18}", player.username),
                        Style::default().fg(COLOR_HEADER),
                    ),
                    Span::styled(player.status.label(), Style::default().fg(COLOR_DIM)),
                ])
            })
            .collect();
        let card = Paragraph::new(lines).block(
            Block::default()
                .title(format!(" Players ({}) ", players.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(COLOR_BORDER)),
        );
        frame.render_widget(card, chunks[0]);
    }

    if !games.is_empty() {
        let lines: Vec<Line> = games
            .iter()
            .map(|game| {
                Line::from(vec![
                    Span::styled(
                        format!(" {:<20}", game.name),
                        Style::default().fg(COLOR_HEADER),
                    ),
                    Span::styled(
                        format!("{} active", game.players),
                        Style::default().fg(COLOR_DIM),
                    ),
                ])
            })
            .collect();
        let card = Paragraph::new(lines).block(
            Block::default()
                .title(format!(" Games ({}) ", games.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(COLOR_BORDER)),
        );
        frame.render_widget(card, chunks[1]);
    }
}

/// Rows plus the border, collapsed to nothing when the section is empty.
fn section_height(rows: usize) -> Constraint {
    if rows == 0 {
        Constraint::Length(0)
    } else {
        Constraint::Length(rows as u16 + 2)
    }
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str) {
    let placeholder = Paragraph::new(Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(COLOR_DIM)
            .add_modifier(Modifier::ITALIC),
    )))
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_BORDER)),
    );
    frame.render_widget(placeholder, area);
}
