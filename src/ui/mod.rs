//! UI rendering for the tracker dashboard.
//!
//! Layout, top to bottom:
//! - Header with the app title and global key hints
//! - Tab bar (Home / Players / Search / Chat)
//! - The active tab's panel
//! - Footer with contextual hints and the transient notice line

mod chat;
mod home;
mod players;
mod search;
pub mod theme;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, Tab};
use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

/// Render the full UI for the current app state.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(3), // tab bar
            Constraint::Min(0),    // active panel
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_tab_bar(frame, chunks[1], app);

    match app.active_tab {
        Tab::Home => home::render(frame, chunks[2], app),
        Tab::Players => players::render(frame, chunks[2], app),
        Tab::Search => search::render(frame, chunks[2], app),
        Tab::Chat => chat::render(frame, chunks[2], app),
    }

    render_footer(frame, chunks[3], app);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            " ROBLOX TRACKER ",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("Ctrl+E export  Ctrl+C quit", Style::default().fg(COLOR_DIM)),
    ]);
    let header = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(COLOR_ACCENT)),
    );
    frame.render_widget(header, area);
}

fn render_tab_bar(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| Line::from(tab.title()))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.active_tab.index())
        .style(Style::default().fg(COLOR_DIM))
        .highlight_style(
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(COLOR_BORDER)),
        );
    frame.render_widget(tabs, area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let text = match &app.notice {
        Some(notice) => Line::from(Span::styled(
            format!(" {}", notice),
            Style::default().fg(COLOR_ACCENT),
        )),
        None => {
            let hints = match app.active_tab {
                Tab::Home | Tab::Players => "Tab switch tab  1-4 jump  q quit",
                Tab::Search => "Tab switch tab  type to search  Esc clear",
                Tab::Chat => "Tab switch tab  Enter send  Esc clear",
            };
            Line::from(Span::styled(
                format!(" {}", hints),
                Style::default().fg(COLOR_DIM),
            ))
        }
    };
    frame.render_widget(Paragraph::new(text), area);
}
