//! Home tab: warning banner, blurb, live activity stats and popular games.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_ONLINE, COLOR_WARNING};

const WARNING_TEXT: &str =
    "WARNING: This tracker is frequently taken down. Access while you can.";

const ABOUT_TEXT: &str = "This platform tracks player activity, game sessions, and user behavior \
across the Roblox platform. Monitor online status, playtime, and game preferences in real-time.";

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // warning banner
            Constraint::Length(5), // about card
            Constraint::Min(0),    // activity + popular games
        ])
        .split(area);

    render_warning(frame, chunks[0]);
    render_about(frame, chunks[1]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);

    render_live_activity(frame, bottom[0], app);
    render_popular_games(frame, bottom[1], app);
}

fn render_warning(frame: &mut Frame, area: Rect) {
    let warning = Paragraph::new(Line::from(Span::styled(
        WARNING_TEXT,
        Style::default()
            .fg(COLOR_WARNING)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_WARNING)),
    );
    frame.render_widget(warning, area);
}

fn render_about(frame: &mut Frame, area: Rect) {
    let about = Paragraph::new(ABOUT_TEXT)
        .style(Style::default().fg(COLOR_DIM))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" What is ROBLOX TRACKER? ")
                .title_style(Style::default().fg(COLOR_HEADER))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(COLOR_BORDER)),
        );
    frame.render_widget(about, area);
}

fn render_live_activity(frame: &mut Frame, area: Rect, app: &App) {
    let stats = app.home_stats();
    let lines = vec![
        stat_line("Players Online", stats.players_online, COLOR_ONLINE),
        stat_line("Active Games", stats.active_games, COLOR_ACCENT),
        stat_line("Total Tracked", stats.total_tracked, COLOR_HEADER),
    ];
    let activity = Paragraph::new(lines).block(
        Block::default()
            .title(" Live Activity ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_BORDER)),
    );
    frame.render_widget(activity, area);
}

fn stat_line(label: &str, value: usize, color: ratatui::style::Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {:<16}", label), Style::default().fg(COLOR_DIM)),
        Span::styled(
            value.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])
}

fn render_popular_games(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app
        .popular_games()
        .iter()
        .map(|game| {
            Line::from(vec![
                Span::styled(format!(" {:<20}", game.name), Style::default().fg(COLOR_HEADER)),
                Span::styled(
                    format!("{} players", game.players),
                    Style::default().fg(COLOR_DIM),
                ),
            ])
        })
        .collect();
    let popular = Paragraph::new(lines).block(
        Block::default()
            .title(" Popular Games ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_BORDER)),
    );
    frame.render_widget(popular, area);
}
