//! Players tab: one card per tracked player.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::models::Player;
use super::theme::{status_color, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

/// Height of one player card, including its border.
const CARD_HEIGHT: u16 = 7;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let constraints: Vec<Constraint> = app
        .players
        .iter()
        .map(|_| Constraint::Length(CARD_HEIGHT))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (player, row) in app.players.iter().zip(rows.iter()) {
        render_card(frame, *row, player);
    }
}

fn render_card(frame: &mut Frame, area: Rect, player: &Player) {
    let mut lines = vec![
        detail_line("Last Seen", &player.last_seen),
        detail_line("Playtime", &player.playtime),
        detail_line("Account Age", &player.account_age),
    ];
    if let Some(game) = &player.current_game {
        lines.push(Line::from(vec![
            Span::styled(" \u{25B8} ", Style::default().fg(COLOR_ACCENT)),
            Span::styled(
                game.clone(),
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", player.username),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("[{}] ", player.status.label()),
            Style::default().fg(status_color(player.status)),
        ),
    ]);

    let card = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_BORDER)),
    );
    frame.render_widget(card, area);
}

fn detail_line<'a>(label: &'a str, value: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!(" {:<13}", label), Style::default().fg(COLOR_DIM)),
        Span::styled(value, Style::default().fg(COLOR_HEADER)),
    ])
}
