//! Chat tab: observer chat history and the message input line.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::models::ChatMessage;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    render_messages(frame, chunks[0], app);
    render_input(frame, chunks[1], app);
}

fn render_messages(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app.chat_messages.iter().map(message_item).collect();
    let list = List::new(items).block(
        Block::default()
            .title(" Observer Chat ")
            .title_style(Style::default().fg(COLOR_HEADER))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_BORDER)),
    );
    frame.render_widget(list, area);
}

fn message_item(message: &ChatMessage) -> ListItem<'_> {
    let header = Line::from(vec![
        Span::styled(
            message.user.clone(),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", message.timestamp),
            Style::default().fg(COLOR_DIM),
        ),
    ]);
    let body = Line::from(Span::styled(
        format!("  {}", message.message),
        Style::default().fg(COLOR_HEADER),
    ));
    ListItem::new(Text::from(vec![header, body, Line::default()]))
}

fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let input = Paragraph::new(Line::from(vec![
        Span::styled(app.chat_draft.clone(), Style::default().fg(COLOR_HEADER)),
        Span::styled("\u{258C}", Style::default().fg(COLOR_ACCENT)),
    ]))
    .block(
        Block::default()
            .title(" Type your message (Enter to send) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_ACCENT)),
    );
    frame.render_widget(input, area);
}
