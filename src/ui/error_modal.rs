//! Dismissible dialog for the shared request error
use crate::theme::Theme;
use crate::ui::layout::centered_rect;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub const TITLE: &str = " An Error Occurred! ";
pub const BUTTON: &str = "[ Okay ]";

pub fn render(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let modal = centered_rect(56, 8, area);

    // Clear the area first for proper overlay
    frame.render_widget(Clear, modal);

    let block = Block::default()
        .title(Span::styled(
            TITLE,
            Style::default()
                .fg(theme.palette.error)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.palette.error))
        .style(Style::default().bg(theme.palette.surface));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(theme.palette.text_primary),
        )),
        Line::from(""),
        Line::from(Span::styled(BUTTON, theme.selected_style())),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, modal);
}
