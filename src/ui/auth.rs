//! Login screen shown while the session is logged out
use crate::theme::Theme;
use crate::ui::layout::centered_rect;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const TITLE: &str = "You are not authenticated!";
pub const PROMPT: &str = "Please log in to continue.";
pub const BUTTON: &str = "[ Log In ]";

pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
    let card = centered_rect(44, 9, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(true))
        .style(Style::default().bg(theme.palette.surface));

    let lines = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(theme.palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(PROMPT, Style::default().fg(theme.palette.text_secondary))),
        Line::from(""),
        Line::from(Span::styled(BUTTON, theme.selected_style())),
        Line::from(Span::styled(
            "Enter: log in  q: quit",
            Style::default().fg(theme.palette.text_muted),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, card);
}
