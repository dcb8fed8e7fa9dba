//! Create form: title, amount and the add button
use crate::tea::message::Focus;
use crate::tea::model::FormState;
use crate::theme::Theme;
use crate::ui::layout::input_cursor;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const BUTTON: &str = "[ Add Ingredient ]";

/// Characters the amount field accepts
pub fn is_amount_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    form: &FormState,
    focus: Focus,
    loading: bool,
    theme: &Theme,
) {
    let block = Block::default()
        .title(" Add Ingredient ")
        .borders(Borders::ALL)
        .border_style(theme.border_style(focus.is_form()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Amount
            Constraint::Length(1), // Button row
        ])
        .split(inner);

    render_field(frame, chunks[0], "Name", &form.title, focus == Focus::Title, theme);
    render_field(frame, chunks[1], "Amount", &form.amount, focus == Focus::Amount, theme);

    let mut spans = vec![Span::styled(
        BUTTON,
        if focus.is_form() {
            theme.selected_style()
        } else {
            Style::default().fg(theme.palette.text_secondary)
        },
    )];
    if loading {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            "Loading...",
            Style::default()
                .fg(theme.palette.warning)
                .add_modifier(Modifier::ITALIC),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[2]);
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    theme: &Theme,
) {
    let paragraph = Paragraph::new(value.to_string())
        .style(Style::default().fg(theme.palette.text_primary))
        .block(
            Block::default()
                .title(format!(" {} ", label))
                .borders(Borders::ALL)
                .border_style(theme.border_style(focused)),
        );
    frame.render_widget(paragraph, area);

    if focused {
        let (x, y) = input_cursor(area, value);
        frame.set_cursor(x, y);
    }
}
