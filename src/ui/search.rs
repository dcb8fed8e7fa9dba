//! Filter input
use crate::theme::Theme;
use crate::ui::layout::input_cursor;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, area: Rect, text: &str, focused: bool, theme: &Theme) {
    let paragraph = Paragraph::new(text.to_string())
        .style(Style::default().fg(theme.palette.text_primary))
        .block(
            Block::default()
                .title(" Filter by Title ")
                .borders(Borders::ALL)
                .border_style(theme.border_style(focused)),
        );
    frame.render_widget(paragraph, area);

    if focused {
        let (x, y) = input_cursor(area, text);
        frame.set_cursor(x, y);
    }
}
