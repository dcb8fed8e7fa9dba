use crate::tea::message::Focus;
use crate::tea::Model;
use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Left part: request state, item count and last load time
pub fn status_text(model: &Model) -> String {
    let state = if model.request.loading() {
        "Loading..."
    } else if model.has_error() {
        "Error"
    } else {
        "Ready"
    };

    let mut text = format!("{} | {} items", state, model.ingredients.len());
    if let Some(loaded) = model.last_loaded {
        text.push_str(&format!(" | loaded {}", loaded.format("%H:%M:%S")));
    }
    if !model.filter.text().is_empty() {
        text.push_str(&format!(" | filter \"{}\"", model.filter.text()));
    }
    text
}

/// Right part: keys that do something in the current focus
pub fn hints(focus: Focus) -> &'static str {
    match focus {
        Focus::Title | Focus::Amount => "Tab: next  Enter: add  Ctrl+C: quit",
        Focus::Filter => "Tab: next  type to filter  Ctrl+C: quit",
        Focus::List => "j/k: move  d: delete  r: reload  q: quit",
    }
}

pub fn render(frame: &mut Frame, area: Rect, model: &Model, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let status_style = if model.has_error() {
        Style::default().fg(theme.palette.error)
    } else if model.request.loading() {
        Style::default().fg(theme.palette.warning)
    } else {
        Style::default().fg(theme.palette.success)
    };

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(status_text(model), status_style))),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints(model.focus),
            Style::default().fg(theme.palette.text_muted),
        )))
        .alignment(Alignment::Right),
        chunks[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingredient::Ingredient;
    use crate::remote::RequestSlot;

    #[test]
    fn test_status_text() {
        let mut model = Model::new();
        assert_eq!(status_text(&model), "Ready | 0 items");

        model.ingredients.append(Ingredient::new("a", "Salt", "1"));
        model.filter.set_text("Salt");
        model.request.begin(RequestSlot::Load);
        assert_eq!(status_text(&model), "Loading... | 1 items | filter \"Salt\"");
    }
}
