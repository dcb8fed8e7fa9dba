use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Areas of the ingredients view, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngredientsLayout {
    pub form: Rect,
    pub filter: Rect,
    pub list: Rect,
    pub status_bar: Rect,
}

impl IngredientsLayout {
    pub const FORM_HEIGHT: u16 = 9;
    pub const FILTER_HEIGHT: u16 = 3;

    pub fn calculate(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(Self::FORM_HEIGHT),   // Create form
                Constraint::Length(Self::FILTER_HEIGHT), // Filter input
                Constraint::Min(3),                      // Ingredient list
                Constraint::Length(1),                   // Status bar
            ])
            .split(area);

        Self {
            form: chunks[0],
            filter: chunks[1],
            list: chunks[2],
            status_bar: chunks[3],
        }
    }
}

/// A `width` x `height` rectangle centred in `area`, shrunk to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Cursor position after `text` inside a bordered one-line input,
/// clamped to the last inner column
pub fn input_cursor(area: Rect, text: &str) -> (u16, u16) {
    let offset = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
    let last_column = area.x.saturating_add(area.width.saturating_sub(2));
    let x = area.x.saturating_add(1).saturating_add(offset).min(last_column);
    (x, area.y.saturating_add(1))
}
