//! Scrollable ingredient list with per-row delete
use crate::ingredient::Ingredient;
use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub const EMPTY_TEXT: &str = "No ingredients yet.";

pub fn render(
    frame: &mut Frame,
    area: Rect,
    items: &[Ingredient],
    selected: Option<usize>,
    focused: bool,
    theme: &Theme,
) {
    let title = if focused {
        " Loaded Ingredients (d: delete, r: reload) "
    } else {
        " Loaded Ingredients "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(theme.border_style(focused));

    if items.is_empty() {
        let paragraph = Paragraph::new(EMPTY_TEXT)
            .style(Style::default().fg(theme.palette.text_muted))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let rows: Vec<ListItem> = items
        .iter()
        .map(|ingredient| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    ingredient.title.clone(),
                    Style::default().fg(theme.palette.text_primary),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("{}x", ingredient.amount),
                    Style::default().fg(theme.palette.text_secondary),
                ),
            ]))
        })
        .collect();

    let list = List::new(rows)
        .block(block)
        .highlight_style(if focused {
            theme.selected_style()
        } else {
            Style::default().fg(theme.palette.accent)
        })
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(selected);
    frame.render_stateful_widget(list, area, &mut state);
}
