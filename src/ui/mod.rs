pub mod auth;
pub mod error_modal;
pub mod ingredient_form;
pub mod ingredient_list;
pub mod layout;
pub mod search;
pub mod status_bar;

use crate::session::ActiveView;
use crate::tea::message::Focus;
use crate::tea::Model;
use crate::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::Block,
    Frame,
};

use self::layout::IngredientsLayout;

/// Draw the view selected by the session gate, plus the error dialog
pub fn render(frame: &mut Frame, model: &Model, theme: &Theme) {
    let area = frame.size();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.palette.background)),
        area,
    );

    match model.session.active_view() {
        ActiveView::Auth => auth::render(frame, area, theme),
        ActiveView::Ingredients => render_ingredients(frame, area, model, theme),
    }
}

fn render_ingredients(frame: &mut Frame, area: Rect, model: &Model, theme: &Theme) {
    let layout = IngredientsLayout::calculate(area);

    ingredient_form::render(
        frame,
        layout.form,
        &model.form,
        model.focus,
        model.request.loading(),
        theme,
    );
    search::render(
        frame,
        layout.filter,
        model.filter.text(),
        model.focus == Focus::Filter,
        theme,
    );
    ingredient_list::render(
        frame,
        layout.list,
        model.ingredients.items(),
        model.selected,
        model.focus == Focus::List,
        theme,
    );
    status_bar::render(frame, layout.status_bar, model, theme);

    if let Some(message) = model.request.error() {
        error_modal::render(frame, area, message, theme);
    }
}
