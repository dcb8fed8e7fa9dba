use crate::session::ActiveView;
use crate::tea::message::{
    FilterMessage, Focus, FormMessage, IngredientMessage, Message, RemoteMessage,
    SessionMessage, SystemMessage, UIMessage,
};
use crate::tea::Model;
use crate::ui::ingredient_form::is_amount_char;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translates terminal key presses into messages for the current model
#[derive(Debug, Default)]
pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    /// Map a key event to a message, or `None` when the key does nothing here
    pub fn handle_key_event(&self, key: KeyEvent, model: &Model) -> Option<Message> {
        // Releases and repeats are reported on some terminals
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Message::System(SystemMessage::Quit));
        }

        match model.session.active_view() {
            ActiveView::Auth => self.handle_auth_key(key),
            ActiveView::Ingredients if model.has_error() => self.handle_error_key(key),
            ActiveView::Ingredients => self.handle_ingredients_key(key, model),
        }
    }

    fn handle_auth_key(&self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Enter | KeyCode::Char('l') => Some(Message::Session(SessionMessage::Login)),
            KeyCode::Char('q') | KeyCode::Esc => Some(Message::System(SystemMessage::Quit)),
            _ => None,
        }
    }

    /// The error dialog captures every key until dismissed
    fn handle_error_key(&self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => Some(Message::Remote(RemoteMessage::ClearError)),
            _ => None,
        }
    }

    fn handle_ingredients_key(&self, key: KeyEvent, model: &Model) -> Option<Message> {
        match key.code {
            KeyCode::Tab => return Some(Message::UI(UIMessage::FocusNext)),
            KeyCode::BackTab => return Some(Message::UI(UIMessage::FocusPrevious)),
            _ => {}
        }

        match model.focus {
            Focus::Title => self.edit_field(key, &model.form.title, |text| {
                Message::Form(FormMessage::TitleChanged(text))
            }),
            Focus::Amount => {
                if let KeyCode::Char(c) = key.code {
                    if !is_amount_char(c) {
                        return None;
                    }
                }
                self.edit_field(key, &model.form.amount, |text| {
                    Message::Form(FormMessage::AmountChanged(text))
                })
            }
            Focus::Filter => match key.code {
                KeyCode::Enter | KeyCode::Down => Some(Message::UI(UIMessage::Focus(Focus::List))),
                _ => self.edit_field(key, model.filter.text(), |text| {
                    Message::Filter(FilterMessage::Changed(text))
                }),
            },
            Focus::List => self.handle_list_key(key),
        }
    }

    /// Shared text editing for the form and filter inputs
    fn edit_field<F>(&self, key: KeyEvent, current: &str, changed: F) -> Option<Message>
    where
        F: FnOnce(String) -> Message,
    {
        match key.code {
            KeyCode::Enter => Some(Message::Form(FormMessage::Submit)),
            KeyCode::Esc => Some(Message::UI(UIMessage::Focus(Focus::List))),
            KeyCode::Backspace => {
                let mut text = current.to_string();
                text.pop()?;
                Some(changed(text))
            }
            KeyCode::Char(c) => {
                let mut text = current.to_string();
                text.push(c);
                Some(changed(text))
            }
            _ => None,
        }
    }

    fn handle_list_key(&self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Message::UI(UIMessage::SelectPrevious)),
            KeyCode::Down | KeyCode::Char('j') => Some(Message::UI(UIMessage::SelectNext)),
            KeyCode::Char('d') | KeyCode::Delete => {
                Some(Message::Ingredients(IngredientMessage::RemoveSelected))
            }
            KeyCode::Char('r') => Some(Message::Ingredients(IngredientMessage::Refresh)),
            KeyCode::Char('/') => Some(Message::UI(UIMessage::Focus(Focus::Filter))),
            KeyCode::Char('a') => Some(Message::UI(UIMessage::Focus(Focus::Title))),
            KeyCode::Char('q') | KeyCode::Esc => Some(Message::System(SystemMessage::Quit)),
            _ => None,
        }
    }
}
