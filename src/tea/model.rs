/// Application model following TEA pattern
///
/// Holds every piece of state the views read. It is only changed by
/// [`crate::tea::update`].

use crate::filter::FilterState;
use crate::ingredient::{Ingredient, NewIngredient};
use crate::remote::RequestStatus;
use crate::session::Session;
use crate::store::IngredientStore;
use crate::tea::message::Focus;
use chrono::{DateTime, Local};

/// Main application model containing all state
#[derive(Debug, Clone, Default)]
pub struct Model {
    /// Mock login state; selects the top-level view
    pub session: Session,

    /// Local copy of the remote collection
    pub ingredients: IngredientStore,

    /// Loading/error status of remote requests
    pub request: RequestStatus,

    /// Create form contents
    pub form: FormState,

    /// Filter input contents
    pub filter: FilterState,

    /// Focused input on the ingredients view
    pub focus: Focus,

    /// Highlighted row of the list
    pub selected: Option<usize>,

    /// When the last listing was applied
    pub last_loaded: Option<DateTime<Local>>,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_ingredient(&self) -> Option<&Ingredient> {
        self.selected.and_then(|index| self.ingredients.get(index))
    }

    /// Keep the selection on an existing row after the collection changed
    pub fn clamp_selection(&mut self) {
        let len = self.ingredients.len();
        self.selected = if len == 0 {
            None
        } else {
            Some(self.selected.unwrap_or(0).min(len - 1))
        };
    }

    /// Whether the error dialog is showing
    pub fn has_error(&self) -> bool {
        self.request.error().is_some()
    }
}

/// Create form contents. Nothing is validated; empty fields are sent as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub title: String,
    pub amount: String,
}

impl FormState {
    pub fn to_new_ingredient(&self) -> NewIngredient {
        NewIngredient::new(self.title.clone(), self.amount.clone())
    }
}
