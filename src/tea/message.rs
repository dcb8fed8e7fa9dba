/// Messages accepted by the update function
///
/// Key presses, timer expiries and settled requests all arrive as a
/// [`Message`]; nothing else changes the model.

use crate::remote::RequestOutcome;

/// Main application message type
#[derive(Debug, Clone)]
pub enum Message {
    /// Application lifecycle
    System(SystemMessage),

    /// Session gate
    Session(SessionMessage),

    /// Create form edits and submission
    Form(FormMessage),

    /// Filter input and its debounce timer
    Filter(FilterMessage),

    /// Collection actions started by the user
    Ingredients(IngredientMessage),

    /// Remote request completion and error dismissal
    Remote(RemoteMessage),

    /// Focus and selection
    UI(UIMessage),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemMessage {
    /// Application should quit
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionMessage {
    /// Pass the (mock) login screen
    Login,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    TitleChanged(String),
    AmountChanged(String),
    /// Send the form contents to the store
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterMessage {
    /// The filter input now holds this text
    Changed(String),
    /// A debounce timer armed with this text has fired
    Elapsed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngredientMessage {
    /// Delete the ingredient with this id
    Remove(String),
    /// Delete the currently selected ingredient
    RemoveSelected,
    /// Reload with the current filter
    Refresh,
}

#[derive(Debug, Clone)]
pub enum RemoteMessage {
    /// A request has settled
    Settled(RequestOutcome),
    /// Dismiss the error dialog
    ClearError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UIMessage {
    FocusNext,
    FocusPrevious,
    Focus(Focus),
    SelectNext,
    SelectPrevious,
}

/// Input that receives typed characters on the ingredients view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Title,
    Amount,
    Filter,
    List,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Title => Focus::Amount,
            Focus::Amount => Focus::Filter,
            Focus::Filter => Focus::List,
            Focus::List => Focus::Title,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Title => Focus::List,
            Focus::Amount => Focus::Title,
            Focus::Filter => Focus::Amount,
            Focus::List => Focus::Filter,
        }
    }

    pub fn is_form(self) -> bool {
        matches!(self, Focus::Title | Focus::Amount)
    }
}
