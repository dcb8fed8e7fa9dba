//! Mock session gate
//!
//! There are no credentials: logging in always succeeds and lasts for the
//! rest of the process.

/// Whether the user has passed the login screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn,
}

/// Top-level view selected by the session gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    Auth,
    Ingredients,
}

/// Session handed to the views that need it
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: SessionState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to `LoggedIn`. Returns `false` when already logged in.
    pub fn login(&mut self) -> bool {
        match self.state {
            SessionState::LoggedOut => {
                self.state = SessionState::LoggedIn;
                true
            }
            SessionState::LoggedIn => false,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == SessionState::LoggedIn
    }

    pub fn active_view(&self) -> ActiveView {
        match self.state {
            SessionState::LoggedOut => ActiveView::Auth,
            SessionState::LoggedIn => ActiveView::Ingredients,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_logged_out() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert_eq!(session.active_view(), ActiveView::Auth);
    }

    #[test]
    fn test_login_is_one_way() {
        let mut session = Session::new();
        assert!(session.login());
        assert_eq!(session.state(), SessionState::LoggedIn);
        assert!(!session.login());
        assert_eq!(session.active_view(), ActiveView::Ingredients);
    }
}
