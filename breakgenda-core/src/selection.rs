//! The agenda: sessions the user picked, in the order they picked them.

use crate::session::{Session, SessionId};

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionAction {
    /// Add the session if no session with its id is selected, remove it otherwise.
    ToggleSession(Session),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    pub selected_sessions: Vec<Session>,
}

impl SelectionState {
    pub fn reduce(mut self, action: SelectionAction) -> Self {
        match action {
            SelectionAction::ToggleSession(session) => {
                if self.contains(session.id) {
                    self.selected_sessions.retain(|s| s.id != session.id);
                } else {
                    self.selected_sessions.push(session);
                }
            }
        }
        self
    }

    pub fn toggle_session(self, session: Session) -> Self {
        self.reduce(SelectionAction::ToggleSession(session))
    }

    /// Membership is by id only.
    pub fn contains(&self, id: SessionId) -> bool {
        self.selected_sessions.iter().any(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Session> {
        self.selected_sessions.iter()
    }

    pub fn len(&self) -> usize {
        self.selected_sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected_sessions.is_empty()
    }
}
