//! Combined view state: the filter plus the agenda.

use crate::filter::{FilterAction, FilterState};
use crate::index::SessionIndex;
use crate::selection::{SelectionAction, SelectionState};
use crate::session::Session;
use crate::venue::VenueId;
use crate::view::filter_sessions;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Filter(FilterAction),
    Selection(SelectionAction),
}

impl From<FilterAction> for Action {
    fn from(action: FilterAction) -> Self {
        Action::Filter(action)
    }
}

impl From<SelectionAction> for Action {
    fn from(action: SelectionAction) -> Self {
        Action::Selection(action)
    }
}

/// Everything a running view owns. Created when the view starts, dropped when
/// it ends.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schedule {
    pub filter: FilterState,
    pub selection: SelectionState,
}

impl Schedule {
    pub fn reduce(self, action: impl Into<Action>) -> Self {
        let Schedule { filter, selection } = self;
        match action.into() {
            Action::Filter(action) => {
                tracing::debug!(?action, "filter action");
                Schedule {
                    filter: filter.reduce(action),
                    selection,
                }
            }
            Action::Selection(action) => {
                tracing::debug!(?action, "selection action");
                Schedule {
                    filter,
                    selection: selection.reduce(action),
                }
            }
        }
    }

    pub fn visible<'a>(&self, index: &'a SessionIndex) -> Vec<(VenueId, Vec<&'a Session>)> {
        filter_sessions(index, &self.filter)
    }
}
