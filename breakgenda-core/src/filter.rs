//! Day and venue filter state.

use std::collections::BTreeSet;

use crate::day::default_day;
use crate::venue::{VenueId, VenueRegistry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    /// Show a different day. Any timestamp is accepted; one that matches no
    /// session simply shows nothing.
    SetDate(i64),
    /// Show the venue if hidden, hide it if shown.
    ToggleLocation(VenueId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub selected_date_timestamp: i64,
    pub selected_location_ids: BTreeSet<VenueId>,
}

impl Default for FilterState {
    /// First conference day, every registered venue shown.
    fn default() -> Self {
        FilterState {
            selected_date_timestamp: default_day(),
            selected_location_ids: VenueRegistry.ids().collect(),
        }
    }
}

impl FilterState {
    /// A filter on `day` that shows no venue yet.
    pub fn empty(day: i64) -> Self {
        FilterState {
            selected_date_timestamp: day,
            selected_location_ids: BTreeSet::new(),
        }
    }

    pub fn reduce(mut self, action: FilterAction) -> Self {
        match action {
            FilterAction::SetDate(timestamp) => {
                self.selected_date_timestamp = timestamp;
            }
            FilterAction::ToggleLocation(id) => {
                if !self.selected_location_ids.remove(&id) {
                    self.selected_location_ids.insert(id);
                }
            }
        }
        self
    }

    pub fn set_date(self, timestamp: i64) -> Self {
        self.reduce(FilterAction::SetDate(timestamp))
    }

    pub fn toggle_location(self, id: VenueId) -> Self {
        self.reduce(FilterAction::ToggleLocation(id))
    }

    pub fn shows_location(&self, id: VenueId) -> bool {
        self.selected_location_ids.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day::DAYS;

    #[test]
    fn default_shows_first_day_and_all_venues() {
        let filter = FilterState::default();
        assert_eq!(filter.selected_date_timestamp, DAYS[0]);
        assert_eq!(filter.selected_location_ids.len(), 4);
        assert!(filter.shows_location(54245));
    }

    #[test]
    fn set_date_accepts_anything() {
        let filter = FilterState::default().set_date(DAYS[1]).set_date(12345);
        assert_eq!(filter.selected_date_timestamp, 12345);
    }

    #[test]
    fn toggle_location_twice_restores_the_set() {
        let original = FilterState::default();

        let hidden = original.clone().toggle_location(54246);
        assert!(!hidden.shows_location(54246));
        assert_eq!(hidden.selected_location_ids.len(), 3);

        assert_eq!(hidden.toggle_location(54246), original);
    }

    #[test]
    fn toggle_location_can_add_unregistered_ids() {
        let filter = FilterState::default().toggle_location(1);
        assert!(filter.shows_location(1));
        assert_eq!(filter.selected_location_ids.len(), 5);
    }

    #[test]
    fn toggles_down_to_empty_and_back_up() {
        let ids: Vec<_> = VenueRegistry.ids().collect();

        let empty = ids
            .iter()
            .fold(FilterState::default(), |f, &id| f.toggle_location(id));
        assert!(empty.selected_location_ids.is_empty());

        let full = ids.iter().fold(empty, |f, &id| f.toggle_location(id));
        assert_eq!(full, FilterState::default());
    }
}
