//! What the schedule view shows for a given filter.

use crate::filter::FilterState;
use crate::index::SessionIndex;
use crate::session::Session;
use crate::venue::VenueId;

/// Venue groups and their sessions visible under `filter`.
///
/// A group is kept when its venue is selected, then narrowed to sessions whose
/// `start_date` equals the selected day exactly, and dropped if that leaves it
/// empty. Index order is kept for both groups and sessions; nothing is sorted
/// by time.
pub fn filter_sessions<'a>(
    index: &'a SessionIndex,
    filter: &FilterState,
) -> Vec<(VenueId, Vec<&'a Session>)> {
    index
        .groups()
        .iter()
        .filter(|(venue_id, _)| filter.shows_location(*venue_id))
        .map(|(venue_id, sessions)| {
            let on_day = sessions
                .iter()
                .filter(|s| s.start_date == filter.selected_date_timestamp)
                .collect::<Vec<_>>();
            (*venue_id, on_day)
        })
        .filter(|(_, sessions)| !sessions.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::day::DAYS;
    use crate::index::sessions_by_location_id;
    use crate::session::{RawSession, SessionId};
    use crate::venue::VenueRegistry;

    fn raw(id: SessionId, location_id: VenueId, start_date: i64, start_minute: i64) -> RawSession {
        RawSession {
            id,
            title: format!("Session {id}"),
            location_id,
            start_date,
            end_date: None,
            start_minute,
            end_minute: start_minute + 75,
            speakers: vec![],
        }
    }

    fn index(sessions: &[RawSession]) -> SessionIndex {
        sessions_by_location_id(sessions, &HashMap::new(), chrono_tz::Europe::Lisbon)
    }

    fn layout(view: &[(VenueId, Vec<&Session>)]) -> Vec<(VenueId, Vec<SessionId>)> {
        view.iter()
            .map(|(venue, sessions)| (*venue, sessions.iter().map(|s| s.id).collect()))
            .collect()
    }

    #[test]
    fn single_session_on_selected_day_and_venue() {
        let index = index(&[raw(1, 54245, 1667606400000, 540)]);
        let filter = FilterState::empty(1667606400000).toggle_location(54245);

        let view = filter_sessions(&index, &filter);

        assert_eq!(layout(&view), vec![(54245, vec![1])]);
        assert_eq!(view[0].1[0].time, "9:00 - 10:15");
    }

    #[test]
    fn other_day_shows_nothing() {
        let index = index(&[raw(1, 54245, 1667606400000, 540)]);
        let filter = FilterState::empty(1667692800000).toggle_location(54245);

        assert!(filter_sessions(&index, &filter).is_empty());
    }

    #[test]
    fn unrecognized_day_shows_nothing_even_with_all_venues() {
        let index = index(&[
            raw(1, 54245, DAYS[0], 540),
            raw(2, 54246, DAYS[1], 600),
            raw(3, 54248, DAYS[0], 660),
        ]);

        let filter = FilterState::default().set_date(42);

        assert_eq!(filter.selected_location_ids.len(), 4);
        assert!(filter_sessions(&index, &filter).is_empty());
    }

    #[test]
    fn no_selected_venues_shows_nothing() {
        let index = index(&[
            raw(1, 54245, DAYS[0], 540),
            raw(2, 54246, DAYS[1], 600),
            raw(3, 7, DAYS[0], 600),
        ]);

        for day in DAYS.into_iter().chain([0]) {
            assert!(filter_sessions(&index, &FilterState::empty(day)).is_empty());
        }
    }

    #[test]
    fn keeps_source_order_without_sorting_by_time() {
        let index = index(&[
            raw(1, 54246, DAYS[0], 900),
            raw(2, 54245, DAYS[0], 540),
            raw(3, 54246, DAYS[0], 540),
            raw(4, 54246, DAYS[1], 540),
        ]);

        let view = filter_sessions(&index, &FilterState::default());

        assert_eq!(layout(&view), vec![(54246, vec![1, 3]), (54245, vec![2])]);
    }

    #[test]
    fn drops_groups_emptied_by_the_day_filter() {
        let index = index(&[raw(1, 54245, DAYS[0], 540), raw(2, 54246, DAYS[1], 540)]);

        let view = filter_sessions(&index, &FilterState::default().set_date(DAYS[1]));

        assert_eq!(layout(&view), vec![(54246, vec![2])]);
    }

    #[test]
    fn unknown_venue_hidden_until_toggled_in() {
        let index = index(&[raw(1, 7, DAYS[0], 540)]);

        let default_view = filter_sessions(&index, &FilterState::default());
        assert!(default_view.is_empty());
        assert!(VenueRegistry.get(7).is_none());

        let opted_in = FilterState::default().toggle_location(7);
        assert_eq!(layout(&filter_sessions(&index, &opted_in)), vec![(7, vec![1])]);
    }
}
