//! Join speakers into sessions and group sessions by venue.
//!
//! Everything here is pure: the same datasets always produce the same index.
//! Data-quality gaps are absorbed rather than reported. A speaker reference
//! that doesn't resolve is dropped from its session, and a session at a venue
//! the registry doesn't know is grouped like any other.

use std::collections::HashMap;

use chrono_tz::Tz;

use crate::day::{format_day, format_time_range};
use crate::session::{RawSession, Session, SessionId};
use crate::speaker::{Speaker, SpeakerId};
use crate::venue::VenueId;

/// Build the speaker lookup. A later record with the same id replaces an earlier one.
pub fn speakers_by_id(speakers: &[Speaker]) -> HashMap<SpeakerId, Speaker> {
    speakers.iter().map(|s| (s.id, s.clone())).collect()
}

/// Derive the display copy of a raw session.
pub fn enrich_session(
    session: &RawSession,
    speakers: &HashMap<SpeakerId, Speaker>,
    tz: Tz,
) -> Session {
    let resolved = session
        .speakers
        .iter()
        .filter_map(|reference| {
            let speaker = speakers.get(&reference.speaker_id);
            if speaker.is_none() {
                tracing::debug!(
                    session_id = session.id,
                    speaker_id = reference.speaker_id,
                    "dropping unresolved speaker reference"
                );
            }
            speaker.cloned()
        })
        .collect();

    Session {
        id: session.id,
        title: session.title.clone(),
        location_id: session.location_id,
        start_date: session.start_date,
        end_date: session.end_date,
        start_minute: session.start_minute,
        end_minute: session.end_minute,
        start_compare_date: session.start_compare_date(),
        day: format_day(session.start_date, tz),
        time: format_time_range(session.start_date, session.start_minute, session.end_minute, tz),
        speakers: resolved,
    }
}

/// Enriched sessions grouped by venue id.
///
/// Groups appear in the order their venue id first shows up in the source
/// list, and sessions inside a group keep source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionIndex {
    groups: Vec<(VenueId, Vec<Session>)>,
}

impl SessionIndex {
    pub fn groups(&self) -> &[(VenueId, Vec<Session>)] {
        &self.groups
    }

    pub fn venue(&self, id: VenueId) -> Option<&[Session]> {
        self.groups
            .iter()
            .find(|(venue_id, _)| *venue_id == id)
            .map(|(_, sessions)| sessions.as_slice())
    }

    pub fn sessions(&self) -> impl Iterator<Item = &Session> {
        self.groups.iter().flat_map(|(_, sessions)| sessions.iter())
    }

    pub fn find(&self, id: SessionId) -> Option<&Session> {
        self.sessions().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|(_, sessions)| sessions.len()).sum()
    }

    fn push(&mut self, session: Session) {
        match self
            .groups
            .iter_mut()
            .find(|(venue_id, _)| *venue_id == session.location_id)
        {
            Some((_, sessions)) => sessions.push(session),
            None => self.groups.push((session.location_id, vec![session])),
        }
    }
}

/// Enrich every session and group the results by `location_id`.
pub fn sessions_by_location_id(
    sessions: &[RawSession],
    speakers: &HashMap<SpeakerId, Speaker>,
    tz: Tz,
) -> SessionIndex {
    let mut index = SessionIndex::default();
    for session in sessions {
        index.push(enrich_session(session, speakers, tz));
    }
    index
}

/// Both lookups the view needs, built once after loading.
#[derive(Debug, Clone)]
pub struct ScheduleIndex {
    pub speakers: HashMap<SpeakerId, Speaker>,
    pub sessions: SessionIndex,
}

impl ScheduleIndex {
    pub fn build(speakers: &[Speaker], sessions: &[RawSession], tz: Tz) -> Self {
        let speakers = speakers_by_id(speakers);
        let sessions = sessions_by_location_id(sessions, &speakers, tz);

        tracing::debug!(
            speakers = speakers.len(),
            sessions = sessions.len(),
            venues = sessions.groups().len(),
            "built schedule index"
        );

        ScheduleIndex { speakers, sessions }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SpeakerRef;

    const LISBON: Tz = chrono_tz::Europe::Lisbon;
    const SATURDAY: i64 = 1667606400000;
    const SUNDAY: i64 = 1667692800000;

    fn speaker(id: SpeakerId, first: &str, last: &str) -> Speaker {
        Speaker {
            id,
            firstname: Some(first.to_string()),
            lastname: Some(last.to_string()),
            title: None,
            company: None,
            thumbnail_url: None,
        }
    }

    fn raw(id: SessionId, location_id: VenueId, start_date: i64, speakers: &[SpeakerId]) -> RawSession {
        RawSession {
            id,
            title: format!("Session {id}"),
            location_id,
            start_date,
            end_date: None,
            start_minute: 540,
            end_minute: 615,
            speakers: speakers
                .iter()
                .map(|&speaker_id| SpeakerRef { speaker_id })
                .collect(),
        }
    }

    #[test]
    fn enrich_computes_display_fields() {
        let session = enrich_session(&raw(1, 54245, SATURDAY, &[]), &HashMap::new(), LISBON);

        assert_eq!(session.start_compare_date, SATURDAY + 540 * 60_000);
        assert_eq!(session.day, "Saturday, November 5");
        assert_eq!(session.time, "9:00 - 10:15");
    }

    #[test]
    fn enrich_drops_unresolved_speakers_in_order() {
        let speakers = speakers_by_id(&[
            speaker(1, "Ada", "Lovelace"),
            speaker(2, "Grace", "Hopper"),
            speaker(3, "Alan", "Turing"),
        ]);

        let session = enrich_session(&raw(1, 54245, SATURDAY, &[3, 99, 1]), &speakers, LISBON);

        let ids: Vec<_> = session.speakers.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(session.speaker_names(), "Alan Turing, Ada Lovelace");
    }

    #[test]
    fn later_speaker_with_same_id_wins() {
        let speakers = speakers_by_id(&[speaker(1, "Old", "Name"), speaker(1, "New", "Name")]);
        assert_eq!(speakers[&1].display_name(), "New Name");
    }

    #[test]
    fn groups_by_first_appearance_and_keeps_source_order() {
        let sessions = vec![
            raw(1, 54246, SATURDAY, &[]),
            raw(2, 54245, SATURDAY, &[]),
            raw(3, 54246, SUNDAY, &[]),
            raw(4, 54245, SUNDAY, &[]),
            raw(5, 54246, SATURDAY, &[]),
        ];

        let index = sessions_by_location_id(&sessions, &HashMap::new(), LISBON);

        let layout: Vec<(VenueId, Vec<SessionId>)> = index
            .groups()
            .iter()
            .map(|(venue, sessions)| (*venue, sessions.iter().map(|s| s.id).collect()))
            .collect();
        assert_eq!(layout, vec![(54246, vec![1, 3, 5]), (54245, vec![2, 4])]);
    }

    #[test]
    fn grouping_preserves_every_session_once() {
        let sessions: Vec<_> = (1..=20)
            .map(|id| raw(id, 54245 + id % 5, if id % 2 == 0 { SATURDAY } else { SUNDAY }, &[]))
            .collect();

        let index = sessions_by_location_id(&sessions, &HashMap::new(), LISBON);

        let mut flattened: Vec<_> = index.sessions().map(|s| s.id).collect();
        flattened.sort_unstable();
        assert_eq!(flattened, (1..=20).collect::<Vec<_>>());
        assert_eq!(index.len(), 20);
    }

    #[test]
    fn unknown_venue_is_still_grouped() {
        let index = sessions_by_location_id(&[raw(1, 42, SATURDAY, &[])], &HashMap::new(), LISBON);
        assert_eq!(index.venue(42).map(|s| s.len()), Some(1));
    }

    #[test]
    fn huge_minute_offset_enriches_without_panicking() {
        let mut session = raw(1, 54245, SATURDAY, &[]);
        session.start_minute = i64::MAX / 1000;

        let index = sessions_by_location_id(&[session], &HashMap::new(), LISBON);

        let enriched = index.find(1).unwrap();
        assert_eq!(enriched.start_compare_date, i64::MAX);
        assert_eq!(enriched.time, " - 10:15");
    }

    #[test]
    fn build_is_deterministic() {
        let speakers = vec![speaker(1, "Ada", "Lovelace")];
        let sessions = vec![raw(1, 54245, SATURDAY, &[1]), raw(2, 54247, SUNDAY, &[1, 2])];

        let first = ScheduleIndex::build(&speakers, &sessions, LISBON);
        let second = ScheduleIndex::build(&speakers, &sessions, LISBON);

        assert_eq!(first.sessions, second.sessions);
        assert_eq!(first.speakers, second.speakers);
        assert_eq!(first.sessions.find(2).map(|s| s.speakers.len()), Some(1));
    }
}
