//! Agenda export as iCalendar (RFC 5545).

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use icalendar::{Calendar, Component, EventLike};

use crate::error::{BreakgendaError, BreakgendaResult};
use crate::selection::SelectionState;
use crate::session::Session;
use crate::venue::VenueRegistry;

fn ics_utc(dt: DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}

fn session_event(session: &Session, venues: &VenueRegistry) -> BreakgendaResult<icalendar::Event> {
    let (start, end) = session
        .start_utc()
        .zip(session.end_utc())
        .ok_or_else(|| {
            BreakgendaError::IcsGenerate(format!("session {} has an out-of-range time", session.id))
        })?;

    let mut event = icalendar::Event::new();
    event.uid(&format!("session-{}@breakgenda", session.id));
    event.summary(&session.title);
    event.add_property("DTSTAMP", ics_utc(Utc::now()));
    event.add_property("DTSTART", ics_utc(start));
    event.add_property("DTEND", ics_utc(end));
    event.location(venues.name(session.location_id));

    let speakers = session.speaker_names();
    if !speakers.is_empty() {
        event.description(&speakers);
    }

    if let Some(url) = venues.location(session.location_id) {
        event.add_property("URL", url);
    }

    Ok(event.done())
}

/// Render every agenda entry, in agenda order, as one VCALENDAR document.
pub fn agenda_to_ics(
    agenda: &SelectionState,
    venues: &VenueRegistry,
    tz: Tz,
) -> BreakgendaResult<String> {
    let mut cal = Calendar::new();
    cal.name("Breakgenda");
    cal.timezone(tz.name());

    for session in agenda.iter() {
        cal.push(session_event(session, venues)?);
    }

    Ok(cal.done().to_string())
}
