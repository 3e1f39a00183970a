use anyhow::Result;
use breakgenda_core::day::{format_day, parse_day};
use breakgenda_core::filter::FilterState;
use breakgenda_core::index::ScheduleIndex;
use breakgenda_core::selection::SelectionState;
use breakgenda_core::session::Session;
use breakgenda_core::venue::{Venue, VenueId, VenueRegistry};
use breakgenda_core::view::filter_sessions;
use chrono_tz::Tz;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::render::{SessionRender, pluralize, render_venue_heading};

/// One venue column of the view, as printed by `--json`.
#[derive(Serialize)]
struct VenueGroup<'a> {
    venue_id: VenueId,
    venue: Option<&'static Venue>,
    sessions: Vec<&'a Session>,
}

pub fn run(
    index: &ScheduleIndex,
    tz: Tz,
    day: Option<&str>,
    venues: &[VenueId],
    hidden: &[VenueId],
    json: bool,
) -> Result<()> {
    let filter = build_filter(day, venues, hidden, tz)?;

    if json {
        let groups: Vec<VenueGroup> = filter_sessions(&index.sessions, &filter)
            .into_iter()
            .map(|(venue_id, sessions)| VenueGroup {
                venue_id,
                venue: VenueRegistry.get(venue_id),
                sessions,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    print_view(index, &filter, &SelectionState::default(), tz);
    Ok(())
}

/// Start from the default filter, or from no venues when `venues` is given,
/// and apply the command line on top as toggles.
fn build_filter(
    day: Option<&str>,
    venues: &[VenueId],
    hidden: &[VenueId],
    tz: Tz,
) -> Result<FilterState> {
    let mut filter = if venues.is_empty() {
        FilterState::default()
    } else {
        let start = FilterState::default().selected_date_timestamp;
        venues
            .iter()
            .fold(FilterState::empty(start), |f, &id| f.toggle_location(id))
    };

    filter = hidden.iter().fold(filter, |f, &id| f.toggle_location(id));

    if let Some(day) = day {
        let Some(timestamp) = parse_day(day, tz) else {
            anyhow::bail!("Invalid day '{}'. Expected YYYY-MM-DD or epoch milliseconds", day);
        };
        filter = filter.set_date(timestamp);
    }

    Ok(filter)
}

/// Print the filtered schedule for `filter`, marking sessions on the agenda.
pub fn print_view(index: &ScheduleIndex, filter: &FilterState, agenda: &SelectionState, tz: Tz) {
    let venues = VenueRegistry;
    let view = filter_sessions(&index.sessions, filter);

    println!("{}", format_day(filter.selected_date_timestamp, tz).bold());

    if view.is_empty() {
        println!("   {}", "No sessions match this day and venue selection".dimmed());
        return;
    }

    for (venue_id, sessions) in &view {
        println!();
        println!(
            "{} {}",
            render_venue_heading(&venues, *venue_id),
            format!("({} {})", sessions.len(), pluralize("session", sessions.len())).dimmed()
        );
        for session in sessions {
            for line in session.render_card(agenda.contains(session.id)) {
                println!("  {}", line);
            }
        }
    }
}
