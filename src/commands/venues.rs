use std::collections::HashSet;

use anyhow::Result;
use breakgenda_core::day::DAYS;
use breakgenda_core::index::ScheduleIndex;
use breakgenda_core::venue::VenueRegistry;
use owo_colors::OwoColorize;

use crate::render::{pluralize, render_venue_heading};

pub fn run(index: &ScheduleIndex) -> Result<()> {
    let venues = VenueRegistry;

    // Registered venues first, then any ids only the data knows about
    let unregistered = index
        .sessions
        .groups()
        .iter()
        .map(|(id, _)| *id)
        .filter(|id| venues.get(*id).is_none());

    for id in venues.ids().chain(unregistered) {
        let sessions = index.sessions.venue(id).unwrap_or_default();
        let per_day: Vec<String> = DAYS
            .iter()
            .map(|day| sessions.iter().filter(|s| s.start_date == *day).count().to_string())
            .collect();

        println!("{}", render_venue_heading(&venues, id));
        println!(
            "   {} {}",
            format!("{} {}", sessions.len(), pluralize("session", sessions.len())),
            format!("(per day: {})", per_day.join(" / ")).dimmed()
        );
    }

    println!("{}", speaker_summary(index).dimmed());

    Ok(())
}

/// Speakers loaded, and how many of them appear on at least one session.
fn speaker_summary(index: &ScheduleIndex) -> String {
    let scheduled: HashSet<_> = index
        .sessions
        .sessions()
        .flat_map(|s| s.speakers.iter().map(|speaker| speaker.id))
        .collect();
    let total = index.speakers.len();

    format!(
        "{} {} ({} on the schedule)",
        total,
        pluralize("speaker", total),
        scheduled.len()
    )
}
