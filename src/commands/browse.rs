//! Interactive schedule browser.
//!
//! Every user choice becomes an `Action` fed through `Schedule::reduce`; the
//! loop itself holds no other state.

use anyhow::Result;
use breakgenda_core::day::{DAYS, format_day_option};
use breakgenda_core::filter::FilterAction;
use breakgenda_core::ics::agenda_to_ics;
use breakgenda_core::index::ScheduleIndex;
use breakgenda_core::schedule::{Action, Schedule};
use breakgenda_core::selection::SelectionAction;
use breakgenda_core::venue::VenueRegistry;
use chrono_tz::Tz;
use dialoguer::{MultiSelect, Select};
use owo_colors::OwoColorize;

use crate::commands::sessions::print_view;
use crate::render::render_tray;

#[derive(Clone, Copy)]
enum MenuItem {
    ChangeDay,
    FilterVenues,
    ToggleSession,
    RemoveFromAgenda,
    OpenVenueMap,
    ExportAgenda,
    Quit,
}

impl MenuItem {
    fn label(self) -> &'static str {
        match self {
            MenuItem::ChangeDay => "Change day",
            MenuItem::FilterVenues => "Filter venues",
            MenuItem::ToggleSession => "Add or remove a session",
            MenuItem::RemoveFromAgenda => "Remove from agenda",
            MenuItem::OpenVenueMap => "Open a venue map",
            MenuItem::ExportAgenda => "Print agenda as iCalendar",
            MenuItem::Quit => "Quit",
        }
    }
}

pub fn run(index: &ScheduleIndex, tz: Tz) -> Result<()> {
    let mut schedule = Schedule::default();

    loop {
        println!();
        print_view(index, &schedule.filter, &schedule.selection, tz);
        println!();
        println!("{}", render_tray(&schedule.selection, &VenueRegistry));
        println!();

        let menu: Vec<MenuItem> = [
            MenuItem::ChangeDay,
            MenuItem::FilterVenues,
            MenuItem::ToggleSession,
        ]
        .into_iter()
        .chain(
            (!schedule.selection.is_empty())
                .then_some([MenuItem::RemoveFromAgenda, MenuItem::ExportAgenda])
                .into_iter()
                .flatten(),
        )
        .chain([MenuItem::OpenVenueMap, MenuItem::Quit])
        .collect();

        let labels: Vec<&str> = menu.iter().map(|item| item.label()).collect();
        let choice = Select::new()
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact()?;

        let actions = match menu[choice] {
            MenuItem::ChangeDay => choose_day(&schedule, tz)?,
            MenuItem::FilterVenues => choose_venues(&schedule)?,
            MenuItem::ToggleSession => choose_session(&schedule, index)?,
            MenuItem::RemoveFromAgenda => choose_agenda_entry(&schedule)?,
            MenuItem::OpenVenueMap => {
                open_venue_map()?;
                vec![]
            }
            MenuItem::ExportAgenda => {
                println!();
                print!("{}", agenda_to_ics(&schedule.selection, &VenueRegistry, tz)?);
                vec![]
            }
            MenuItem::Quit => break,
        };

        schedule = actions
            .into_iter()
            .fold(schedule, |schedule, action| schedule.reduce(action));
    }

    Ok(())
}

fn choose_day(schedule: &Schedule, tz: Tz) -> Result<Vec<Action>> {
    let labels: Vec<String> = DAYS.iter().map(|day| format_day_option(*day, tz)).collect();
    let current = DAYS
        .iter()
        .position(|day| *day == schedule.filter.selected_date_timestamp)
        .unwrap_or(0);

    let choice = Select::new()
        .with_prompt("Filter by date")
        .items(&labels)
        .default(current)
        .interact()?;

    Ok(vec![FilterAction::SetDate(DAYS[choice]).into()])
}

/// Ask for the full venue selection, then emit a toggle for every venue whose
/// state changed.
fn choose_venues(schedule: &Schedule) -> Result<Vec<Action>> {
    let venues = VenueRegistry.all();
    let names: Vec<&str> = venues.iter().map(|v| v.name).collect();
    let shown: Vec<bool> = venues
        .iter()
        .map(|v| schedule.filter.shows_location(v.id))
        .collect();

    let picked = MultiSelect::new()
        .with_prompt("Filter by location (space to toggle, enter to confirm)")
        .items(&names)
        .defaults(&shown)
        .interact()?;

    Ok(venues
        .iter()
        .enumerate()
        .filter(|(i, _)| picked.contains(i) != shown[*i])
        .map(|(_, venue)| Action::Filter(FilterAction::ToggleLocation(venue.id)))
        .collect())
}

fn choose_session(schedule: &Schedule, index: &ScheduleIndex) -> Result<Vec<Action>> {
    let visible: Vec<_> = schedule
        .visible(&index.sessions)
        .into_iter()
        .flat_map(|(_, sessions)| sessions)
        .collect();

    if visible.is_empty() {
        println!("{}", "Nothing to pick on this day".dimmed());
        return Ok(vec![]);
    }

    let labels: Vec<String> = visible
        .iter()
        .map(|s| {
            let marker = if schedule.selection.contains(s.id) { "●" } else { "○" };
            format!("{} {} {} ({})", marker, s.time, s.title, VenueRegistry.name(s.location_id))
        })
        .collect();

    let choice = Select::new()
        .with_prompt("Click a session to add or remove it")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(vec![
        SelectionAction::ToggleSession(visible[choice].clone()).into(),
    ])
}

fn choose_agenda_entry(schedule: &Schedule) -> Result<Vec<Action>> {
    let entries: Vec<_> = schedule.selection.iter().collect();
    let labels: Vec<String> = entries
        .iter()
        .map(|s| format!("{} {} {}", s.day, s.time, s.title))
        .collect();

    let choice = Select::new()
        .with_prompt("Remove which session?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(vec![
        SelectionAction::ToggleSession(entries[choice].clone()).into(),
    ])
}

fn open_venue_map() -> Result<()> {
    let venues = VenueRegistry.all();
    let names: Vec<&str> = venues.iter().map(|v| v.name).collect();

    let choice = Select::new()
        .with_prompt("Open which venue?")
        .items(&names)
        .default(0)
        .interact()?;

    let link = venues[choice].location;
    if open::that(link).is_err() {
        println!("{}", "(Could not open browser automatically, copy the link below)".dimmed());
        println!("{}", link);
    }

    Ok(())
}
