use anyhow::Result;
use breakgenda_core::ics::agenda_to_ics;
use breakgenda_core::index::ScheduleIndex;
use breakgenda_core::selection::SelectionState;
use breakgenda_core::session::SessionId;
use breakgenda_core::venue::VenueRegistry;
use chrono_tz::Tz;
use owo_colors::OwoColorize;

use crate::render::render_tray;

pub fn run(index: &ScheduleIndex, tz: Tz, ids: &[SessionId], ics: bool) -> Result<()> {
    let (agenda, unknown) = build_agenda(index, ids);

    for id in &unknown {
        eprintln!("{}", format!("No session with id {id}, skipping").yellow());
    }

    if ics {
        print!("{}", agenda_to_ics(&agenda, &VenueRegistry, tz)?);
    } else {
        println!("{}", render_tray(&agenda, &VenueRegistry));
    }

    Ok(())
}

/// Toggle each id into a fresh agenda, in order. Returns ids that matched no session.
fn build_agenda(index: &ScheduleIndex, ids: &[SessionId]) -> (SelectionState, Vec<SessionId>) {
    let mut unknown = Vec::new();

    let agenda = ids
        .iter()
        .fold(SelectionState::default(), |agenda, &id| {
            match index.sessions.find(id) {
                Some(session) => agenda.toggle_session(session.clone()),
                None => {
                    unknown.push(id);
                    agenda
                }
            }
        });

    (agenda, unknown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use breakgenda_core::dataset::Dataset;

    fn bundled_index() -> ScheduleIndex {
        let dataset = Dataset::bundled().unwrap();
        ScheduleIndex::build(&dataset.speakers, &dataset.sessions, chrono_tz::Europe::Lisbon)
    }

    #[test]
    fn keeps_pick_order_and_reports_unknown_ids() {
        let index = bundled_index();

        let (agenda, unknown) = build_agenda(&index, &[3, 1, 4242, 2]);

        assert_eq!(agenda.iter().map(|s| s.id).collect::<Vec<_>>(), vec![3, 1, 2]);
        assert_eq!(unknown, vec![4242]);
    }

    #[test]
    fn repeated_id_toggles_back_out() {
        let index = bundled_index();

        let (agenda, unknown) = build_agenda(&index, &[1, 2, 1]);

        assert_eq!(agenda.iter().map(|s| s.id).collect::<Vec<_>>(), vec![2]);
        assert!(unknown.is_empty());
    }
}
