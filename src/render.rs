//! Terminal rendering for breakgenda types.
//!
//! Extension traits that turn breakgenda-core types into colored text with
//! owo_colors. The core crate never prints anything itself.

use breakgenda_core::selection::SelectionState;
use breakgenda_core::session::Session;
use breakgenda_core::speaker::Speaker;
use breakgenda_core::venue::{VenueId, VenueRegistry};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Speaker {
    fn render(&self) -> String {
        let details: Vec<&str> = [self.display_title(), self.display_company()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();

        let mut line = format!("👤 {}", self.display_name());
        if !details.is_empty() {
            line.push_str(&format!(" {}", details.join(" · ").dimmed()));
        }
        if let Some(url) = self.thumbnail_url.as_deref().filter(|u| !u.is_empty()) {
            line.push_str(&format!(" {}", url.dimmed().underline()));
        }
        line
    }
}

/// Venue heading with its map link, or the fallback name for unknown ids.
pub fn render_venue_heading(venues: &VenueRegistry, id: VenueId) -> String {
    match venues.location(id) {
        Some(link) => format!("{} {}", venues.name(id).bold(), link.dimmed()),
        None => format!("{} {}", venues.name(id).bold(), format!("({id})").dimmed()),
    }
}

pub trait SessionRender {
    /// A session card in the schedule view.
    fn render_card(&self, selected: bool) -> Vec<String>;
    /// A compact entry in the agenda tray.
    fn render_tray_entry(&self, venues: &VenueRegistry) -> String;
}

impl SessionRender for Session {
    fn render_card(&self, selected: bool) -> Vec<String> {
        let marker = if selected {
            "●".purple().to_string()
        } else {
            "○".dimmed().to_string()
        };

        let mut lines = vec![
            format!("{} {} {}", marker, format!("{:>13}", self.time).purple(), self.title.bold()),
            format!("{:16}{}", "", self.day.dimmed()),
        ];
        lines.extend(
            self.speakers
                .iter()
                .map(|speaker| format!("{:16}{}", "", speaker.render())),
        );
        lines.push(format!("{:16}{}", "", format!("#{}", self.id).dimmed()));
        lines
    }

    fn render_tray_entry(&self, venues: &VenueRegistry) -> String {
        let mut line = format!(
            "{} {} {} {}",
            format!("#{}", self.id).dimmed(),
            self.title.bold(),
            format!("{} {}", self.day, self.time).purple(),
            venues.name(self.location_id)
        );

        let speakers = self.speaker_names();
        if !speakers.is_empty() {
            line.push_str(&format!(" {}", speakers.dimmed()));
        }
        line
    }
}

/// The agenda tray, shown under the schedule.
pub fn render_tray(agenda: &SelectionState, venues: &VenueRegistry) -> String {
    let mut lines = vec![format!("{}", "Your agenda".bold().underline())];

    if agenda.is_empty() {
        lines.push(
            "   Select sessions to create your agenda"
                .dimmed()
                .to_string(),
        );
    } else {
        lines.extend(
            agenda
                .iter()
                .map(|session| format!("   {}", session.render_tray_entry(venues))),
        );
    }

    lines.join("\n")
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
