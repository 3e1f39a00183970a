use anyhow::Result;
use breakgenda_core::day::{DAYS, default_day, format_day_option};
use breakgenda_core::index::ScheduleIndex;
use chrono_tz::Tz;
use owo_colors::OwoColorize;

use crate::render::pluralize;

pub fn run(index: &ScheduleIndex, tz: Tz) -> Result<()> {
    for day in DAYS {
        let count = index.sessions.sessions().filter(|s| s.start_date == day).count();
        let marker = if day == default_day() { "*" } else { " " };

        println!(
            "{} {} {} {}",
            marker,
            format_day_option(day, tz).bold(),
            day.dimmed(),
            format!("({} {})", count, pluralize("session", count)).dimmed()
        );
    }

    Ok(())
}
