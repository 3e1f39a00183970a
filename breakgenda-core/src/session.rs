//! Session records, raw and enriched.
//!
//! `RawSession` mirrors an entry of `sessions.json`. `Session` is the derived
//! copy the index builder produces: the same data plus display strings and
//! speakers resolved to full records.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::MS_PER_MINUTE;
use crate::speaker::{Speaker, SpeakerId};
use crate::venue::VenueId;

pub type SessionId = u64;

/// Reference from a session to one of its speakers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeakerRef {
    pub speaker_id: SpeakerId,
}

/// The `{ "sessions": [...] }` document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionsDocument {
    #[serde(default)]
    pub sessions: Vec<RawSession>,
}

/// A session as loaded from `sessions.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSession {
    pub id: SessionId,
    #[serde(default)]
    pub title: String,
    pub location_id: VenueId,
    /// Midnight of the session's day, in epoch milliseconds
    pub start_date: i64,
    /// Carried through from the data, never used for filtering
    #[serde(default)]
    pub end_date: Option<i64>,
    /// Minutes from `start_date` to the start of the session
    pub start_minute: i64,
    /// Minutes from `start_date` to the end of the session
    pub end_minute: i64,
    #[serde(default)]
    pub speakers: Vec<SpeakerRef>,
}

/// `start_date` moved by `minute` minutes, or `None` if that leaves i64.
pub fn checked_instant(start_date: i64, minute: i64) -> Option<i64> {
    minute
        .checked_mul(MS_PER_MINUTE)
        .and_then(|offset| start_date.checked_add(offset))
}

/// `start_date` moved by `minute` minutes, clamped to the i64 range.
pub fn offset_instant(start_date: i64, minute: i64) -> i64 {
    start_date.saturating_add(minute.saturating_mul(MS_PER_MINUTE))
}

impl RawSession {
    /// Absolute start instant in epoch milliseconds.
    pub fn start_compare_date(&self) -> i64 {
        offset_instant(self.start_date, self.start_minute)
    }

    /// Whether both ends of the session window are representable instants.
    pub fn has_valid_window(&self) -> bool {
        checked_instant(self.start_date, self.start_minute).is_some()
            && checked_instant(self.start_date, self.end_minute).is_some()
    }
}

/// A session after enrichment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: SessionId,
    pub title: String,
    pub location_id: VenueId,
    pub start_date: i64,
    pub end_date: Option<i64>,
    pub start_minute: i64,
    pub end_minute: i64,
    pub start_compare_date: i64,
    /// e.g. "Saturday, November 5"
    pub day: String,
    /// e.g. "9:00 - 10:15"
    pub time: String,
    pub speakers: Vec<Speaker>,
}

impl Session {
    pub fn start_utc(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.start_compare_date).single()
    }

    pub fn end_utc(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(offset_instant(self.start_date, self.end_minute))
            .single()
    }

    /// Speaker names joined with ", ", as shown in the agenda tray.
    pub fn speaker_names(&self) -> String {
        self.speakers
            .iter()
            .map(Speaker::display_name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
