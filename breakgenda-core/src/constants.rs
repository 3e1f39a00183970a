/// Milliseconds in one minute; session offsets are in minutes, dates in ms.
pub const MS_PER_MINUTE: i64 = 60_000;

/// Time zone the conference runs in, used for every displayed date and time.
pub const DEFAULT_TIMEZONE: &str = "Europe/Lisbon";

/// Fallback display name for sessions whose venue isn't in the registry.
pub const UNKNOWN_VENUE_NAME: &str = "Unknown venue";

pub const SPEAKERS_FILE: &str = "speakers.json";
pub const SESSIONS_FILE: &str = "sessions.json";
