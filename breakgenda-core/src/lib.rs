//! Core types for breakgenda.
//!
//! This crate holds everything the schedule browser does that isn't drawing:
//! - `dataset` and `index` load the speaker/session data and join it into a
//!   venue-grouped index with display strings
//! - `filter`, `selection` and `schedule` are the reducers behind the view
//! - `view` computes what is visible for the current filter
//! - `ics` exports an agenda as iCalendar

pub mod config;
pub mod constants;
pub mod dataset;
pub mod day;
pub mod error;
pub mod filter;
pub mod ics;
pub mod index;
pub mod schedule;
pub mod selection;
pub mod session;
pub mod speaker;
pub mod venue;
pub mod view;

pub use error::{BreakgendaError, BreakgendaResult};
pub use filter::{FilterAction, FilterState};
pub use index::{ScheduleIndex, SessionIndex};
pub use schedule::{Action, Schedule};
pub use selection::{SelectionAction, SelectionState};
pub use session::{RawSession, Session, SessionId};
pub use speaker::{Speaker, SpeakerId};
pub use venue::{Venue, VenueId, VenueRegistry};
