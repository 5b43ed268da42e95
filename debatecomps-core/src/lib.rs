//! Core of the DebateComps tournament directory tools.
//!
//! - [`date_range`]: resolves hand-written tournament dates into calendar ranges
//! - [`details`]: the shared event description
//! - [`export`]: Google Calendar links, `.ics` documents, display and clipboard text
//! - [`saved`] and [`clipboard`]: seams to the outside world

pub mod clipboard;
pub mod config;
pub mod date_range;
pub mod details;
pub mod error;
pub mod export;
pub mod saved;
pub mod tournament;

pub use date_range::{Assumptions, DateRange, parse_date_range};
pub use error::{DirectoryError, DirectoryResult};
pub use tournament::TournamentRecord;
