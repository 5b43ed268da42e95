//! Calendar and text exports built on the date-range parser.
//!
//! - [`google`]: single-event Google Calendar deep links
//! - [`ics`]: RFC 5545 documents for one or many tournaments
//! - [`text`]: display ranges and clipboard blocks

pub mod google;
pub mod ics;
pub mod text;

pub use google::google_calendar_url;
pub use ics::{build_icalendar, escape_ical_text};
pub use text::{build_clipboard_text, copy_tournaments, format_date_range_for_display};

use chrono::NaiveDate;

/// All-day date as used by both Google Calendar and iCalendar: `YYYYMMDD`.
pub(crate) fn compact_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}
