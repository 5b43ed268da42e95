//! Google Calendar "render" deep links.

use chrono::{Local, NaiveDate};
use url::form_urlencoded;

use super::compact_date;
use crate::date_range::{DateRange, parse_date_range_on};
use crate::details::event_details;
use crate::tournament::TournamentRecord;

pub const GOOGLE_CALENDAR_RENDER_URL: &str = "https://calendar.google.com/calendar/render";

/// Deep link that opens Google Calendar's event editor pre-filled with the
/// tournament as an all-day event.
pub fn google_calendar_url(tournament: &TournamentRecord) -> String {
    google_calendar_url_on(tournament, Local::now().date_naive())
}

/// Same as [`google_calendar_url`] with an explicit reference date.
pub fn google_calendar_url_on(tournament: &TournamentRecord, today: NaiveDate) -> String {
    let range = parse_date_range_on(&tournament.date, today);

    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("action", "TEMPLATE")
        .append_pair("text", &tournament.competition_name)
        .append_pair("dates", &dates_param(&range, today))
        .append_pair("details", &event_details(tournament))
        .append_pair("location", tournament.location_label())
        .finish();

    format!("{GOOGLE_CALENDAR_RENDER_URL}?{query}")
}

/// `START/END` with an exclusive end date. Falls back to `TODAY/TODAY` when
/// the range could not be resolved or its end cannot be advanced.
fn dates_param(range: &DateRange, today: NaiveDate) -> String {
    let end = range
        .exclusive_end()
        .filter(|_| !range.assumptions.unrepresentable);
    match end {
        Some(end) => format!("{}/{}", compact_date(range.start), compact_date(end)),
        None => {
            let today = compact_date(today);
            format!("{today}/{today}")
        }
    }
}
