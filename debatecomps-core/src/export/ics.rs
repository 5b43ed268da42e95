//! iCalendar (.ics) generation.
//!
//! Output is written line by line rather than through a component builder so
//! the document stays byte-stable: no UID/DTSTAMP, no line folding, a fixed
//! PRODID and CRLF line endings throughout.

use chrono::{Local, NaiveDate};

use super::compact_date;
use crate::date_range::{DateRange, parse_date_range_on};
use crate::details::event_details;
use crate::tournament::TournamentRecord;

pub const PRODID: &str = "-//DebateComps//Tournament Calendar//EN";

/// Default file name for a bulk export of saved tournaments.
pub const DEFAULT_EXPORT_FILE: &str = "saved-tournaments.ics";

const CRLF: &str = "\r\n";

/// One VCALENDAR holding an all-day VEVENT per tournament, in input order.
pub fn build_icalendar(tournaments: &[TournamentRecord]) -> String {
    build_icalendar_on(tournaments, Local::now().date_naive())
}

/// Same as [`build_icalendar`] with an explicit reference date.
pub fn build_icalendar_on(tournaments: &[TournamentRecord], today: NaiveDate) -> String {
    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{PRODID}"),
    ];

    for tournament in tournaments {
        lines.extend(vevent_lines(tournament, today));
    }

    lines.push("END:VCALENDAR".to_string());
    lines.join(CRLF)
}

fn vevent_lines(tournament: &TournamentRecord, today: NaiveDate) -> Vec<String> {
    event_lines(tournament, &parse_date_range_on(&tournament.date, today))
}

fn event_lines(tournament: &TournamentRecord, range: &DateRange) -> Vec<String> {
    // All-day DTEND is exclusive (RFC 5545 3.6.1)
    let end = range.exclusive_end().unwrap_or(range.end);

    vec![
        "BEGIN:VEVENT".to_string(),
        format!("SUMMARY:{}", escape_ical_text(&tournament.competition_name)),
        format!("DTSTART;VALUE=DATE:{}", compact_date(range.start)),
        format!("DTEND;VALUE=DATE:{}", compact_date(end)),
        format!("DESCRIPTION:{}", escape_ical_text(&event_details(tournament))),
        format!("LOCATION:{}", escape_ical_text(tournament.location_label())),
        "END:VEVENT".to_string(),
    ]
}

/// Escape TEXT values: backslash first, then `;`, `,` and newlines.
pub fn escape_ical_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
}
