//! Display ranges and clipboard text.

use chrono::{Local, NaiveDate};

use crate::clipboard::{ClipboardWriter, write_with_fallback};
use crate::date_range::{DateRange, parse_date_range_on};
use crate::details::event_details;
use crate::tournament::TournamentRecord;

const BLOCK_SEPARATOR: &str = "\n\n---\n\n";

/// "January 15, 2025" for a single day, "January 15, 2025 – January 17, 2025"
/// for a span.
pub fn format_date_range_for_display(date: &str) -> String {
    format_date_range_for_display_on(date, Local::now().date_naive())
}

/// Same as [`format_date_range_for_display`] with an explicit reference date.
pub fn format_date_range_for_display_on(date: &str, today: NaiveDate) -> String {
    display_range(&parse_date_range_on(date, today))
}

/// `January 15, 2025` for a single day, `start – end` otherwise.
pub fn display_range(range: &DateRange) -> String {
    let start = long_date(range.start);
    if range.is_single_day() {
        start
    } else {
        format!("{start} – {}", long_date(range.end))
    }
}

fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Plain-text summary of the tournaments, one block each. `None` when there
/// is nothing to copy.
pub fn build_clipboard_text(tournaments: &[TournamentRecord]) -> Option<String> {
    build_clipboard_text_on(tournaments, Local::now().date_naive())
}

/// Same as [`build_clipboard_text`] with an explicit reference date.
pub fn build_clipboard_text_on(
    tournaments: &[TournamentRecord],
    today: NaiveDate,
) -> Option<String> {
    if tournaments.is_empty() {
        return None;
    }

    let blocks: Vec<String> = tournaments
        .iter()
        .map(|t| clipboard_block(t, today))
        .collect();
    Some(blocks.join(BLOCK_SEPARATOR))
}

fn clipboard_block(tournament: &TournamentRecord, today: NaiveDate) -> String {
    let mut lines = vec![
        format!("Competition: {}", tournament.competition_name),
        format!(
            "Dates: {}",
            format_date_range_for_display_on(&tournament.date, today)
        ),
        format!("Location: {}", tournament.location_label()),
    ];

    let details = event_details(tournament);
    if !details.is_empty() {
        lines.push(details);
    }

    lines.join("\n")
}

/// Copy the tournaments' clipboard text through the first writer that
/// accepts it. An empty selection returns `false` without touching any writer.
pub fn copy_tournaments(
    tournaments: &[TournamentRecord],
    writers: &[&dyn ClipboardWriter],
) -> bool {
    match build_clipboard_text(tournaments) {
        Some(text) => write_with_fallback(&text, writers),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::testing::RecordingClipboard;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    fn tournament(name: &str, date: &str) -> TournamentRecord {
        TournamentRecord {
            competition_name: name.to_string(),
            date: date.to_string(),
            location: "Online".to_string(),
            format: "BP".to_string(),
            fees: "$40".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_single_day_display_has_no_dash() {
        let text = format_date_range_for_display_on("Feb 20 2025", today());
        assert_eq!(text, "February 20, 2025");
        assert!(!text.contains('–'));
    }

    #[test]
    fn test_multi_day_display_has_one_en_dash() {
        let text = format_date_range_for_display_on("Dec 28 - Jan 4 2025", today());
        assert_eq!(text, "December 28, 2025 – January 4, 2026");
        assert_eq!(text.matches('–').count(), 1);
    }

    #[test]
    fn test_clipboard_block_layout() {
        let text =
            build_clipboard_text_on(&[tournament("Yale IV", "Oct 3-5 2025")], today()).unwrap();
        assert_eq!(
            text,
            "Competition: Yale IV\n\
             Dates: October 3, 2025 – October 5, 2025\n\
             Location: Online Event\n\
             Format: BP\n\
             Fees: $40"
        );
    }

    #[test]
    fn test_clipboard_blocks_are_separated() {
        let text = build_clipboard_text_on(
            &[tournament("A", "May 1 2025"), tournament("B", "May 2 2025")],
            today(),
        )
        .unwrap();

        let blocks: Vec<&str> = text.split("\n\n---\n\n").collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with("Competition: A\n"));
        assert!(blocks[1].starts_with("Competition: B\n"));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_empty_selection_never_touches_clipboard() {
        let clipboard = RecordingClipboard::working("primary");
        assert_eq!(build_clipboard_text(&[]), None);
        assert!(!copy_tournaments(&[], &[&clipboard]));
        assert_eq!(clipboard.calls(), 0);
    }

    #[test]
    fn test_copy_uses_fallback_writer() {
        let primary = RecordingClipboard::broken("primary");
        let fallback = RecordingClipboard::working("fallback");

        assert!(copy_tournaments(&[tournament("A", "May 1 2025")], &[&primary, &fallback]));
        assert!(fallback.written.borrow()[0].starts_with("Competition: A\n"));
    }
}
