//! Free-text tournament date parsing.
//!
//! Tournament dates are written by hand in the source spreadsheet, e.g.
//! "January 15-17 2025", "Feb 20 2025" or "Dec 28 - Jan 4". This module
//! resolves such strings into a concrete start/end pair of calendar dates.
//! Resolution is total: every input produces a range, and the fallbacks that
//! were taken along the way are recorded in [`Assumptions`].

use chrono::{Datelike, Days, Local, NaiveDate};
use tracing::debug;

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

const DECEMBER: u32 = 11;
const JANUARY: u32 = 0;

/// Fallbacks taken while resolving a date string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Assumptions {
    /// No four-digit year in the input; the reference year was used.
    pub year_inferred: bool,
    /// No month name in the input; January was used.
    pub month_defaulted: bool,
    /// No day number in the input; the 1st was used.
    pub day_defaulted: bool,
    /// A day number overflowed its month and rolled into a neighbouring one.
    pub day_rolled_over: bool,
    /// The end date resolved before the start date and was clamped to it.
    pub end_clamped: bool,
    /// The resolved dates were outside chrono's range; today was used.
    pub unrepresentable: bool,
}

impl Assumptions {
    /// True when the range is a default rather than something read from the input.
    pub fn used_fallback(&self) -> bool {
        self.month_defaulted || self.day_defaulted || self.unrepresentable
    }
}

/// An inclusive range of calendar dates. `end >= start` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub assumptions: Assumptions,
}

impl DateRange {
    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }

    /// The day after `end`, as used by all-day calendar events whose end is exclusive.
    pub fn exclusive_end(&self) -> Option<NaiveDate> {
        self.end.succ_opt()
    }
}

/// One month-name occurrence in the lower-cased input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthToken {
    /// 0 = January .. 11 = December
    pub month_index: u32,
    /// Byte offset of the month word.
    pub position: usize,
    /// A 1-2 digit day directly following the month word ("Dec 28", "Dec28").
    pub attached_day: Option<u32>,
}

/// Parse a tournament date string relative to today's local date.
pub fn parse_date_range(input: &str) -> DateRange {
    parse_date_range_on(input, Local::now().date_naive())
}

/// Parse a tournament date string, using `today` for the missing-year default
/// and for the unrepresentable-date fallback.
pub fn parse_date_range_on(input: &str, today: NaiveDate) -> DateRange {
    let cleaned = input.trim();
    let mut assumptions = Assumptions::default();

    let base_year = find_year(cleaned).unwrap_or_else(|| {
        assumptions.year_inferred = true;
        today.year()
    });

    let months = scan_months(&cleaned.to_lowercase());
    let start_month = months.first().copied();
    let end_month = months.get(1).copied().or(start_month);
    if start_month.is_none() {
        assumptions.month_defaulted = true;
    }

    let start_index = start_month.map_or(JANUARY, |m| m.month_index);
    let end_index = end_month.map_or(JANUARY, |m| m.month_index);

    let end_year = if end_index < start_index || (start_index == DECEMBER && end_index == JANUARY)
    {
        base_year + 1
    } else {
        base_year
    };

    // Attached days only count when there are two distinct month words;
    // "January 15-17" carries its end day after the dash, not after a month.
    let attached = match (months.first(), months.get(1)) {
        (Some(start), Some(end)) => start.attached_day.zip(end.attached_day),
        _ => None,
    };
    let (start_day, end_day) = attached.or_else(|| find_day_span(cleaned)).unwrap_or_else(|| {
        assumptions.day_defaulted = true;
        (1, 1)
    });

    let start = calendar_date(base_year, start_index, start_day);
    let end = calendar_date(end_year, end_index, end_day);

    let range = match (start, end) {
        (Some((start, start_rolled)), Some((end, end_rolled))) => {
            assumptions.day_rolled_over = start_rolled || end_rolled;
            if end < start {
                assumptions.end_clamped = true;
            }
            DateRange {
                start,
                end: end.max(start),
                assumptions,
            }
        }
        _ => {
            assumptions.unrepresentable = true;
            DateRange {
                start: today,
                end: today,
                assumptions,
            }
        }
    };

    if range.assumptions != Assumptions::default() {
        debug!(
            input = cleaned,
            start = %range.start,
            end = %range.end,
            assumptions = ?range.assumptions,
            "resolved date range with fallbacks"
        );
    }

    range
}

/// Every month-name occurrence in `lower`, ordered by position.
pub fn scan_months(lower: &str) -> Vec<MonthToken> {
    let mut tokens: Vec<MonthToken> = words(lower)
        .filter_map(|(position, word)| {
            let month_index = month_index(word)?;
            let rest = &lower[position + word.len()..];
            Some(MonthToken {
                month_index,
                position,
                attached_day: short_number(rest.trim_start()),
            })
        })
        .collect();

    tokens.sort_by_key(|t| t.position);
    tokens
}

fn month_index(word: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|name| word == *name || word == &name[..3])
        .map(|i| i as u32)
}

/// First run of exactly four digits.
fn find_year(text: &str) -> Option<i32> {
    digit_runs(text)
        .find(|(_, run)| run.len() == 4)
        .and_then(|(_, run)| run.parse().ok())
}

/// First standalone day number, optionally followed by `-D` or `–D`.
fn find_day_span(text: &str) -> Option<(u32, u32)> {
    let (position, run) = digit_runs(text).find(|(_, run)| run.len() <= 2)?;
    let start: u32 = run.parse().ok()?;

    let rest = text[position + run.len()..].trim_start();
    let end = rest
        .strip_prefix('-')
        .or_else(|| rest.strip_prefix('–'))
        .and_then(|after| short_number(after.trim_start()))
        .unwrap_or(start);

    Some((start, end))
}

/// A leading 1-2 digit number that is not the prefix of a longer digit run.
fn short_number(text: &str) -> Option<u32> {
    let run = leading_digits(text);
    if (1..=2).contains(&run.len()) {
        run.parse().ok()
    } else {
        None
    }
}

fn leading_digits(text: &str) -> &str {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    &text[..end]
}

/// Maximal runs of alphabetic characters with their byte offsets.
fn words(text: &str) -> impl Iterator<Item = (usize, &str)> {
    runs(text, char::is_alphabetic)
}

/// Maximal runs of ASCII digits with their byte offsets.
fn digit_runs(text: &str) -> impl Iterator<Item = (usize, &str)> {
    runs(text, |c| c.is_ascii_digit())
}

fn runs(text: &str, belongs: fn(char) -> bool) -> impl Iterator<Item = (usize, &str)> {
    let mut chars = text.char_indices().peekable();
    std::iter::from_fn(move || {
        let (start, _) = loop {
            let (i, c) = chars.next()?;
            if belongs(c) {
                break (i, c);
            }
        };
        let mut end = text.len();
        while let Some(&(i, c)) = chars.peek() {
            if !belongs(c) {
                end = i;
                break;
            }
            chars.next();
        }
        Some((start, &text[start..end]))
    })
}

/// The date `day` days into the month, counting from the 1st. Overflowing
/// days roll into the following month and day 0 is the previous month's last
/// day. Returns the date and whether it rolled over.
fn calendar_date(year: i32, month_index: u32, day: u32) -> Option<(NaiveDate, bool)> {
    if let Some(date) = NaiveDate::from_ymd_opt(year, month_index + 1, day) {
        return Some((date, false));
    }

    let first = NaiveDate::from_ymd_opt(year, month_index + 1, 1)?;
    let date = match day {
        0 => first.checked_sub_days(Days::new(1))?,
        d => first.checked_add_days(Days::new(u64::from(d - 1)))?,
    };
    Some((date, true))
}
