//! Human-readable event description shared by every export.

use crate::tournament::TournamentRecord;

/// Multi-line description: format, registration link, info link and fees.
///
/// The format line is always present; the others only when the field is
/// non-empty.
pub fn event_details(tournament: &TournamentRecord) -> String {
    let format = if tournament.format.is_empty() {
        "TBA"
    } else {
        &tournament.format
    };

    let mut parts = vec![format!("Format: {format}")];

    if !tournament.reg_link.is_empty() {
        parts.push(format!("Registration: {}", tournament.reg_link));
    }
    if !tournament.info_link.is_empty() {
        parts.push(format!("More Info: {}", tournament.info_link));
    }
    if !tournament.fees.is_empty() {
        parts.push(format!("Fees: {}", tournament.fees));
    }

    parts.join("\n")
}
